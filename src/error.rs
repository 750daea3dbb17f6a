//! `SchemaError`: the single error type the `*OrThrow` helpers raise
//! (§4.D.3, §7). Everything else in the decode/encode path returns a
//! [`crate::result::ParseResult`] value — this type exists purely to give
//! host code that wants `?`-propagation one thing to propagate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}
