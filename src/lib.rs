//! A composable schema algebra: a closed AST of schema combinators
//! (literals, unions, tuples, structs, refinements, transforms, recursive
//! lazy schemas) and a family of interpreters that fold that AST into a
//! decoder, an encoder, a structural guard, a pretty-printer, and (behind
//! the `arbitrary` feature) a random-value generator.
//!
//! The AST (`ast`) and its algebra (`algebra`: `pick`/`omit`/`partial`/
//! `extend`/`keyof`) are the data model; `interpreter` folds an `Ast` into
//! behavior; `combinators` is the user-facing surface that builds `Ast`
//! nodes without callers touching the AST types directly; `Schema<T>`
//! wraps a compiled AST with the `decode`/`encode`/`is`/`*OrThrow`
//! operations most callers want.
//!
//! ```
//! use schema_ir::combinators::{property, string, struct_};
//! use schema_ir::Schema;
//! use schema_ir::value::Value;
//!
//! let person = struct_(vec![property("name", string())], vec![]).unwrap();
//! let schema: Schema = Schema::new(person);
//! assert!(schema.decode(&Value::Object(Default::default())).is_err());
//! ```

pub mod algebra;
pub mod ast;
pub mod combinators;
pub mod error;
pub mod interpreter;
pub mod options;
pub mod result;
pub mod schema;
pub mod value;

pub use error::SchemaError;
pub use options::{OnExcessProperty, ParseOptions};
pub use result::{Failure, ParseIssue, ParseResult, Success};
pub use schema::Schema;
