//! `struct_`: builds a `TypeLiteral` from property signatures (§4.F).

use crate::ast::error::AstError;
use crate::ast::struct_lit::{IndexSignature, PropertySignature};
use crate::ast::Ast;
use crate::value::Key;

/// A required, read-write property.
pub fn property(name: impl Into<Key>, ast: Ast) -> PropertySignature {
    PropertySignature { name: name.into(), ast, optional: false, readonly: false }
}

/// §9 design note: rather than a marker-tagged schema, optionality is a
/// distinct field-descriptor constructor — "cleaner in statically typed
/// hosts and equivalent in behavior."
pub fn optional_property(name: impl Into<Key>, ast: Ast) -> PropertySignature {
    PropertySignature { name: name.into(), ast, optional: true, readonly: false }
}

pub fn readonly_property(mut property: PropertySignature) -> PropertySignature {
    property.readonly = true;
    property
}

/// Builds a struct/record type literal from `properties` plus any
/// `index_signatures` (record-shaped excess-key typing, §3.1).
pub fn struct_(properties: Vec<PropertySignature>, index_signatures: Vec<IndexSignature>) -> Result<Ast, AstError> {
    Ast::type_literal(properties, index_signatures)
}
