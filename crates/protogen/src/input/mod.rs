//! Input format parsers.
//!
//! Each parser reads a schema document and produces [`EnumSchema`](crate::EnumSchema)s.

mod json;

pub use json::{ParseError, parse_enum_schema, parse_enum_schemas};
