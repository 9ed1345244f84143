//! JSON enum schema parser.
//!
//! A document is either a single enum:
//!
//! ```json
//! { "name": "Color", "closed": false, "values": [{ "name": "COLOR_RED", "number": 0 }] }
//! ```
//!
//! or a list of them under `"enums"`. `closed` defaults to `false`.

use crate::descriptor::EnumSchema;
use serde::Deserialize;
use serde_json::Value;

/// Error reading an enum schema document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid enum schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a single enum definition.
pub fn parse_enum_schema(input: &Value) -> Result<EnumSchema, ParseError> {
    Ok(EnumSchema::deserialize(input)?)
}

/// Parse a document holding one enum or an `"enums"` array of them.
pub fn parse_enum_schemas(input: &Value) -> Result<Vec<EnumSchema>, ParseError> {
    match input.get("enums") {
        Some(enums) => Ok(Vec::<EnumSchema>::deserialize(enums)?),
        None => Ok(vec![parse_enum_schema(input)?]),
    }
}
