//! This module exposes the field types a tuple can be made of.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Length in bytes of the payload of a [`FieldType::String`] field.
pub const STRING_LEN: usize = 128;

/// An enumeration of all supported field types.
///
/// Each type has a fixed size in bytes, so tuples made of them have a fixed size as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// 32-bit signed integer.
    Int,
    /// Fixed-length string; a 4 bytes length prefix followed by [`STRING_LEN`] bytes.
    String,
}

impl FieldType {
    /// Returns the size in bytes of a value of this type.
    pub const fn size(&self) -> usize {
        match self {
            FieldType::Int => 4,
            FieldType::String => STRING_LEN + 4,
        }
    }

    /// Returns the type name as a string.
    pub const fn type_name(&self) -> &'static str {
        match self {
            FieldType::Int => "INT_TYPE",
            FieldType::String => "STRING_TYPE",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    /// Parses the type names used in catalog files (`int`, `string`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" => Ok(FieldType::Int),
            "string" => Ok(FieldType::String),
            _ => Err(SchemaError::UnknownFieldType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_get_fixed_size() {
        assert_eq!(FieldType::Int.size(), 4);
        assert_eq!(FieldType::String.size(), 132);
    }

    #[test]
    fn test_should_display_type_name() {
        assert_eq!(FieldType::Int.to_string(), "INT_TYPE");
        assert_eq!(FieldType::String.to_string(), "STRING_TYPE");
    }

    #[test]
    fn test_should_parse_catalog_type_names() {
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!(" STRING ".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!(
            "float".parse::<FieldType>().unwrap_err(),
            SchemaError::UnknownFieldType("float".to_string())
        );
    }

    #[test]
    fn test_should_serde_encode_decode() {
        let json = serde_json::to_string(&FieldType::String).expect("failed to serialize");
        let decoded: FieldType = serde_json::from_str(&json).expect("failed to deserialize");
        assert_eq!(decoded, FieldType::String);
    }
}
