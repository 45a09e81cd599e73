//! Value type enumeration shared with the ORM layer

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type code of a column or configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Unknown,
    #[serde(rename = "integer")]
    Int,
    Long,
    Short,
    Boolean,
    Float,
    String,
    Char,
    Varchar,
    Array,
    Object,
    Date,
}

impl ValueType {
    /// The lowercase type name.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Unknown => "unknown",
            ValueType::Int => "integer",
            ValueType::Long => "long",
            ValueType::Short => "short",
            ValueType::Boolean => "boolean",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Char => "char",
            ValueType::Varchar => "varchar",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Date => "date",
        }
    }

    /// Whether this is one of the integer types.
    pub fn is_integer(self) -> bool {
        matches!(self, ValueType::Int | ValueType::Long | ValueType::Short)
    }

    /// Whether this is one of the string types.
    pub fn is_string(self) -> bool {
        matches!(self, ValueType::String | ValueType::Char | ValueType::Varchar)
    }

    /// Whether this is a numeric type (integer or float).
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self == ValueType::Float
    }

    /// Whether this is a scalar type (numeric, boolean, or string).
    pub fn is_scalar(self) -> bool {
        self.is_numeric() || self == ValueType::Boolean || self.is_string()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
