//! Typed route parameters
//!
//! Routes declare named parameter slots, each with a primitive semantic
//! type. Navigation supplies concrete values, which must match the declared
//! slots exactly: every slot filled with the right type, no extras.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors produced by parameter validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    /// A declared slot has no supplied value
    #[error("Missing required parameter '{name}'")]
    MissingSlot {
        /// Name of the unfilled slot
        name: String,
    },

    /// A supplied value names no declared slot
    #[error("Unknown parameter '{name}'")]
    UnknownSlot {
        /// Name of the extraneous value
        name: String,
    },

    /// A supplied value has the wrong type for its slot
    #[error("Parameter '{name}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the slot
        name: String,
        /// Declared slot type
        expected: ParamType,
        /// Type of the supplied value
        actual: ParamType,
    },
}

/// Primitive semantic type of a parameter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// UTF-8 text
    String,
    /// Signed 64-bit integer
    Integer,
    /// True or false
    Boolean,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => write!(f, "string"),
            ParamType::Integer => write!(f, "integer"),
            ParamType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A named, typed parameter slot declared on a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSlot {
    /// Slot name, unique within the route
    pub name: String,
    /// Expected value type
    pub ty: ParamType,
}

impl ParamSlot {
    /// Create a slot
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A concrete parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// UTF-8 text
    String(String),
    /// Signed 64-bit integer
    Integer(i64),
    /// True or false
    Boolean(bool),
}

impl ParamValue {
    /// The semantic type of this value
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::String(_) => ParamType::String,
            ParamValue::Integer(_) => ParamType::Integer,
            ParamValue::Boolean(_) => ParamType::Boolean,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Boolean(value)
    }
}

/// Parameter values keyed by slot name
pub type ParamMap = HashMap<String, ParamValue>;

/// Validate supplied parameters against a route's declared slots
///
/// Rejects missing required slots, unknown extras, and type mismatches.
pub fn validate_params(slots: &[ParamSlot], params: &ParamMap) -> Result<(), ParamError> {
    for slot in slots {
        match params.get(&slot.name) {
            None => {
                return Err(ParamError::MissingSlot {
                    name: slot.name.clone(),
                })
            }
            Some(value) if value.param_type() != slot.ty => {
                return Err(ParamError::TypeMismatch {
                    name: slot.name.clone(),
                    expected: slot.ty,
                    actual: value.param_type(),
                })
            }
            Some(_) => {}
        }
    }

    for name in params.keys() {
        if !slots.iter().any(|slot| slot.name == *name) {
            return Err(ParamError::UnknownSlot { name: name.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_slot() -> Vec<ParamSlot> {
        vec![ParamSlot::new("name", ParamType::String)]
    }

    #[test]
    fn test_exact_match_accepted() {
        let mut params = ParamMap::new();
        params.insert("name".to_string(), ParamValue::from("Old User"));
        assert_eq!(validate_params(&name_slot(), &params), Ok(()));
    }

    #[test]
    fn test_missing_slot_rejected() {
        let params = ParamMap::new();
        assert_eq!(
            validate_params(&name_slot(), &params),
            Err(ParamError::MissingSlot {
                name: "name".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_slot_rejected() {
        let mut params = ParamMap::new();
        params.insert("name".to_string(), ParamValue::from("Old User"));
        params.insert("age".to_string(), ParamValue::from(42));
        assert_eq!(
            validate_params(&name_slot(), &params),
            Err(ParamError::UnknownSlot {
                name: "age".to_string()
            })
        );
    }

    #[test]
    fn test_type_mismatch_rejected() {
        let mut params = ParamMap::new();
        params.insert("name".to_string(), ParamValue::from(true));
        assert_eq!(
            validate_params(&name_slot(), &params),
            Err(ParamError::TypeMismatch {
                name: "name".to_string(),
                expected: ParamType::String,
                actual: ParamType::Boolean,
            })
        );
    }

    #[test]
    fn test_no_slots_no_params() {
        assert_eq!(validate_params(&[], &ParamMap::new()), Ok(()));
    }

    #[test]
    fn test_param_value_serialization() {
        let value = ParamValue::from("hello");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"hello\"");
        let parsed: ParamValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, parsed);
    }
}
