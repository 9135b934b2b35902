use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Error)]
pub enum ToolArgsError {
    #[error("Invalid arguments: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationErrors),
}

pub struct ValidatedArgs<T>(pub T);

impl<T> ValidatedArgs<T>
where
    T: DeserializeOwned + Validate,
{
    /// Decodes tool arguments; `null` is treated as an empty argument object.
    pub fn from_arguments(arguments: Value) -> Result<Self, ToolArgsError> {
        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        let data: T = serde_json::from_value(arguments)?;
        data.validate()?;

        Ok(ValidatedArgs(data))
    }
}

/// Accepts a string argument the way hosts actually send them: strings,
/// numbers and booleans are taken as text, `null` as empty. Surrounding
/// whitespace is trimmed.
pub fn string_arg<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    raw_string_arg(deserializer).map(|s| s.trim().to_string())
}

/// Like `string_arg`, but keeps the text exactly as sent.
pub fn raw_string_arg<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
