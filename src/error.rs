use crate::Location;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`Decoder::decode_json`][`crate::Decoder::decode_json`].
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON. The parser's error is passed through
    /// unchanged.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The input was valid JSON, but did not have the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A decode failure, located at the first point of mismatch.
///
/// ```
/// use jsondec::{array, number};
/// use serde_json::json;
///
/// let err = array(number()).decode_any(&json!([1, 2, "x"])).unwrap_err();
/// assert_eq!("[2]", err.location());
/// assert_eq!(Some("number"), err.expected());
/// assert_eq!(Some("string"), err.got());
/// assert_eq!("at input[2]: expected number, got string", err.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("at input{location}: {reason}")]
pub struct DecodeError {
    location: String,
    reason: Reason,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
enum Reason {
    #[error("expected {expected}, got {got}")]
    Mismatch {
        expected: String,
        got: &'static str,
    },

    #[error("expected {expected}")]
    Expected { expected: String },

    #[error("{0}")]
    Message(String),
}

impl DecodeError {
    /// A value was present at `location` but was not what was expected.
    pub(crate) fn mismatch(
        location: &Location<'_>,
        expected: impl Into<String>,
        value: &Value,
    ) -> Self {
        Self {
            location: location.render(),
            reason: Reason::Mismatch {
                expected: expected.into(),
                got: kind(value),
            },
        }
    }

    /// A failure with no single culprit value, such as missing keys.
    pub(crate) fn expecting(location: &Location<'_>, expected: impl Into<String>) -> Self {
        Self {
            location: location.render(),
            reason: Reason::Expected {
                expected: expected.into(),
            },
        }
    }

    pub(crate) fn custom(location: &Location<'_>, message: impl Into<String>) -> Self {
        Self {
            location: location.render(),
            reason: Reason::Message(message.into()),
        }
    }

    /// The rendered path to the failure. The input's root renders as `""`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// A description of the shape that was expected, if the failure was a
    /// shape mismatch.
    pub fn expected(&self) -> Option<&str> {
        match &self.reason {
            Reason::Mismatch { expected, .. } | Reason::Expected { expected } => {
                Some(expected.as_str())
            }
            Reason::Message(_) => None,
        }
    }

    /// The kind of the offending value, when there was one.
    pub fn got(&self) -> Option<&str> {
        match &self.reason {
            Reason::Mismatch { got, .. } => Some(*got),
            _ => None,
        }
    }

    /// The literal message of failures that are not shape mismatches, such
    /// as those produced by [`fail`][`crate::fail`].
    pub fn message(&self) -> Option<&str> {
        match &self.reason {
            Reason::Message(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// The kind tag reported for a value in error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
