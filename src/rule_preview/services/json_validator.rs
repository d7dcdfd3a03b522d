use serde::Serialize;
use serde_json::Value;

/// Helper text shown while the buffer is empty or does not parse
pub const PROMPT_HELPER_TEXT: &str = "Please enter valid JSON";
/// Helper text shown once the buffer parses
pub const VALID_HELPER_TEXT: &str = "Valid JSON! 🥰";

/// Outcome of validating the free-style JSON buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FreeStyleValidation {
    #[default]
    Empty,
    Valid(Value),
    Invalid,
}

/// Validation attribute of the input widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatedState {
    Default,
    Success,
    Error,
}

impl ValidatedState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatedState::Default => "default",
            ValidatedState::Success => "success",
            ValidatedState::Error => "error",
        }
    }
}

impl FreeStyleValidation {
    pub fn validated(&self) -> ValidatedState {
        match self {
            FreeStyleValidation::Empty => ValidatedState::Default,
            FreeStyleValidation::Valid(_) => ValidatedState::Success,
            FreeStyleValidation::Invalid => ValidatedState::Error,
        }
    }

    pub fn helper_text(&self) -> &'static str {
        match self {
            FreeStyleValidation::Valid(_) => VALID_HELPER_TEXT,
            FreeStyleValidation::Empty | FreeStyleValidation::Invalid => PROMPT_HELPER_TEXT,
        }
    }

    /// Parsed value, only present when the buffer is valid
    pub fn value(&self) -> Option<&Value> {
        match self {
            FreeStyleValidation::Valid(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FreeStyleValidation::Valid(_))
    }
}

/// Classifies the free-style text buffer as empty, valid JSON or invalid.
pub struct JsonValidator;

impl JsonValidator {
    pub fn validate(input: &str) -> FreeStyleValidation {
        if input.is_empty() {
            return FreeStyleValidation::Empty;
        }
        match serde_json::from_str::<Value>(input) {
            Ok(value) => FreeStyleValidation::Valid(value),
            Err(e) => {
                tracing::trace!("free-style input rejected: {}", e);
                FreeStyleValidation::Invalid
            }
        }
    }
}
