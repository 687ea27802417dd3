use crate::params::PARAMETER_COUNT;

#[derive(thiserror::Error, Debug)]
pub enum ProsodyError {
    #[error("Parameter vector has {0} slots, expected {expected}", expected = PARAMETER_COUNT)]
    InvalidWidth(usize),
    #[error("Parameter slot {index} holds a non-finite value ({value})")]
    NonFinite { index: usize, value: f64 },
    #[error("Rule '{rule}' left '{symbol}' with a non-positive duration ({duration})")]
    NonPositiveDuration {
        symbol: char,
        rule: &'static str,
        duration: f64,
    },
    #[error("Phoneme '{0}' has no baseline in the phoneme table")]
    UnknownPhoneme(char),
    #[error("Phoneme '{0}' maps to an empty list of parameter-sets")]
    EmptyBaseline(char),
    #[error("Invalid phoneme table: {0}")]
    Table(String),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid engine parameters: {0}")]
    InvalidParams(String),
}

impl From<derive_builder::UninitializedFieldError> for ProsodyError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        ProsodyError::InvalidParams(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_builder_field_maps_to_invalid_params() {
        let err = ProsodyError::from(derive_builder::UninitializedFieldError::new("history_scope"));
        assert!(matches!(err, ProsodyError::InvalidParams(ref msg) if msg.contains("history_scope")));
    }
}
