use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid input for `{field}`: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("Export error: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        PlannerError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Form field the error belongs to, for inline validation messages
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PlannerError::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Every failure is scoped to one submission; resubmitting with corrected
    /// input starts over from scratch.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidInput { .. } => "INVALID_INPUT",
            PlannerError::Export(_) => "EXPORT_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "field": self.field(),
                "message": self.to_string(),
                "recoverable": self.is_recoverable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_payload() {
        let error = PlannerError::invalid_input("days", "must be at least 1");
        assert_eq!(error.error_code(), "INVALID_INPUT");
        assert_eq!(error.field(), Some("days"));
        assert!(error.to_string().contains("must be at least 1"));

        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["field"], "days");
        assert_eq!(payload["error"]["recoverable"], true);
    }

    #[test]
    fn test_export_error_has_no_field() {
        let error = PlannerError::Export("itinerary is empty".to_string());
        assert_eq!(error.error_code(), "EXPORT_ERROR");
        assert!(error.field().is_none());
        assert!(error.to_error_payload()["error"]["field"].is_null());
    }
}
