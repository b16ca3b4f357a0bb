use thiserror::Error;
use validator::ValidationErrors;

/// Rejection of a product form draft before any request is sent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Price must be a number, got '{0}'")]
    InvalidPrice(String),

    #[error("Quantity must be a whole number, got '{0}'")]
    InvalidQuantity(String),

    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {field}"));
                messages.push(message);
            }
        }

        if messages.is_empty() {
            messages.push("Validation failed".to_string());
        }

        FormError::Validation(messages)
    }
}
