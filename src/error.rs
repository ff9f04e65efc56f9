use thiserror::Error;

/// Message shown when an external failure carries nothing usable.
pub const DEFAULT_FAILURE_MESSAGE: &str = "failed to process payment, try again";

/// Local form validation failures. Never reach the account service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingRequiredFields,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password too short")]
    PasswordTooShort,
    #[error("missing card fields")]
    MissingCardFields,
}

/// Failure reported by the account/subscription backend.
///
/// The message is whatever the provider returned and may be empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("account creation failed: {0}")]
    AccountCreation(ServiceError),
    #[error("subscription update failed: {0}")]
    SubscriptionUpdate(ServiceError),
    #[error("a submission is already in progress")]
    Busy,
    #[error("operation not allowed in state {0}")]
    InvalidState(&'static str),
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CheckoutError {
    /// The text the presentation layer shows next to the form.
    ///
    /// Validation messages are surfaced verbatim. Backend failures pass the
    /// provider message through, falling back to [`DEFAULT_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Validation(e) => e.to_string(),
            CheckoutError::AccountCreation(e) | CheckoutError::SubscriptionUpdate(e) => {
                let message = e.message.trim();
                if message.is_empty() {
                    DEFAULT_FAILURE_MESSAGE.to_string()
                } else {
                    message.to_string()
                }
            }
            _ => DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
