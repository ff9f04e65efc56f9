use super::pix::PixPayload;
use serde::Serialize;

/// Where the checkout page currently is.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Error(String),
    PixAwaitingConfirmation(PixPayload),
}

impl SubmissionState {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Error(_) => "error",
            SubmissionState::PixAwaitingConfirmation(_) => "pix_awaiting_confirmation",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn pix_payload(&self) -> Option<&PixPayload> {
        match self {
            SubmissionState::PixAwaitingConfirmation(payload) => Some(payload),
            _ => None,
        }
    }
}
