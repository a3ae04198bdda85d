use axum::http::StatusCode;
use thiserror::Error;

/// Rejected challenge operation. None of these leave the state modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("day index {0} is outside 0..=20")]
    InvalidIndex(usize),

    #[error("{steps} steps is below the daily goal of {goal}")]
    GoalNotReached { steps: u64, goal: u64 },

    #[error("unknown device profile '{0}'")]
    UnknownProfile(String),

    #[error("invalid step count '{0}'")]
    InvalidStepsValue(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<ChallengeError> for AppError {
    fn from(err: ChallengeError) -> Self {
        match err {
            ChallengeError::GoalNotReached { .. } => Self::conflict(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
