//! Application Error Type

use base44_client::Base44Error;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Backend(#[from] Base44Error),

    #[error("invalid data: {0}")]
    Data(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(err.to_string())
    }
}

impl AppError {
    /// Short text for toast descriptions
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend(Base44Error::Unauthorized) => "Your session has expired. Please sign in again.".to_string(),
            AppError::Backend(Base44Error::NotInitialized) => "The service is not available right now.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
