use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl UtilError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        UtilError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            UtilError::InvalidInput { reason } => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
