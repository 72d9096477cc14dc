pub type ScrolldeckResult<T> = Result<T, ScrolldeckError>;

#[derive(thiserror::Error, Debug)]
pub enum ScrolldeckError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("curve error: {0}")]
    Curve(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrolldeckError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
