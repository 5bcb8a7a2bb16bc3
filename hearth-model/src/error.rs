use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("unknown message status: {0}")]
    UnknownMessageStatus(String),

    #[error("unknown visit status: {0}")]
    UnknownVisitStatus(String),

    #[error("unknown visit type: {0}")]
    UnknownVisitType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
