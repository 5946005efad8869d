use thiserror::Error;

/// Errors raised by the teapot CRUD service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeapotError {
    #[error("Teapot with id {0} not found")]
    NotExists(String),

    #[error("Teapots with ids {} not found", .0.join(", "))]
    NotExistAll(Vec<String>),

    #[error("Teapot with id {0} already exists")]
    AlreadyExists(String),

    #[error("Teapots with ids {} already exist", .0.join(", "))]
    AlreadyExistAll(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<String> for TeapotError {
    fn from(message: String) -> Self {
        Self::Storage(message)
    }
}

pub type TeapotResult<T> = Result<T, TeapotError>;
