use thiserror::Error as ThisError;

/// Failures the web layer can turn into an error page.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl Error {
    pub fn internal<T: std::fmt::Display>(err: T) -> Self {
        Self::InternalServerError(err.to_string())
    }
}
