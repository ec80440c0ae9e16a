use thiserror::Error;

/// Startup failures. Both are fatal; nothing is retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("could not create window: {0}")]
    SurfaceCreationFailed(String),
    #[error("could not create renderer: {0}")]
    DrawContextCreationFailed(String),
}
