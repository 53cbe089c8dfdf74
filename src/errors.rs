// errors.rs
use crate::remote::RemoteError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or the backend API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Backend unavailable: {0}")]
    Upstream(#[from] RemoteError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Upstream(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}
