//! Client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or an undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The submitted form does not say which cafe it is for
    #[error("Form {0} has no cafe-id attribute")]
    MissingCafeId(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
