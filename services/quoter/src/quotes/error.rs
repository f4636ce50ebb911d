use thiserror::Error;

use super::QuoteId;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote {0} not found")]
    NotFound(QuoteId),
    #[error("invalid quote: {0}")]
    InvalidInput(String),
    #[error("quote store unavailable: {0}")]
    Unavailable(String),
}

impl QuoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuoteError::NotFound(_))
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;
