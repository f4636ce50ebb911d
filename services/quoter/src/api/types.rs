use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::quotes::NewQuote;

/// Body of `POST /quotes`. Missing fields decode as empty strings and are
/// rejected by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "quote")]
    pub text: String,
}

impl From<CreateQuoteRequest> for NewQuote {
    fn from(request: CreateQuoteRequest) -> Self {
        NewQuote::new(request.author, request.text)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuotesQuery {
    #[serde(default)]
    pub author: Option<String>,
}

impl ListQuotesQuery {
    /// The author filter, treating `?author=` the same as no filter.
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|author| !author.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
        }
    }
}
