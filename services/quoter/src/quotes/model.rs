use serde::{Deserialize, Serialize};

use super::error::{QuoteError, QuoteResult};

pub type QuoteId = u64;

/// A stored quotation. The body travels as `quote` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

/// Write-path input: a quote that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub author: String,
    pub text: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    pub fn validate(&self) -> QuoteResult<()> {
        if self.author.is_empty() {
            return Err(QuoteError::InvalidInput("author cannot be empty".to_string()));
        }
        if self.text.is_empty() {
            return Err(QuoteError::InvalidInput(
                "quote text cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_quote(self, id: QuoteId) -> Quote {
        Quote {
            id,
            author: self.author,
            text: self.text,
        }
    }
}
