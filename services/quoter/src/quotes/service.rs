use std::sync::Arc;

use tracing::{debug, info_span, Span};

use super::{NewQuote, Quote, QuoteId, QuoteResult, QuoteStore};

/// Front door to a [`QuoteStore`] for the HTTP layer.
///
/// Every call is logged under the span handed in at construction and then
/// forwarded to the store; results and errors come back untouched.
#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
    span: Span,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self::with_span(store, info_span!("quote_service"))
    }

    pub fn with_span(store: Arc<dyn QuoteStore>, span: Span) -> Self {
        Self { store, span }
    }

    pub fn add_quote(&self, quote: NewQuote) -> QuoteResult<Quote> {
        debug!(parent: &self.span, author = %quote.author, "adding quote");
        self.store.add(quote)
    }

    pub fn all_quotes(&self) -> QuoteResult<Vec<Quote>> {
        debug!(parent: &self.span, "listing all quotes");
        self.store.list_all()
    }

    pub fn quotes_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        debug!(parent: &self.span, author, "listing quotes by author");
        self.store.list_by_author(author)
    }

    pub fn random_quote(&self) -> QuoteResult<Option<Quote>> {
        debug!(parent: &self.span, "picking random quote");
        self.store.random()
    }

    pub fn delete_quote(&self, id: QuoteId) -> QuoteResult<()> {
        debug!(parent: &self.span, id, "deleting quote");
        self.store.delete(id)
    }

    pub fn quote_count(&self) -> QuoteResult<usize> {
        debug!(parent: &self.span, "counting quotes");
        self.store.len()
    }
}
