use super::{NewQuote, Quote, QuoteId, QuoteResult};

/// Operations every quote backend provides.
///
/// Callers only ever see snapshots: returned quotes are owned copies and stay
/// valid regardless of later writes to the store. Implementations must be safe
/// to share across request tasks.
pub trait QuoteStore: Send + Sync {
    /// Assigns the next id and stores the quote.
    fn add(&self, quote: NewQuote) -> QuoteResult<Quote>;

    /// All quotes in insertion order.
    fn list_all(&self) -> QuoteResult<Vec<Quote>>;

    /// Quotes whose author matches exactly (case-sensitive), in insertion order.
    fn list_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>>;

    /// A uniformly chosen quote, or `None` when the store is empty.
    fn random(&self) -> QuoteResult<Option<Quote>>;

    /// Removes a quote. Fails with `QuoteError::NotFound` if the id is unknown.
    fn delete(&self, id: QuoteId) -> QuoteResult<()>;

    fn len(&self) -> QuoteResult<usize>;
}
