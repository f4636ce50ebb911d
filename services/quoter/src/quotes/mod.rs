pub mod error;
pub mod memory;
pub mod model;
pub mod service;
pub mod store;

pub use error::{QuoteError, QuoteResult};
pub use memory::InMemoryQuoteStore;
pub use model::{NewQuote, Quote, QuoteId};
pub use service::QuoteService;
pub use store::QuoteStore;

/// Id handed out by a fresh store for its first quote.
pub const FIRST_QUOTE_ID: QuoteId = 1;
