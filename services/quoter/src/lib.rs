pub mod api;
pub mod config;
pub mod quotes;
pub mod server;

pub use api::{create_router, ApiState, ErrorResponse};
pub use config::{LogFormat, QuoterConfig};
pub use quotes::{
    InMemoryQuoteStore, NewQuote, Quote, QuoteError, QuoteId, QuoteResult, QuoteService,
    QuoteStore,
};
pub use server::QuoteServer;
