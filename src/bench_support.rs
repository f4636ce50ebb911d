use std::sync::Arc;

use quoter_service::{InMemoryQuoteStore, NewQuote, QuoteService, QuoteStore};
use rand::Rng;

pub use quoter_service;

pub const BENCH_AUTHORS: &[&str] = &[
    "Seneca",
    "Marcus Aurelius",
    "Epictetus",
    "Cicero",
    "Musonius Rufus",
];

pub struct QuoteBenchFixture {
    pub store: Arc<InMemoryQuoteStore>,
    pub service: QuoteService,
}

impl QuoteBenchFixture {
    /// A store pre-filled with `count` quotes spread round-robin over
    /// [`BENCH_AUTHORS`].
    pub fn seeded(count: usize) -> Self {
        let store = Arc::new(InMemoryQuoteStore::new());
        for n in 0..count {
            let author = BENCH_AUTHORS[n % BENCH_AUTHORS.len()];
            store
                .add(NewQuote::new(author, format!("bench quote number {n}")))
                .expect("seeding the bench store");
        }
        let service = QuoteService::new(Arc::clone(&store) as Arc<dyn QuoteStore>);
        Self { store, service }
    }

    pub fn random_author(&self) -> &'static str {
        let index = rand::thread_rng().gen_range(0..BENCH_AUTHORS.len());
        BENCH_AUTHORS[index]
    }
}
