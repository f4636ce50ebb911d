use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use rand::Rng;

use super::{NewQuote, Quote, QuoteError, QuoteId, QuoteResult, QuoteStore, FIRST_QUOTE_ID};

/// Process-local quote store.
///
/// Ids only ever grow, so ordering the map by id is the same as ordering it
/// by insertion. Reads share the lock; `add` and `delete` take it exclusively,
/// which also makes id assignment atomic across concurrent writers.
pub struct InMemoryQuoteStore {
    inner: RwLock<Inner>,
    capacity: Option<usize>,
}

struct Inner {
    next_id: QuoteId,
    quotes: BTreeMap<QuoteId, Quote>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: FIRST_QUOTE_ID,
                quotes: BTreeMap::new(),
            }),
            capacity: None,
        }
    }

    /// Caps the number of quotes held at once. Adds beyond the cap fail.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    fn read(&self) -> QuoteResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| QuoteError::Unavailable("quote map poisoned".to_string()))
    }

    fn write(&self) -> QuoteResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| QuoteError::Unavailable("quote map poisoned".to_string()))
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn add(&self, quote: NewQuote) -> QuoteResult<Quote> {
        let mut guard = self.write()?;

        if let Some(capacity) = self.capacity {
            if guard.quotes.len() >= capacity {
                return Err(QuoteError::Unavailable(format!(
                    "capacity of {capacity} quotes reached"
                )));
            }
        }

        let id = guard.next_id;
        guard.next_id += 1;

        let stored = quote.into_quote(id);
        guard.quotes.insert(id, stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> QuoteResult<Vec<Quote>> {
        let guard = self.read()?;
        Ok(guard.quotes.values().cloned().collect())
    }

    fn list_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        let guard = self.read()?;
        Ok(guard
            .quotes
            .values()
            .filter(|quote| quote.author == author)
            .cloned()
            .collect())
    }

    fn random(&self) -> QuoteResult<Option<Quote>> {
        let guard = self.read()?;
        if guard.quotes.is_empty() {
            return Ok(None);
        }

        let index = rand::thread_rng().gen_range(0..guard.quotes.len());
        Ok(guard.quotes.values().nth(index).cloned())
    }

    fn delete(&self, id: QuoteId) -> QuoteResult<()> {
        let mut guard = self.write()?;
        guard
            .quotes
            .remove(&id)
            .map(|_| ())
            .ok_or(QuoteError::NotFound(id))
    }

    fn len(&self) -> QuoteResult<usize> {
        Ok(self.read()?.quotes.len())
    }
}
