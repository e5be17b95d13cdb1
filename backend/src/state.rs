use anyhow::Result;

use crate::news_store::NewsStore;

#[derive(Clone)]
pub struct AppState {
    store: NewsStore,
}

impl AppState {
    pub fn new(db_path: &str) -> Result<Self> {
        let store = NewsStore::open(db_path)?;
        Ok(Self { store })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self { store: NewsStore::open_in_memory().expect("in-memory store") }
    }

    pub fn store(&self) -> &NewsStore {
        &self.store
    }

    /// Used for startup logging only.
    pub fn article_count(&self) -> Result<usize> {
        self.store.count()
    }
}
