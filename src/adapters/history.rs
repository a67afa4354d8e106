use crate::domain::ports::QueryStore;

/// Stack of query strings standing in for the browser history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    entries: Vec<String>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let query = query.strip_prefix('?').map(str::to_string).unwrap_or(query);
        Self {
            entries: vec![query],
        }
    }

    /// Drops the newest entry, like the back button. Returns false when there is
    /// nothing left to go back to.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl QueryStore for InMemoryHistory {
    fn current(&self) -> String {
        self.entries.last().cloned().unwrap_or_default()
    }

    fn push(&mut self, query: String) {
        self.entries.push(query);
    }
}
