// Immutable code -> display label table for clients.
//
// Built once at startup and shared read-only. Unknown codes resolve to themselves.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientLabels {
    labels: HashMap<String, String>,
}

impl ClientLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(String, String)> for ClientLabels {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
