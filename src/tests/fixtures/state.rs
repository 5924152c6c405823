// Application state over an in-memory store and a small fixed catalog.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::modules::lookups::core::catalog::{Catalog, ClientOption};
use crate::shared::config::AppConfig;
use crate::shared::infrastructure::time_entry_store::in_memory::InMemoryTimeEntryStore;
use crate::shell::state::AppState;

pub fn test_catalog() -> Catalog {
    Catalog {
        clients: vec![ClientOption {
            value: "ACME".into(),
            label: "Acme Corporation".into(),
        }],
        departments: HashMap::from([("ACME".to_string(), json!(["Legal", "Tax"]))]),
        projects: HashMap::from([("ACME".to_string(), json!(["P1", "P2", "EFET", "MSPA"]))]),
        counterparties: json!(["Globex", "Initech"]),
    }
}

pub fn make_test_state(store: Arc<InMemoryTimeEntryStore>) -> AppState {
    AppState::new(store, test_catalog(), &AppConfig::default())
}
