// Static reference data offered to entry forms: clients, departments and projects per client,
// counterparties. Loaded once at startup, never mutated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::core::client_labels::ClientLabels;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub clients: Vec<ClientOption>,
    pub departments: HashMap<String, Value>,
    pub projects: HashMap<String, Value>,
    pub counterparties: Value,
}

impl Catalog {
    pub fn client_labels(&self) -> ClientLabels {
        self.clients
            .iter()
            .map(|client| (client.value.clone(), client.label.clone()))
            .collect()
    }

    pub fn departments_of(&self, client: &str) -> Option<&Value> {
        self.departments.get(client)
    }

    pub fn projects_of(&self, client: &str) -> Option<&Value> {
        self.projects.get(client)
    }
}
