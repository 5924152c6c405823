// Loads the catalog from JSON files in a directory.
//
// Files: clients.json, departments.json, projects.json, counterparties.json.
// A missing file leaves its section empty and logs a warning. Malformed JSON is an error.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::modules::lookups::core::catalog::Catalog;

fn read_section<T: DeserializeOwned + Default>(dir: &Path, file: &str) -> anyhow::Result<T> {
    let path = dir.join(file);
    match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("malformed catalog file {}", path.display())),
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "catalog file missing, section left empty");
            Ok(T::default())
        }
        Err(error) => {
            Err(error).with_context(|| format!("unable to read catalog file {}", path.display()))
        }
    }
}

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let catalog = Catalog {
        clients: read_section(dir, "clients.json")?,
        departments: read_section::<HashMap<String, Value>>(dir, "departments.json")?,
        projects: read_section::<HashMap<String, Value>>(dir, "projects.json")?,
        counterparties: match read_section(dir, "counterparties.json")? {
            Value::Null => Value::Array(Vec::new()),
            section => section,
        },
    };
    info!(
        clients = catalog.clients.len(),
        dir = %dir.display(),
        "catalog loaded"
    );
    Ok(catalog)
}
