use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{EventType, ObjectType};
use crate::registry::RegistryError;

/// The DOM event catalog compiled into the crate.
///
/// Hand-maintained from the DOM IDL: the IDL files do not say which events
/// an `EventTarget` emits, so the object tables cannot be generated.
pub const BUILTIN_CATALOG: &str = include_str!("../data/dom_events.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("inconsistent catalog: {0}")]
    Invalid(#[from] RegistryError),
}

/// Name used when a catalog omits `default_event_type`.
fn default_event_type_name() -> String {
    "Event".to_string()
}

/// Raw object and event type tables, as loaded from JSON.
///
/// A `Catalog` is unchecked; wrap it in a [`crate::Registry`] to validate
/// the inheritance links and resolve against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Event type used for events declared without one. Must be a root.
    #[serde(default = "default_event_type_name")]
    pub default_event_type: String,
    #[serde(default)]
    pub event_types: IndexMap<String, EventType>,
    #[serde(default)]
    pub objects: IndexMap<String, ObjectType>,
}

impl Catalog {
    /// Parse a catalog from JSON text without validating it.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(data)?;
        catalog.assign_names();
        Ok(catalog)
    }

    /// Read and parse a catalog JSON file without validating it.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    // The map key is authoritative; copy it into each record.
    pub(crate) fn assign_names(&mut self) {
        for (name, event_type) in &mut self.event_types {
            event_type.name.clone_from(name);
        }
        for (name, object) in &mut self.objects {
            object.name.clone_from(name);
        }
    }
}
