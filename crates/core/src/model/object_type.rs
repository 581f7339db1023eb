use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Inherits;

/// A DOM-like entity that can emit named events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    /// Catalog key; filled in from the enclosing map when the catalog loads.
    #[serde(skip)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    /// HTML tag name for element types (`a`, `canvas`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Event name -> event type name. `None` means the default event type.
    #[serde(default)]
    pub events: IndexMap<String, Option<String>>,
}

impl Inherits for ObjectType {
    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> Option<&str> {
        self.inherits.as_deref()
    }
}
