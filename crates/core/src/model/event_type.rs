use evcap_protocol::{Attribute, AttributeType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Inherits;

/// Schema of the attributes carried by one kind of event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    /// Catalog key; filled in from the enclosing map when the catalog loads.
    #[serde(skip)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    /// Attributes declared on this type itself, in declaration order.
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeType>,
}

impl EventType {
    /// Attributes declared directly on this type (inherited ones excluded).
    pub fn own_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.attributes
            .iter()
            .map(|(name, ty)| Attribute::new(name.clone(), *ty))
    }

    pub fn is_root(&self) -> bool {
        self.inherits.is_none()
    }
}

impl Inherits for EventType {
    fn name(&self) -> &str {
        &self.name
    }

    fn parent(&self) -> Option<&str> {
        self.inherits.as_deref()
    }
}
