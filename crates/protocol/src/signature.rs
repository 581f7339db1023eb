use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Structured form of an event capture signature.
///
/// Renders via `Display` as `Object#onevent<suffix>(type name, ...)`, e.g.
/// `HTMLAnchorElement#onclick(ascii target, ascii currentTarget, ...)`.
/// `params` holds the attributes with their original tags; the DOM-path
/// to `ascii` translation only happens when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSignature {
    pub object: String,
    pub event: String,
    /// Appended to the event name, e.g. `:callback`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
    pub params: Vec<Attribute>,
}

impl EventSignature {
    pub fn new(
        object: impl Into<String>,
        event: impl Into<String>,
        suffix: Option<&str>,
        params: Vec<Attribute>,
    ) -> Self {
        Self {
            object: object.into(),
            event: event.into(),
            suffix: suffix.unwrap_or_default().to_string(),
            params,
        }
    }

    /// Event handler name as it appears in the signature (`onclick`).
    pub fn handler_name(&self) -> String {
        format!("on{}", self.event)
    }
}

impl fmt::Display for EventSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}{}(", self.object, self.handler_name(), self.suffix)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", param.ty.signature_type(), param.name)?;
        }
        f.write_str(")")
    }
}
