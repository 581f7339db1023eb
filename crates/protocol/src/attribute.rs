use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive type tag describing how one event attribute is captured.
///
/// The set is closed: catalogs naming any other tag fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Bool,
    Int8,
    Int16,
    Int32,
    Uint8,
    Uint16,
    Uint32,
    Float32,
    /// 7-bit ASCII string.
    Ascii,
    /// UTF-8 string.
    Utf8,
    /// Reference to another DOM object, captured as a path string
    /// (e.g. `body > div#main > a`).
    DomPath,
}

impl AttributeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Float32 => "float32",
            Self::Ascii => "ascii",
            Self::Utf8 => "utf8",
            Self::DomPath => "dompath",
        }
    }

    /// The tag used when this attribute appears in a textual signature.
    ///
    /// DOM paths are recorded as plain strings, so they surface as `ascii`.
    pub fn signature_type(self) -> Self {
        match self {
            Self::DomPath => Self::Ascii,
            other => other,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named attribute of an event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: AttributeType,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: AttributeType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
