use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use evcap_protocol::{Attribute, EventSignature};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::catalog::{BUILTIN_CATALOG, Catalog, CatalogError};
use crate::model::{EventType, Inherits, ObjectType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),
    #[error("unknown event type: {0}")]
    UnknownEventType(String),
    #[error("invalid event type: {0}")]
    InvalidEventType(String),
    #[error("inheritance cycle reached from {0}")]
    InheritanceCycle(String),
}

/// Parsed on first access; shared for the life of the process.
static BUILTIN: LazyLock<Result<Registry, CatalogError>> =
    LazyLock::new(|| Registry::from_json(BUILTIN_CATALOG));

/// Validated, immutable view over a [`Catalog`].
///
/// Construction checks every inheritance link once; afterwards all lookups
/// are pure reads and the registry can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,
    default_index: usize,
}

impl Registry {
    /// The registry over the catalog compiled into this crate.
    ///
    /// Loaded on first use and kept for the life of the process.
    pub fn builtin() -> Result<&'static Registry, &'static CatalogError> {
        BUILTIN.as_ref()
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        Ok(Self::from_catalog(Catalog::from_json(data)?)?)
    }

    /// Read, parse and validate a catalog JSON file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        Ok(Self::from_catalog(Catalog::from_path(path)?)?)
    }

    /// Validate a catalog and wrap it.
    ///
    /// Rejects unknown `inherits` targets, inheritance cycles, event
    /// declarations naming missing event types, and a default event type
    /// that is missing or has a parent. Record names are taken from their
    /// map keys, overriding whatever the records carried.
    pub fn from_catalog(mut catalog: Catalog) -> Result<Self, RegistryError> {
        catalog.assign_names();
        let default_index = catalog
            .event_types
            .get_index_of(&catalog.default_event_type)
            .ok_or_else(|| RegistryError::UnknownEventType(catalog.default_event_type.clone()))?;
        if !catalog.event_types[default_index].is_root() {
            return Err(RegistryError::InvalidEventType(
                catalog.default_event_type.clone(),
            ));
        }

        for event_type in catalog.event_types.values() {
            ancestry(
                &catalog.event_types,
                event_type.name(),
                RegistryError::UnknownEventType,
            )?;
        }
        for object in catalog.objects.values() {
            ancestry(
                &catalog.objects,
                object.name(),
                RegistryError::UnknownObjectType,
            )?;
            for type_name in object.events.values().flatten() {
                if !catalog.event_types.contains_key(type_name) {
                    return Err(RegistryError::UnknownEventType(type_name.clone()));
                }
            }
        }

        debug!(
            objects = catalog.objects.len(),
            event_types = catalog.event_types.len(),
            default = %catalog.default_event_type,
            "loaded event catalog"
        );
        Ok(Self {
            catalog,
            default_index,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn object(&self, name: &str) -> Option<&ObjectType> {
        self.catalog.objects.get(name)
    }

    pub fn event_type(&self, name: &str) -> Option<&EventType> {
        self.catalog.event_types.get(name)
    }

    /// Event type assigned to events declared without one.
    pub fn default_event_type(&self) -> &EventType {
        &self.catalog.event_types[self.default_index]
    }

    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.objects.keys().map(String::as_str)
    }

    pub fn event_type_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.event_types.keys().map(String::as_str)
    }

    /// Find the element type for an HTML tag name, ignoring ASCII case.
    pub fn object_for_tag(&self, tag: &str) -> Option<&ObjectType> {
        self.catalog.objects.values().find(|object| {
            object
                .tag_name
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(tag))
        })
    }

    /// The object's inheritance chain, starting with the object itself.
    pub fn ancestors(&self, object_name: &str) -> Result<Vec<&ObjectType>, RegistryError> {
        ancestry(
            &self.catalog.objects,
            object_name,
            RegistryError::UnknownObjectType,
        )
    }

    /// All events an object can emit, mapped to their event types.
    ///
    /// Events declared anywhere along the inheritance chain are included.
    /// When several levels declare the same event name, the most derived
    /// declaration wins. Events declared without a type, and any
    /// `extra_names` not otherwise present, map to the default event type.
    pub fn resolve_events(
        &self,
        object_name: &str,
        extra_names: &[&str],
    ) -> Result<BTreeMap<String, &EventType>, RegistryError> {
        trace!(object = object_name, extra = extra_names.len(), "resolving events");
        let mut events = BTreeMap::new();
        for object in self.ancestors(object_name)? {
            for (event_name, type_name) in &object.events {
                if events.contains_key(event_name) {
                    continue;
                }
                let event_type = match type_name {
                    Some(type_name) => self
                        .event_type(type_name)
                        .ok_or_else(|| RegistryError::UnknownEventType(type_name.clone()))?,
                    None => self.default_event_type(),
                };
                events.insert(event_name.clone(), event_type);
            }
        }

        for name in extra_names {
            events
                .entry((*name).to_string())
                .or_insert_with(|| self.default_event_type());
        }
        Ok(events)
    }

    /// All attributes of an event type, base type first.
    ///
    /// Within one type, declaration order is kept. A name redeclared by a
    /// more derived type keeps the position and type of its first
    /// (most base) declaration.
    pub fn resolve_attributes(
        &self,
        event_type: &EventType,
    ) -> Result<Vec<Attribute>, RegistryError> {
        if self.event_type(&event_type.name) != Some(event_type) {
            return Err(RegistryError::InvalidEventType(event_type.name.clone()));
        }
        trace!(event_type = %event_type.name, "resolving attributes");

        let chain = ancestry(
            &self.catalog.event_types,
            &event_type.name,
            RegistryError::UnknownEventType,
        )?;
        let mut seen = HashSet::new();
        let mut attributes = Vec::new();
        for level in chain.iter().rev() {
            for attribute in level.own_attributes() {
                if seen.insert(attribute.name.clone()) {
                    attributes.push(attribute);
                }
            }
        }
        Ok(attributes)
    }

    pub fn resolve_attributes_by_name(
        &self,
        event_type_name: &str,
    ) -> Result<Vec<Attribute>, RegistryError> {
        let event_type = self
            .event_type(event_type_name)
            .ok_or_else(|| RegistryError::UnknownEventType(event_type_name.to_string()))?;
        self.resolve_attributes(event_type)
    }

    /// Build the capture signature for one event of an object.
    ///
    /// `event_type = None` yields a signature without parameters.
    pub fn signature(
        &self,
        object_name: &str,
        event_name: &str,
        event_type: Option<&EventType>,
        suffix: Option<&str>,
    ) -> Result<EventSignature, RegistryError> {
        let params = match event_type {
            Some(event_type) => self.resolve_attributes(event_type)?,
            None => Vec::new(),
        };
        Ok(EventSignature::new(object_name, event_name, suffix, params))
    }

    /// Render a signature such as
    /// `HTMLAnchorElement#onclick(ascii target, ascii currentTarget, ...)`.
    ///
    /// DOM-path attributes are written with the `ascii` type tag.
    pub fn format_signature(
        &self,
        object_name: &str,
        event_name: &str,
        event_type: Option<&EventType>,
        suffix: Option<&str>,
    ) -> Result<String, RegistryError> {
        Ok(self
            .signature(object_name, event_name, event_type, suffix)?
            .to_string())
    }

    /// Signatures for every event of an object, ordered by event name.
    pub fn signatures(
        &self,
        object_name: &str,
        extra_names: &[&str],
        suffix: Option<&str>,
    ) -> Result<Vec<EventSignature>, RegistryError> {
        self.resolve_events(object_name, extra_names)?
            .iter()
            .map(|(event_name, event_type)| {
                self.signature(object_name, event_name, Some(*event_type), suffix)
            })
            .collect()
    }
}

/// Follow parent links from `start` to its root, returning `[start, ..., root]`.
///
/// A well-formed chain never revisits a record, so it can be no longer than
/// the table; anything longer is reported as a cycle.
fn ancestry<'a, T: Inherits>(
    table: &'a IndexMap<String, T>,
    start: &str,
    unknown: fn(String) -> RegistryError,
) -> Result<Vec<&'a T>, RegistryError> {
    let mut chain = Vec::new();
    let mut next = Some(start);
    while let Some(name) = next {
        let record = table.get(name).ok_or_else(|| unknown(name.to_string()))?;
        if chain.len() == table.len() {
            return Err(RegistryError::InheritanceCycle(start.to_string()));
        }
        chain.push(record);
        next = record.parent();
    }
    Ok(chain)
}
