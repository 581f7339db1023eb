//! Registry of DOM object types, the events they emit, and the attributes
//! those events carry. Used to generate event capture signatures such as
//! `HTMLAnchorElement#onclick(ascii target, ...)`.

pub mod catalog;
pub mod model;
pub mod registry;

pub use catalog::{BUILTIN_CATALOG, Catalog, CatalogError};
pub use model::{EventType, ObjectType};
pub use registry::{Registry, RegistryError};
