pub mod event_type;
pub mod object_type;

pub use event_type::EventType;
pub use object_type::ObjectType;

/// A catalog record with an optional single parent, referenced by name.
pub trait Inherits {
    fn name(&self) -> &str;
    fn parent(&self) -> Option<&str>;
}
