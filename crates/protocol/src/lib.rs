pub mod attribute;
pub mod signature;

pub use attribute::{Attribute, AttributeType};
pub use signature::EventSignature;
