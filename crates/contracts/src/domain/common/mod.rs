//! Common types and traits for all admin records

pub mod admin_record;
pub mod media;
pub mod named_ref;

// Re-exports
pub use admin_record::AdminRecord;
pub use media::{MediaForm, MediaType};
pub use named_ref::NamedRef;
