pub mod aggregate;

pub use aggregate::{SubcategoryType, SubcategoryTypeForm, SubcategoryTypePayload};
