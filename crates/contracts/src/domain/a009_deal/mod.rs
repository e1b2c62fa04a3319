pub mod aggregate;

pub use aggregate::{DealForm, DealPayload};
