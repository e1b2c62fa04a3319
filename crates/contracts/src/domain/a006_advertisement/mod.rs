pub mod aggregate;

pub use aggregate::Advertisement;
