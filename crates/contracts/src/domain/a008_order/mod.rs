pub mod aggregate;

pub use aggregate::{Order, OrderAddress, OrderCustomer};
