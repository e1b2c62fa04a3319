pub mod aggregate;

pub use aggregate::{GatewayToggle, PaymentGateway};
