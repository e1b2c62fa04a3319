pub mod aggregate;

pub use aggregate::{EmailConfig, EmailConfigForm, SmtpType};
