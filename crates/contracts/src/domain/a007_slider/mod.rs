pub mod aggregate;

pub use aggregate::Slider;
