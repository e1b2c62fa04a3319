pub mod aggregate;

pub use aggregate::{Subcategory, SubcategoryForm};
