pub mod page_selector;
pub mod status_banner;

pub use page_selector::PageSelector;
pub use status_banner::StatusBanner;
