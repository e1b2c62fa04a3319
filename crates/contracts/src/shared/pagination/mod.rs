//! Пагинация списков: окно кнопок страниц и параметры запроса.

pub mod page_window;
pub mod query;

pub use page_window::{build_page_window, PageItem, MIN_BUTTONS};
pub use query::{page_after_delete, total_pages, ListQuery, TotalCount};
