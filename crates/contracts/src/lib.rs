//! Общие контракты админ-консоли магазина: DTO удалённого API,
//! разбор конвертов ответов, построение запросов и пагинация.

pub mod domain;
pub mod shared;
pub mod system;
