//! Клиентская фильтрация списков.

use crate::domain::a004_product::Product;

/// Минимальная длина строки поиска, с которой фильтр включается
pub const MIN_FILTER_LEN: usize = 3;

/// Трейт для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым ищется строка
    fn search_fields(&self) -> Vec<String>;

    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Фильтр активен только с [`MIN_FILTER_LEN`] символов
pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Отбор товаров по каталогу: категория и подкатегория обязательны,
/// тип подкатегории сужает выборку, если задан
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductSelection {
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub subcategory_type_id: Option<i64>,
}

impl ProductSelection {
    pub fn new(category_id: Option<i64>, subcategory_id: Option<i64>, subcategory_type_id: Option<i64>) -> Self {
        Self {
            category_id,
            subcategory_id,
            subcategory_type_id,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.category_id.is_some() && self.subcategory_id.is_some()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.is_complete() {
            return false;
        }
        product.category_id == self.category_id
            && product.subcategory_id == self.subcategory_id
            && (self.subcategory_type_id.is_none() || product.subcategory_type_id == self.subcategory_type_id)
    }

    /// Товары, попавшие в выборку; без категории и подкатегории выборка пуста
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}
