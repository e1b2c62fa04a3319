use serde::{Deserialize, Serialize};

use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AdminRecord for Category {
    const RESOURCE: AdminResource = AdminResource::Category;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.slug.clone()]
    }
}

/// Форма создания / редактирования категории (изображение уходит отдельным полем multipart)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required.".into());
        }
        Ok(())
    }

    /// Текстовые поля multipart-формы
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.trim().to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal() {
        let c: Category = serde_json::from_value(json!({ "id": 3, "name": "Shoes" })).unwrap();
        assert_eq!(c.slug, "");
        assert_eq!(c.image_url, None);
        assert_eq!(c.display_name(), "Shoes");
    }

    #[test]
    fn test_form() {
        assert!(CategoryForm::default().validate().is_err());
        let form = CategoryForm { name: "  Bags ".into() };
        assert!(form.validate().is_ok());
        assert_eq!(form.form_fields(), vec![("name", "Bags".to_string())]);
    }
}
