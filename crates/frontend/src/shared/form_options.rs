//! Справочники для форм создания / редактирования: категории,
//! подкатегории и типы подкатегорий загружаются одной пачкой.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_subcategory_type::SubcategoryType;
use contracts::domain::common::{AdminRecord, NamedRef};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::parse_list;
use contracts::shared::request_context::{ApiRequest, RequestContext};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub subcategory_types: Vec<SubcategoryType>,
}

impl FormOptions {
    /// Запросы пачки, в порядке категории, подкатегории, типы
    pub fn requests(ctx: &RequestContext) -> Result<[ApiRequest; 3], ApiError> {
        Ok([
            ctx.list_all(Category::RESOURCE)?,
            ctx.list_all(Subcategory::RESOURCE)?,
            ctx.list_all(SubcategoryType::RESOURCE)?,
        ])
    }

    /// Собирает справочники из ответов; любой неразобранный ответ
    /// проваливает всю пачку.
    pub fn from_responses(categories: &Value, subcategories: &Value, types: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            categories: parse_list(categories).into_page()?.items,
            subcategories: parse_list(subcategories).into_page()?.items,
            subcategory_types: parse_list(types).into_page()?.items,
        })
    }

    /// Подкатегории выбранной категории
    pub fn subcategories_for(&self, category_id: Option<i64>) -> Vec<&Subcategory> {
        match category_id {
            Some(id) => self
                .subcategories
                .iter()
                .filter(|s| s.category_id == Some(id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn types_for(&self, subcategory_id: Option<i64>) -> Vec<&SubcategoryType> {
        match subcategory_id {
            Some(id) => self
                .subcategory_types
                .iter()
                .filter(|t| t.effective_subcategory_id() == Some(id))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn category_label(&self, id: i64) -> String {
        NamedRef::label_in(id, &self.categories)
    }

    pub fn subcategory_label(&self, id: i64) -> String {
        NamedRef::label_in(id, &self.subcategories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::config::ConsoleConfig;
    use serde_json::json;

    fn options() -> FormOptions {
        FormOptions::from_responses(
            &json!({ "success": true, "data": [{ "id": 1, "name": "Shoes" }, { "id": 2, "name": "Bags" }] }),
            &json!({ "success": true, "data": [
                { "id": 10, "name": "Sneakers", "category_id": 1 },
                { "id": 11, "name": "Boots", "category_id": "1" },
                { "id": 20, "name": "Totes", "category_id": 2 }
            ] }),
            &json!({ "success": true, "data": { "data": [
                { "id": 100, "name": "Running", "subcategory": { "id": 10, "name": "Sneakers" } }
            ] } }),
        )
        .unwrap()
    }

    #[test]
    fn test_cascading_choices() {
        let opts = options();
        let names: Vec<&str> = opts.subcategories_for(Some(1)).into_iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sneakers", "Boots"]);
        assert!(opts.subcategories_for(None).is_empty());
        assert_eq!(opts.types_for(Some(10)).len(), 1);
        assert!(opts.types_for(Some(11)).is_empty());
    }

    #[test]
    fn test_labels() {
        let opts = options();
        assert_eq!(opts.category_label(2), "Bags");
        assert_eq!(opts.category_label(9), "#9");
        assert_eq!(opts.subcategory_label(20), "Totes");
    }

    #[test]
    fn test_one_failed_response_fails_batch() {
        let err = FormOptions::from_responses(
            &json!({ "success": true, "data": [] }),
            &json!({ "success": false, "message": "Unauthorized" }),
            &json!({ "success": true, "data": [] }),
        )
        .unwrap_err();
        assert_eq!(err.server_message(), Some("Unauthorized"));
    }

    #[test]
    fn test_requests() {
        let ctx = RequestContext::from_config(&ConsoleConfig::default(), Some("t".into()));
        let [cats, subs, types] = FormOptions::requests(&ctx).unwrap();
        assert!(cats.url.ends_with("/category"));
        assert!(subs.url.ends_with("/subcategory"));
        assert!(types.url.ends_with("/subcategory-type"));

        let anonymous = ctx.with_token(None);
        assert!(FormOptions::requests(&anonymous).is_err());
    }
}
