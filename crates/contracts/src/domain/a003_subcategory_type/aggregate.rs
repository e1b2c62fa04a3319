use serde::{Deserialize, Serialize};

use crate::domain::common::{AdminRecord, NamedRef};
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;
use crate::shared::serde_helpers::{flexible_bool_default_true, flexible_opt_i64, serialize_flag_as_int};

fn default_true() -> bool {
    true
}

/// Тип подкатегории (третий уровень каталога)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryType {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub subcategory_id: Option<i64>,
    /// Вложенные ссылки, которые сервер отдаёт в списке
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub subcategory: Option<NamedRef>,
}

impl SubcategoryType {
    /// id категории из поля или из вложенной ссылки
    pub fn effective_category_id(&self) -> Option<i64> {
        self.category_id.or_else(|| self.category.as_ref().map(|c| c.id))
    }

    pub fn effective_subcategory_id(&self) -> Option<i64> {
        self.subcategory_id
            .or_else(|| self.subcategory.as_ref().map(|s| s.id))
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }

    pub fn subcategory_name(&self) -> &str {
        self.subcategory
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("-")
    }
}

impl AdminRecord for SubcategoryType {
    const RESOURCE: AdminResource = AdminResource::SubcategoryType;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for SubcategoryType {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category_name().to_string(),
            self.subcategory_name().to_string(),
        ]
    }
}

/// Тело запроса create / update; флаг активности сервер ждёт как 1/0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryTypePayload {
    pub name: String,
    pub category_id: i64,
    pub subcategory_id: i64,
    #[serde(serialize_with = "serialize_flag_as_int")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryTypeForm {
    pub name: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub is_active: bool,
}

impl Default for SubcategoryTypeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            subcategory_id: None,
            is_active: true,
        }
    }
}

impl SubcategoryTypeForm {
    pub fn from_record(record: &SubcategoryType) -> Self {
        Self {
            name: record.name.clone(),
            category_id: record.effective_category_id(),
            subcategory_id: record.effective_subcategory_id(),
            is_active: record.is_active,
        }
    }

    /// Смена категории сбрасывает выбранную подкатегорию
    pub fn select_category(&mut self, category_id: Option<i64>) {
        if self.category_id != category_id {
            self.subcategory_id = None;
        }
        self.category_id = category_id;
    }

    pub fn to_payload(&self) -> Result<SubcategoryTypePayload, String> {
        match (self.category_id, self.subcategory_id, self.name.trim()) {
            (Some(category_id), Some(subcategory_id), name) if !name.is_empty() => {
                Ok(SubcategoryTypePayload {
                    name: name.to_string(),
                    category_id,
                    subcategory_id,
                    is_active: self.is_active,
                })
            }
            _ => Err("All fields are required.".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_refs() {
        let t: SubcategoryType = serde_json::from_value(json!({
            "id": 5,
            "name": "Running",
            "is_active": 1,
            "category": { "id": 1, "name": "Shoes" },
            "subcategory": { "id": 2, "name": "Sneakers" }
        }))
        .unwrap();
        assert_eq!(t.effective_category_id(), Some(1));
        assert_eq!(t.effective_subcategory_id(), Some(2));
        assert_eq!(t.subcategory_name(), "Sneakers");
        assert!(t.matches_filter("sneak"));
    }

    #[test]
    fn test_payload() {
        let mut form = SubcategoryTypeForm {
            name: "Trail".into(),
            category_id: Some(1),
            subcategory_id: Some(2),
            is_active: false,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Trail", "category_id": 1, "subcategory_id": 2, "is_active": 0 })
        );

        form.select_category(Some(3));
        assert_eq!(form.subcategory_id, None);
        assert_eq!(form.to_payload(), Err("All fields are required.".into()));
    }
}
