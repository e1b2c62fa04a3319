use serde::{Deserialize, Serialize};

use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;
use crate::shared::serde_helpers::{flexible_bool_default_true, flexible_opt_i64};

fn default_true() -> bool {
    true
}

/// Подкатегория товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AdminRecord for Subcategory {
    const RESOURCE: AdminResource = AdminResource::Subcategory;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Subcategory {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryForm {
    pub name: String,
    pub category_id: Option<i64>,
    pub is_active: bool,
    /// Выбран ли файл изображения
    pub has_image: bool,
}

impl Default for SubcategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category_id: None,
            is_active: true,
            has_image: false,
        }
    }
}

impl SubcategoryForm {
    pub fn from_subcategory(sub: &Subcategory) -> Self {
        Self {
            name: sub.name.clone(),
            category_id: sub.category_id,
            is_active: sub.is_active,
            has_image: false,
        }
    }

    pub fn validate(&self, is_new: bool) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Subcategory name is required.".into());
        }
        if self.category_id.is_none() {
            return Err("Please select a category.".into());
        }
        if is_new && !self.has_image {
            return Err("Please select an image.".into());
        }
        Ok(())
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", self.name.trim().to_string())];
        if let Some(id) = self.category_id {
            fields.push(("category_id", id.to_string()));
        }
        fields.push(("is_active", self.is_active.to_string()));
        fields
    }
}
