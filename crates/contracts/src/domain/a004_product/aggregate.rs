use serde::{Deserialize, Serialize};

use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;
use crate::shared::serde_helpers::{flexible_bool_default_true, flexible_f64, flexible_opt_i64};

fn default_true() -> bool {
    true
}

/// Изображение товара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMedia {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Товар
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub quantity: Option<i64>,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub subcategory_id: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub subcategory_type_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub product_medias: Vec<ProductMedia>,
}

impl Product {
    /// Первое изображение из медиа товара, иначе `image_url`
    pub fn primary_image(&self) -> Option<&str> {
        self.product_medias
            .iter()
            .find_map(|m| m.image_url.as_deref())
            .or(self.image_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Цена для отображения, "0.00" если не задана
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.quantity.unwrap_or(0) > 0
    }
}

impl AdminRecord for Product {
    const RESOURCE: AdminResource = AdminResource::Product;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

/// Текстовые поля multipart-формы товара (изображения добавляет транспорт)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category_id: i64,
    pub subcategory_id: i64,
    pub is_active: bool,
}

impl ProductPayload {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", self.price.to_string()),
            ("quantity", self.quantity.to_string()),
            ("category_id", self.category_id.to_string()),
            ("subcategory_id", self.subcategory_id.to_string()),
            ("is_active", self.is_active.to_string()),
        ]
    }
}

/// Форма товара: числа хранятся как введённый текст
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            quantity: String::new(),
            category_id: None,
            subcategory_id: None,
            is_active: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price_label(),
            quantity: product.quantity.unwrap_or(0).to_string(),
            category_id: product.category_id,
            subcategory_id: product.subcategory_id,
            is_active: product.is_active,
        }
    }

    /// Валидация и преобразование в тело запроса
    pub fn to_payload(&self) -> Result<ProductPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Product name is required.".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "Price must be a number.".to_string())?;
        if !price.is_finite() || price <= 0.0 {
            return Err("Price must be greater than zero.".into());
        }
        let quantity: i64 = if self.quantity.trim().is_empty() {
            0
        } else {
            self.quantity
                .trim()
                .parse()
                .map_err(|_| "Quantity must be a whole number.".to_string())?
        };
        if quantity < 0 {
            return Err("Quantity cannot be negative.".into());
        }
        let category_id = self.category_id.ok_or("Please select a category.")?;
        let subcategory_id = self.subcategory_id.ok_or("Please select a subcategory.")?;

        Ok(ProductPayload {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
            category_id,
            subcategory_id,
            is_active: self.is_active,
        })
    }
}
