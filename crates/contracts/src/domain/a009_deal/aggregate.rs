use serde::Serialize;

use crate::domain::a004_product::Product;
use crate::shared::search::ProductSelection;

/// Тело запроса создания подборки товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealPayload {
    pub deal_name: String,
    pub category_id: i64,
    pub subcategory_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_type_id: Option<i64>,
    pub product_ids: Vec<i64>,
}

/// Форма подборки: фильтр каталога и отмеченные товары
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealForm {
    pub deal_name: String,
    pub selection: ProductSelection,
    pub product_ids: Vec<i64>,
}

impl DealForm {
    /// Отметить / снять отметку с товара
    pub fn toggle_product(&mut self, id: i64) {
        if let Some(pos) = self.product_ids.iter().position(|p| *p == id) {
            self.product_ids.remove(pos);
        } else {
            self.product_ids.push(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.product_ids.contains(&id)
    }

    /// Смена фильтра сбрасывает отметки, которых больше нет в выборке
    pub fn set_selection(&mut self, selection: ProductSelection, catalog: &[Product]) {
        self.selection = selection;
        let visible: Vec<i64> = self.selection.apply(catalog).iter().map(|p| p.id).collect();
        self.product_ids.retain(|id| visible.contains(id));
    }

    pub fn to_payload(&self) -> Result<DealPayload, String> {
        let name = self.deal_name.trim();
        if name.is_empty() {
            return Err("Deal name is required.".into());
        }
        let (Some(category_id), Some(subcategory_id)) =
            (self.selection.category_id, self.selection.subcategory_id)
        else {
            return Err("Please select a category and subcategory.".into());
        };
        if self.product_ids.is_empty() {
            return Err("Please select at least one product for the deal.".into());
        }
        Ok(DealPayload {
            deal_name: name.to_string(),
            category_id,
            subcategory_id,
            subcategory_type_id: self.selection.subcategory_type_id,
            product_ids: self.product_ids.clone(),
        })
    }
}
