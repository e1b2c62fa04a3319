use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_category::Category;
use crate::domain::a002_subcategory::Subcategory;
use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;
use crate::shared::serde_helpers::{flexible_bool_default_true, flexible_f64, flexible_opt_f64, flexible_opt_i64};

fn default_true() -> bool {
    true
}

/// Тип скидки купона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    Percentage,
    Fixed,
}

impl CouponKind {
    pub fn code(&self) -> &'static str {
        match self {
            CouponKind::Percentage => "percentage",
            CouponKind::Fixed => "fixed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" => Some(CouponKind::Percentage),
            "fixed" | "flat" => Some(CouponKind::Fixed),
            _ => None,
        }
    }

    /// Сумма скидки для отображения: "15%" или "15.00"
    pub fn format_amount(&self, amount: f64) -> String {
        match self {
            CouponKind::Percentage => format!("{}%", amount),
            CouponKind::Fixed => format!("{:.2}", amount),
        }
    }
}

/// Привязка купона к категории или подкатегории
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CouponAssociation {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_opt_i64"
    )]
    pub category_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "flexible_opt_i64"
    )]
    pub subcategory_id: Option<i64>,
}

/// Купон на скидку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default = "default_kind_code")]
    pub kind_code: String,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub amount: f64,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub total_coupons: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub total_used_coupons: Option<i64>,
    #[serde(default, deserialize_with = "flexible_opt_f64")]
    pub min_order_value: Option<f64>,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub associations: Vec<CouponAssociation>,
}

fn default_kind_code() -> String {
    CouponKind::Percentage.code().to_string()
}

/// Дата из `YYYY-MM-DD` или из начала ISO-строки
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

impl Coupon {
    pub fn kind(&self) -> Option<CouponKind> {
        CouponKind::from_code(&self.kind_code)
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_date(&self.expiry_date)
    }

    /// Купон истёк, если дата окончания раньше `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry().map(|d| d < today).unwrap_or(false)
    }

    /// Сколько купонов ещё можно использовать
    pub fn remaining(&self) -> Option<i64> {
        self.total_coupons
            .map(|total| (total - self.total_used_coupons.unwrap_or(0)).max(0))
    }

    pub fn amount_label(&self) -> String {
        match self.kind() {
            Some(kind) => kind.format_amount(self.amount),
            None => self.amount.to_string(),
        }
    }

    /// Подпись привязок: "Category: Shoes, Subcategory #7" или "-"
    pub fn association_labels(&self, categories: &[Category], subcategories: &[Subcategory]) -> String {
        let mut parts = Vec::new();
        for assoc in &self.associations {
            if let Some(id) = assoc.category_id {
                parts.push(match categories.iter().find(|c| c.id == id) {
                    Some(c) => format!("Category: {}", c.name),
                    None => format!("Category #{}", id),
                });
            }
            if let Some(id) = assoc.subcategory_id {
                parts.push(match subcategories.iter().find(|s| s.id == id) {
                    Some(s) => format!("Subcategory: {}", s.name),
                    None => format!("Subcategory #{}", id),
                });
            }
        }
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl AdminRecord for Coupon {
    const RESOURCE: AdminResource = AdminResource::Coupon;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl Searchable for Coupon {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.kind_code.clone()]
    }
}

/// Тело запроса create / update купона
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub amount: f64,
    pub expiry_date: String,
    pub total_coupons: i64,
    pub min_order_value: f64,
    pub is_active: bool,
    pub associations: Vec<CouponAssociation>,
}

/// Форма купона: числовые поля хранятся как введённый текст
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponForm {
    pub name: String,
    pub kind: CouponKind,
    pub amount: String,
    pub expiry_date: String,
    pub total_coupons: String,
    pub min_order_value: String,
    pub is_active: bool,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
}

impl Default for CouponForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: CouponKind::Percentage,
            amount: String::new(),
            expiry_date: String::new(),
            total_coupons: String::new(),
            min_order_value: String::new(),
            is_active: true,
            category_id: None,
            subcategory_id: None,
        }
    }
}

fn parse_optional_number<T: std::str::FromStr + Default>(value: &str, field: &str) -> Result<T, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse()
        .map_err(|_| format!("{} must be a number.", field))
}

impl CouponForm {
    /// Заполнение формы редактирования; первая привязка каждого вида попадает в селекты
    pub fn from_coupon(coupon: &Coupon) -> Self {
        Self {
            name: coupon.name.clone(),
            kind: coupon.kind().unwrap_or(CouponKind::Percentage),
            amount: coupon.amount.to_string(),
            expiry_date: coupon
                .expiry()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            total_coupons: coupon
                .total_coupons
                .map(|n| n.to_string())
                .unwrap_or_default(),
            min_order_value: coupon
                .min_order_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
            is_active: coupon.is_active,
            category_id: coupon.associations.iter().find_map(|a| a.category_id),
            subcategory_id: coupon.associations.iter().find_map(|a| a.subcategory_id),
        }
    }

    /// Валидация и преобразование в тело запроса.
    ///
    /// Пустые числовые поля отправляются нулём.
    pub fn to_payload(&self) -> Result<CouponPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Coupon name is required.".into());
        }

        let amount: f64 = parse_optional_number(&self.amount, "Amount")?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Amount must be greater than zero.".into());
        }
        if self.kind == CouponKind::Percentage && amount > 100.0 {
            return Err("Percentage discount cannot exceed 100.".into());
        }

        let expiry = parse_date(&self.expiry_date).ok_or("Please enter a valid expiry date.")?;

        let total_coupons: i64 = parse_optional_number(&self.total_coupons, "Total coupons")?;
        if total_coupons < 0 {
            return Err("Total coupons cannot be negative.".into());
        }
        let min_order_value: f64 = parse_optional_number(&self.min_order_value, "Minimum order value")?;
        if !min_order_value.is_finite() {
            return Err("Minimum order value must be a number.".into());
        }
        if min_order_value < 0.0 {
            return Err("Minimum order value cannot be negative.".into());
        }

        let mut associations = Vec::new();
        if let Some(category_id) = self.category_id {
            associations.push(CouponAssociation {
                category_id: Some(category_id),
                subcategory_id: None,
            });
        }
        if let Some(subcategory_id) = self.subcategory_id {
            associations.push(CouponAssociation {
                category_id: None,
                subcategory_id: Some(subcategory_id),
            });
        }

        Ok(CouponPayload {
            name: name.to_string(),
            kind: self.kind,
            amount,
            expiry_date: expiry.format("%Y-%m-%d").to_string(),
            total_coupons,
            min_order_value,
            is_active: self.is_active,
            associations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coupon() -> Coupon {
        serde_json::from_value(json!({
            "id": 4,
            "name": "SUMMER15",
            "type": "percentage",
            "amount": "15",
            "expiry_date": "2026-08-31T00:00:00.000Z",
            "total_coupons": 100,
            "total_used_coupons": 30,
            "min_order_value": "500.00",
            "is_active": 1,
            "associations": [{ "category_id": 1 }, { "subcategory_id": 7 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_and_helpers() {
        let c = coupon();
        assert_eq!(c.kind(), Some(CouponKind::Percentage));
        assert_eq!(c.amount_label(), "15%");
        assert_eq!(c.expiry(), NaiveDate::from_ymd_opt(2026, 8, 31));
        assert_eq!(c.remaining(), Some(70));
        assert_eq!(c.min_order_value, Some(500.0));
        assert!(!c.is_expired(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()));
        assert!(c.is_expired(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()));
    }

    #[test]
    fn test_association_labels() {
        let categories = vec![Category {
            id: 1,
            name: "Shoes".into(),
            slug: "shoes".into(),
            image_url: None,
        }];
        assert_eq!(
            coupon().association_labels(&categories, &[]),
            "Category: Shoes, Subcategory #7"
        );

        let mut bare = coupon();
        bare.associations.clear();
        assert_eq!(bare.association_labels(&categories, &[]), "-");
    }

    #[test]
    fn test_form_payload() {
        let form = CouponForm::from_coupon(&coupon());
        assert_eq!(form.expiry_date, "2026-08-31");
        let payload = form.to_payload().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], json!("percentage"));
        assert_eq!(value["amount"], json!(15.0));
        assert_eq!(value["total_coupons"], json!(100));
        assert_eq!(
            value["associations"],
            json!([{ "category_id": 1 }, { "subcategory_id": 7 }])
        );
    }

    #[test]
    fn test_form_validation() {
        let mut form = CouponForm {
            name: "BIG".into(),
            amount: "150".into(),
            expiry_date: "2026-12-31".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload(), Err("Percentage discount cannot exceed 100.".into()));
        form.kind = CouponKind::Fixed;
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.total_coupons, 0);
        assert_eq!(payload.min_order_value, 0.0);
        assert!(payload.associations.is_empty());

        form.expiry_date = "31/12/2026".into();
        assert_eq!(form.to_payload(), Err("Please enter a valid expiry date.".into()));
        form.expiry_date = "2026-12-31".into();
        form.total_coupons = "lots".into();
        assert_eq!(form.to_payload(), Err("Total coupons must be a number.".into()));
    }

    #[test]
    fn test_min_order_value_must_be_finite() {
        let mut form = CouponForm {
            name: "BIG".into(),
            amount: "10".into(),
            expiry_date: "2026-12-31".into(),
            ..Default::default()
        };
        for bad in ["NaN", "inf", "-inf"] {
            form.min_order_value = bad.into();
            assert_eq!(form.to_payload(), Err("Minimum order value must be a number.".into()));
        }
        form.min_order_value = "-5".into();
        assert_eq!(form.to_payload(), Err("Minimum order value cannot be negative.".into()));
    }

    #[test]
    fn test_null_scalars_keep_the_row() {
        let body = json!({ "success": true, "data": [
            { "id": 1, "name": "NULLS", "amount": null, "min_order_value": null, "is_active": null }
        ] });
        let page = crate::shared::envelope::parse_list::<Coupon>(&body).into_page().unwrap();
        assert_eq!(page.skipped, 0);
        let c = &page.items[0];
        assert_eq!(c.amount, 0.0);
        assert_eq!(c.min_order_value, None);
        assert!(c.is_active);
    }
}
