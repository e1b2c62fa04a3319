use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::search::Searchable;
use crate::shared::serde_helpers::flexible_opt_f64;

/// Покупатель заказа
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Адрес доставки
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl OrderAddress {
    /// "Addr, City, State" без пустых частей
    pub fn one_line(&self) -> String {
        let parts: Vec<&str> = [
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Заказ (только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub user: Option<OrderCustomer>,
    #[serde(default)]
    pub address: Option<OrderAddress>,
    #[serde(default, deserialize_with = "flexible_opt_f64")]
    pub grand_total: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    pub fn customer_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .or_else(|| self.address.as_ref().and_then(|a| a.name.as_deref()))
            .unwrap_or("-")
    }

    pub fn total_label(&self) -> String {
        match self.grand_total {
            Some(total) => format!("{:.2}", total),
            None => "-".to_string(),
        }
    }

    /// Дата заказа в формате dd.mm.yyyy HH:MM
    pub fn created_label(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return "-".to_string();
        };
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
        raw.to_string()
    }
}

impl AdminRecord for Order {
    const RESOURCE: AdminResource = AdminResource::Order;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Order #{}", self.id)
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.id.to_string(), self.customer_name().to_string()];
        if let Some(email) = self.user.as_ref().and_then(|u| u.email.clone()) {
            fields.push(email);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels() {
        let o: Order = serde_json::from_value(json!({
            "id": 1087,
            "user": { "id": 3, "name": "Asha", "email": "asha@example.com" },
            "address": { "address": "12 MG Road", "city": "Pune", "state": "" },
            "grand_total": "1499.5",
            "created_at": "2025-11-02T09:15:00.000Z",
            "payment_status": "paid"
        }))
        .unwrap();
        assert_eq!(o.customer_name(), "Asha");
        assert_eq!(o.total_label(), "1499.50");
        assert_eq!(o.created_label(), "02.11.2025 09:15");
        assert_eq!(o.address.as_ref().unwrap().one_line(), "12 MG Road, Pune");
        assert!(o.matches_filter("asha@"));
    }

    #[test]
    fn test_missing_fields() {
        let o: Order = serde_json::from_value(json!({ "id": 5, "created_at": "yesterday" })).unwrap();
        assert_eq!(o.customer_name(), "-");
        assert_eq!(o.total_label(), "-");
        assert_eq!(o.created_label(), "yesterday");
        assert_eq!(OrderAddress::default().one_line(), "-");
    }
}
