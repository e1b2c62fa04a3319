use serde::{Deserialize, Serialize};

use crate::domain::common::AdminRecord;
use crate::shared::request_context::AdminResource;
use crate::shared::serde_helpers::flexible_bool;

/// Платёжный шлюз (список приходит целиком, редактируется только активность)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentGateway {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

impl PaymentGateway {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Секрет для отображения: последние 4 символа, остальное скрыто
    pub fn masked_secret(&self) -> String {
        match self.client_secret.as_deref() {
            None | Some("") => "-".to_string(),
            Some(secret) => {
                let chars: Vec<char> = secret.chars().collect();
                let visible = chars.len().min(4);
                let hidden = chars.len() - visible;
                let tail: String = chars[hidden..].iter().collect();
                format!("{}{}", "*".repeat(hidden), tail)
            }
        }
    }

    pub fn toggled(&self) -> GatewayToggle {
        GatewayToggle {
            is_active: !self.is_active,
        }
    }
}

impl AdminRecord for PaymentGateway {
    const RESOURCE: AdminResource = AdminResource::PaymentGateway;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Тело запроса включения / выключения шлюза
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GatewayToggle {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gateway() {
        let g: PaymentGateway = serde_json::from_value(json!({
            "id": 1, "name": "Razorpay", "client_id": "rzp_live", "client_secret": "abcdef123456", "is_active": 1
        }))
        .unwrap();
        assert_eq!(g.status_label(), "Active");
        assert_eq!(g.masked_secret(), "********3456");
        assert_eq!(serde_json::to_value(g.toggled()).unwrap(), json!({ "is_active": false }));
    }

    #[test]
    fn test_short_or_missing_secret() {
        let g: PaymentGateway = serde_json::from_value(json!({ "id": 2, "name": "COD", "client_secret": "ab" })).unwrap();
        assert!(!g.is_active);
        assert_eq!(g.masked_secret(), "ab");
        let g: PaymentGateway = serde_json::from_value(json!({ "id": 3, "name": "UPI" })).unwrap();
        assert_eq!(g.masked_secret(), "-");
    }
}
