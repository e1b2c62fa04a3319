//! Вход и выход администратора.
//!
//! Вход отправляется без токена (только `apiKey`), ответ несёт токен и
//! профиль администратора. Хранение токена остаётся за страницей.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::envelope::{server_message, success_flag};
use crate::shared::serde_helpers::flexible_opt_i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Форма входа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Email and password are required.".into());
        }
        match email.find('@') {
            Some(at) if at > 0 && at + 1 < email.len() => Ok(()),
            _ => Err("Please enter a valid email address.".into()),
        }
    }

    pub fn to_request(&self) -> Result<LoginRequest, String> {
        self.validate()?;
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Профиль администратора (`data` ответа входа)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AdminProfile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("Admin")
    }

    pub fn display_email(&self) -> &str {
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or("admin@example.com")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// Разбор ответа входа.
///
/// Успех требует успешного HTTP-статуса, `success: true` и непустого `token`.
/// Нечитаемый профиль не мешает входу.
pub fn parse_login(value: &Value, http_status: u16) -> Result<LoginResponse, ApiError> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let accepted = (200..300).contains(&http_status) && success_flag(value) == Some(true);

    match (accepted, token) {
        (true, Some(token)) => {
            let admin = match value.get("data").filter(|d| d.is_object()) {
                Some(data) => serde_json::from_value(data.clone()).unwrap_or_else(|e| {
                    log::warn!("Unreadable admin profile in login response: {}", e);
                    AdminProfile::default()
                }),
                None => AdminProfile::default(),
            };
            Ok(LoginResponse {
                token: token.to_string(),
                admin,
            })
        }
        _ => Err(ApiError::rejected(Some(http_status), server_message(value))),
    }
}
