use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{flexible_bool_default_true, flexible_opt_i64};

fn default_true() -> bool {
    true
}

/// Шифрование SMTP-соединения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmtpType {
    #[serde(rename = "TLS")]
    Tls,
    #[serde(rename = "SSL")]
    Ssl,
}

impl SmtpType {
    pub fn code(&self) -> &'static str {
        match self {
            SmtpType::Tls => "TLS",
            SmtpType::Ssl => "SSL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "TLS" | "STARTTLS" => Some(SmtpType::Tls),
            "SSL" => Some(SmtpType::Ssl),
            _ => None,
        }
    }

    /// Стандартный порт для типа соединения
    pub fn default_port(&self) -> u16 {
        match self {
            SmtpType::Tls => 587,
            SmtpType::Ssl => 465,
        }
    }
}

/// Настройки почты магазина, как их хранит сервер (`/email-config`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default, deserialize_with = "flexible_opt_i64")]
    pub smtp_port: Option<i64>,
    #[serde(default)]
    pub smtp_user: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub smtp_type: Option<String>,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
}

/// Форма настроек почты
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfigForm {
    pub host: String,
    pub port: String,
    pub login: String,
    pub password: String,
    pub email_from: String,
    pub smtp_type: SmtpType,
    pub is_active: bool,
}

impl Default for EmailConfigForm {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: String::new(),
            login: String::new(),
            password: String::new(),
            email_from: String::new(),
            smtp_type: SmtpType::Tls,
            is_active: true,
        }
    }
}

impl EmailConfigForm {
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port.map(|p| p.to_string()).unwrap_or_default(),
            login: config.smtp_user.clone(),
            password: config.smtp_password.clone(),
            email_from: config.email.clone(),
            smtp_type: config
                .smtp_type
                .as_deref()
                .and_then(SmtpType::from_code)
                .unwrap_or(SmtpType::Tls),
            is_active: config.is_active,
        }
    }

    /// Валидация и преобразование в тело запроса. Пустой порт берётся по типу соединения.
    pub fn to_payload(&self) -> Result<EmailConfig, String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err("SMTP host is required.".into());
        }
        let email = self.email_from.trim();
        if email.is_empty() {
            return Err("Sender email is required.".into());
        }
        let at = email.find('@').ok_or("Sender email is not valid.")?;
        if at == 0 || !email[at + 1..].contains('.') {
            return Err("Sender email is not valid.".into());
        }
        let port: u16 = if self.port.trim().is_empty() {
            self.smtp_type.default_port()
        } else {
            self.port
                .trim()
                .parse()
                .ok()
                .filter(|p: &u16| *p > 0)
                .ok_or("SMTP port must be between 1 and 65535.")?
        };

        Ok(EmailConfig {
            email: email.to_string(),
            smtp_host: host.to_string(),
            smtp_port: Some(i64::from(port)),
            smtp_user: self.login.trim().to_string(),
            smtp_password: self.password.clone(),
            smtp_type: Some(self.smtp_type.code().to_string()),
            is_active: self.is_active,
        })
    }
}
