//! Баннер результата операции (успех / ошибка), общий для всех страниц.

use serde::{Deserialize, Serialize};

use super::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertVariant {
    /// CSS-класс баннера
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertVariant::Success => "alert alert--success",
            AlertVariant::Error => "alert alert--error",
            AlertVariant::Warning => "alert alert--warning",
            AlertVariant::Info => "alert alert--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub variant: AlertVariant,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(variant: AlertVariant, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Success, "Success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error, "Error", message)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error, "Network Error", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error, "Validation Error", message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Info, title, message)
    }

    /// Баннер для ошибки операции.
    ///
    /// Сообщение сервера побеждает `fallback`; сетевые и прочие ошибки
    /// показывают `fallback`, проверки формы показывают свой текст.
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Network(_) => Self::network_error(fallback),
            ApiError::Rejected { message, .. } => {
                let text = message
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(fallback);
                Self::error(text)
            }
            ApiError::Validation(msg) => Self::validation(msg.clone()),
            ApiError::Malformed(_) | ApiError::Encoding(_) => Self::error(fallback),
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == AlertVariant::Error
    }
}
