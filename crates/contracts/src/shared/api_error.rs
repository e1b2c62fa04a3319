use thiserror::Error;

/// Ошибки обращения к admin API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера или ответ не прочитан
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил ошибкой HTTP или `success: false`
    #[error("request rejected (status {}): {}", .status.map(|s| s.to_string()).unwrap_or_else(|| "-".into()), .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Ответ не похож ни на один известный конверт
    #[error("malformed response: {0}")]
    Malformed(String),

    /// Данные формы не прошли проверку до отправки
    #[error("{0}")]
    Validation(String),

    #[error("failed to encode request: {0}")]
    Encoding(String),
}

impl ApiError {
    pub fn rejected(status: Option<u16>, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Сообщение сервера, если оно было
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<serde_qs::Error> for ApiError {
    fn from(err: serde_qs::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
