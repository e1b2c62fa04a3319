//! Контекст запросов к admin API и построение запросов.
//!
//! Токен и ключ API передаются явно в [`RequestContext`]; страницы не читают
//! их из окружения сами. Здесь запросы только собираются, отправляет их
//! транспорт страницы.

use serde::{Serialize, Serializer};

use super::api_error::ApiError;
use super::config::ConsoleConfig;
use super::pagination::ListQuery;
use crate::system::auth::LoginRequest;

/// Ресурсы admin API (`/api/v1/admin/{path}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminResource {
    Category,
    Subcategory,
    SubcategoryType,
    Product,
    Coupon,
    Advertisement,
    Slider,
    Order,
    Deal,
    PaymentGateway,
    EmailConfig,
}

impl AdminResource {
    pub fn path(&self) -> &'static str {
        match self {
            AdminResource::Category => "category",
            AdminResource::Subcategory => "subcategory",
            AdminResource::SubcategoryType => "subcategory-type",
            AdminResource::Product => "product",
            AdminResource::Coupon => "coupon",
            AdminResource::Advertisement => "advertisement",
            AdminResource::Slider => "slider",
            AdminResource::Order => "orders",
            AdminResource::Deal => "deal",
            AdminResource::PaymentGateway => "payment-gateways",
            AdminResource::EmailConfig => "email-config",
        }
    }

    pub fn all() -> Vec<AdminResource> {
        vec![
            AdminResource::Category,
            AdminResource::Subcategory,
            AdminResource::SubcategoryType,
            AdminResource::Product,
            AdminResource::Coupon,
            AdminResource::Advertisement,
            AdminResource::Slider,
            AdminResource::Order,
            AdminResource::Deal,
            AdminResource::PaymentGateway,
            AdminResource::EmailConfig,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Готовый к отправке запрос
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

pub const API_PREFIX: &str = "/api/v1/admin";

/// Каталог загруженных медиафайлов
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Данные, нужные каждому запросу: адрес API, ключ и токен администратора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub base_url: String,
    pub api_key: String,
    pub token: Option<String>,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, token: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn from_config(config: &ConsoleConfig, token: Option<String>) -> Self {
        Self::new(config.api.base_url.clone(), config.api.api_key.clone(), token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Тот же контекст с новым токеном (после входа / выхода)
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self::new(self.base_url.clone(), self.api_key.clone(), token)
    }

    pub fn collection_url(&self, resource: AdminResource) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, resource.path())
    }

    pub fn item_url(&self, resource: AdminResource, id: i64) -> String {
        format!("{}/{}", self.collection_url(resource), id)
    }

    /// Адрес загруженного файла по пути из записи
    pub fn media_url(&self, media_path: &str) -> String {
        format!("{}{}{}", self.base_url, UPLOADS_PREFIX, media_path.trim_start_matches('/'))
    }

    pub fn list_url(&self, resource: AdminResource, query: &ListQuery) -> Result<String, ApiError> {
        Ok(format!("{}?{}", self.collection_url(resource), query.to_query_string()?))
    }

    /// `Authorization` и `apiKey`
    pub fn headers(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ApiError::Validation("Not authenticated".into()))?;
        Ok(vec![
            ("Authorization", format!("Bearer {}", token)),
            ("apiKey", self.api_key.clone()),
        ])
    }

    /// Заголовки для запросов с JSON-телом
    pub fn json_headers(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        let mut headers = self.headers()?;
        headers.push(("Content-Type", "application/json".to_string()));
        Ok(headers)
    }

    fn request(&self, method: HttpMethod, url: String) -> Result<ApiRequest, ApiError> {
        Ok(ApiRequest {
            method,
            url,
            headers: self.headers()?,
            body: None,
        })
    }

    fn json_request<P: Serialize>(&self, method: HttpMethod, url: String, payload: &P) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encoding(e.to_string()))?;
        Ok(ApiRequest {
            method,
            url,
            headers: self.json_headers()?,
            body: Some(body),
        })
    }

    /// `/api/v1/admin/login`, `/api/v1/admin/logout`
    pub fn auth_url(&self, action: &str) -> String {
        format!("{}{}/{}", self.base_url, API_PREFIX, action)
    }

    /// Вход: токена ещё нет, уходит только `apiKey`
    pub fn login(&self, credentials: &LoginRequest) -> Result<ApiRequest, ApiError> {
        let body = serde_json::to_string(credentials).map_err(|e| ApiError::Encoding(e.to_string()))?;
        Ok(ApiRequest {
            method: HttpMethod::Post,
            url: self.auth_url("login"),
            headers: vec![
                ("apiKey", self.api_key.clone()),
                ("Content-Type", "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn logout(&self) -> Result<ApiRequest, ApiError> {
        self.request(HttpMethod::Post, self.auth_url("logout"))
    }

    /// Страница списка
    pub fn list(&self, resource: AdminResource, query: &ListQuery) -> Result<ApiRequest, ApiError> {
        self.request(HttpMethod::Get, self.list_url(resource, query)?)
    }

    /// Весь список без пагинации (справочники для форм)
    pub fn list_all(&self, resource: AdminResource) -> Result<ApiRequest, ApiError> {
        self.request(HttpMethod::Get, self.collection_url(resource))
    }

    pub fn get(&self, resource: AdminResource, id: i64) -> Result<ApiRequest, ApiError> {
        self.request(HttpMethod::Get, self.item_url(resource, id))
    }

    pub fn create<P: Serialize>(&self, resource: AdminResource, payload: &P) -> Result<ApiRequest, ApiError> {
        self.json_request(HttpMethod::Post, self.collection_url(resource), payload)
    }

    pub fn update<P: Serialize>(&self, resource: AdminResource, id: i64, payload: &P) -> Result<ApiRequest, ApiError> {
        self.json_request(HttpMethod::Put, self.item_url(resource, id), payload)
    }

    pub fn delete(&self, resource: AdminResource, id: i64) -> Result<ApiRequest, ApiError> {
        self.request(HttpMethod::Delete, self.item_url(resource, id))
    }
}
