//! Разбор конвертов ответов admin API.
//!
//! Сервер оборачивает данные в `{ success, data, message }`, но форма
//! непостоянна: список может лежать в `data`, `data.data`, `results`,
//! `rows` или `coupons`, общее количество в `total`, `meta.total`,
//! `pagination.total` или `data.total`, а `success: false` иногда приходит
//! вместе с данными. Все эти варианты распознаются только здесь.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_error::ApiError;
use crate::domain::common::AdminRecord;

/// Страница списка, извлечённая из ответа
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Общее количество, если сервер его сообщил
    pub total: Option<u64>,
    /// Строки, которые не удалось разобрать
    pub skipped: usize,
}

/// Чем ответ отличался от канонического конверта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `success: false`, но массив `data` присутствует
    UnsuccessfulWithData,
    /// Массив найден под другим ключом
    AlternateKey(&'static str),
}

/// Результат разбора ответа со списком
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload<T> {
    Ok(ListPage<T>),
    Shaped(ListPage<T>, ListShape),
    /// Данных нет; сообщение сервера, если было
    Malformed(Option<String>),
}

impl<T> ListPayload<T> {
    /// Страница при любом распознанном варианте
    pub fn into_page(self) -> Result<ListPage<T>, ApiError> {
        match self {
            ListPayload::Ok(page) | ListPayload::Shaped(page, _) => Ok(page),
            ListPayload::Malformed(Some(message)) => Err(ApiError::rejected(None, Some(message))),
            ListPayload::Malformed(None) => Err(ApiError::Malformed("response has no list data".into())),
        }
    }

    /// Сервер сообщил об ошибке, даже если данные пришли
    pub fn reported_failure(&self) -> bool {
        matches!(
            self,
            ListPayload::Shaped(_, ListShape::UnsuccessfulWithData) | ListPayload::Malformed(_)
        )
    }
}

// (метка, внешний ключ, вложенный ключ); первый найденный массив побеждает
const ALTERNATE_LIST_KEYS: &[(&str, &str, Option<&str>)] = &[
    ("data.data", "data", Some("data")),
    ("data.rows", "data", Some("rows")),
    ("results", "results", None),
    ("coupons", "coupons", None),
    ("rows", "rows", None),
];

pub(crate) fn success_flag(value: &Value) -> Option<bool> {
    match value.get("success")? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_i64() != Some(0)),
        _ => None,
    }
}

fn number_at(value: &Value, outer: &str, inner: Option<&str>) -> Option<u64> {
    let field = value.get(outer)?;
    let field = match inner {
        Some(key) => field.get(key)?,
        None => field,
    };
    field
        .as_u64()
        .or_else(|| field.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
}

/// Общее количество записей из ответа: `total`, `meta.total`,
/// `pagination.total`, `data.total`.
pub fn extract_total(value: &Value) -> Option<u64> {
    number_at(value, "total", None)
        .or_else(|| number_at(value, "meta", Some("total")))
        .or_else(|| number_at(value, "pagination", Some("total")))
        .or_else(|| number_at(value, "data", Some("total")))
}

/// Сообщение сервера из `message` или `msg`
pub fn server_message(value: &Value) -> Option<String> {
    ["message", "msg"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

fn parse_rows<T: DeserializeOwned>(rows: &[Value]) -> (Vec<T>, usize) {
    let mut items = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows {
        match serde_json::from_value::<T>(row.clone()) {
            Ok(item) => items.push(item),
            Err(e) => {
                log::warn!("Skipping unreadable row: {}", e);
                skipped += 1;
            }
        }
    }
    (items, skipped)
}

fn build_page<T: DeserializeOwned>(rows: &[Value], total: Option<u64>) -> ListPage<T> {
    let (items, skipped) = parse_rows(rows);
    ListPage { items, total, skipped }
}

/// Разбирает ответ со списком записей
pub fn parse_list<T: DeserializeOwned>(value: &Value) -> ListPayload<T> {
    let total = extract_total(value);
    if total.is_none() {
        log::warn!("List response carries no total count");
    }

    let success = success_flag(value);

    if let Some(rows) = value.get("data").and_then(Value::as_array) {
        let page = build_page(rows, total);
        return if success == Some(false) {
            log::warn!("List response has success=false but still provides data");
            ListPayload::Shaped(page, ListShape::UnsuccessfulWithData)
        } else {
            ListPayload::Ok(page)
        };
    }

    if success != Some(false) {
        for &(label, outer, inner) in ALTERNATE_LIST_KEYS {
            let found = value.get(outer).and_then(|v| match inner {
                Some(key) => v.get(key),
                None => Some(v),
            });
            if let Some(rows) = found.and_then(Value::as_array) {
                log::warn!("List found under alternate key `{}`", label);
                return ListPayload::Shaped(build_page(rows, total), ListShape::AlternateKey(label));
            }
        }
    }

    let message = server_message(value);
    log::error!(
        "List response has no recognizable data: {}",
        message.as_deref().unwrap_or("no message")
    );
    ListPayload::Malformed(message)
}

/// Разбирает ответ с одной записью: объект `data.coupon` или `data`
pub fn parse_record<T: DeserializeOwned>(value: &Value) -> Result<T, ApiError> {
    if success_flag(value) == Some(false) {
        return Err(ApiError::rejected(None, server_message(value)));
    }
    let record = value
        .get("data")
        .and_then(|data| data.get("coupon").filter(|c| c.is_object()).or(Some(data)))
        .filter(|data| data.is_object());
    match record {
        Some(data) => Ok(serde_json::from_value(data.clone())?),
        None => match server_message(value) {
            Some(message) => Err(ApiError::rejected(None, Some(message))),
            None => Err(ApiError::Malformed("response has no record data".into())),
        },
    }
}

/// Подтверждение create / update / delete.
///
/// Успех требует и успешного HTTP-статуса, и `success: true`. Возвращает
/// сообщение сервера для баннера.
pub fn parse_outcome(value: &Value, http_status: u16) -> Result<Option<String>, ApiError> {
    let http_ok = (200..300).contains(&http_status);
    if http_ok && success_flag(value) == Some(true) {
        Ok(server_message(value))
    } else {
        Err(ApiError::rejected(Some(http_status), server_message(value)))
    }
}

/// Поиск записи по id в полученном списке
pub fn find_by_id<T: AdminRecord>(items: &[T], id: i64) -> Option<&T> {
    items.iter().find(|item| item.record_id() == id)
}
