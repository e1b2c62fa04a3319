//! Tolerant deserializers for wire fields the API sends in more than one shape.
//!
//! The admin API is not consistent about scalar types: prices arrive as
//! `12.5` or `"12.50"`, flags as `true` or `1` or `"1"`. Use these with
//! `#[serde(deserialize_with = "...")]`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

fn parse_number_text<E: serde::de::Error>(text: &str) -> Result<Option<f64>, E> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|e| E::custom(format!("invalid number {:?}: {}", text, e)))
}

fn flag_to_bool<E: serde::de::Error>(value: FlagValue) -> Result<bool, E> {
    match value {
        FlagValue::Bool(b) => Ok(b),
        FlagValue::Number(n) => Ok(n != 0),
        FlagValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(E::custom(format!("invalid flag value {:?}", other))),
        },
    }
}

/// Number or numeric string; `null` and `""` read as `0.0`.
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_opt_f64(deserializer)?.unwrap_or(0.0))
}

/// Optional number or numeric string; `null` and `""` read as `None`.
pub fn flexible_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => parse_number_text::<D::Error>(&s),
    }
}

/// Optional integer id that may arrive as a string; `null` and `""` read as `None`.
pub fn flexible_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match flexible_opt_f64(deserializer)? {
        None => Ok(None),
        Some(n) if n.fract() == 0.0 => Ok(Some(n as i64)),
        Some(n) => Err(D::Error::custom(format!("expected integer id, got {}", n))),
    }
}

fn flexible_flag<'de, D>(deserializer: D, if_null: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FlagValue>::deserialize(deserializer)? {
        None => Ok(if_null),
        Some(value) => flag_to_bool::<D::Error>(value),
    }
}

/// Boolean flag sent as `bool`, `0`/`1` or a string; `null` reads as `false`.
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    flexible_flag(deserializer, false)
}

/// Same as [`flexible_bool`] for flags that default to on: `null` reads as `true`,
/// like a missing key with `#[serde(default = "default_true")]`.
pub fn flexible_bool_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    flexible_flag(deserializer, true)
}

/// Serializes a flag the way multipart and legacy JSON endpoints expect it.
pub fn serialize_flag_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct Row {
        #[serde(deserialize_with = "flexible_f64")]
        price: f64,
        #[serde(default, deserialize_with = "flexible_opt_f64")]
        min: Option<f64>,
        #[serde(default, deserialize_with = "flexible_opt_i64")]
        type_id: Option<i64>,
        #[serde(deserialize_with = "flexible_bool", serialize_with = "serialize_flag_as_int")]
        active: bool,
    }

    #[test]
    fn test_numbers_from_strings_and_numbers() {
        let p: Row = serde_json::from_value(json!({
            "price": "12.50", "min": 3, "type_id": "7", "active": 1
        }))
        .unwrap();
        assert_eq!(p.price, 12.5);
        assert_eq!(p.min, Some(3.0));
        assert_eq!(p.type_id, Some(7));
        assert!(p.active);
    }

    #[test]
    fn test_missing_and_empty_values() {
        let p: Row = serde_json::from_value(json!({
            "price": "", "min": "", "type_id": null, "active": "0"
        }))
        .unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.min, None);
        assert_eq!(p.type_id, None);
        assert!(!p.active);

        let p: Row = serde_json::from_value(json!({ "price": 1, "active": true })).unwrap();
        assert_eq!(p.min, None);
        assert_eq!(p.type_id, None);
    }

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "flexible_bool")]
        off_by_default: bool,
        #[serde(default = "on", deserialize_with = "flexible_bool_default_true")]
        on_by_default: bool,
    }

    fn on() -> bool {
        true
    }

    #[test]
    fn test_null_reads_as_field_default() {
        let p: Row = serde_json::from_value(json!({ "price": null, "min": null, "active": null })).unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.min, None);
        assert!(!p.active);

        let f: Flags = serde_json::from_value(json!({ "off_by_default": null, "on_by_default": null })).unwrap();
        assert!(!f.off_by_default);
        assert!(f.on_by_default);

        let f: Flags = serde_json::from_value(json!({})).unwrap();
        assert!(!f.off_by_default);
        assert!(f.on_by_default);

        let f: Flags = serde_json::from_value(json!({ "on_by_default": "0" })).unwrap();
        assert!(!f.on_by_default);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(serde_json::from_value::<Row>(json!({ "price": "abc", "active": true })).is_err());
        assert!(serde_json::from_value::<Row>(json!({ "price": 1, "active": "maybe" })).is_err());
        assert!(serde_json::from_value::<Row>(json!({ "price": 1, "type_id": 1.5, "active": true })).is_err());
    }

    #[test]
    fn test_flag_serializes_as_int() {
        let p: Row = serde_json::from_value(json!({ "price": 1, "active": "true" })).unwrap();
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["active"], json!(1));
    }
}
