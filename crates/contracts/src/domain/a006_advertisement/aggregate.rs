use serde::{Deserialize, Serialize};

use crate::domain::common::{AdminRecord, MediaType};
use crate::shared::request_context::{AdminResource, RequestContext};
use crate::shared::serde_helpers::flexible_bool_default_true;

fn default_true() -> bool {
    true
}

/// Рекламный баннер (изображение или видео)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: i64,
    pub media_type: MediaType,
    #[serde(default)]
    pub media_path: String,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl Advertisement {
    /// Полный адрес файла: `media_url` сервера или путь в каталоге загрузок
    pub fn resolved_media_url(&self, ctx: &RequestContext) -> String {
        match self.media_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => url.to_string(),
            None => ctx.media_url(&self.media_path),
        }
    }
}

impl AdminRecord for Advertisement {
    const RESOURCE: AdminResource = AdminResource::Advertisement;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Advertisement #{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ConsoleConfig;
    use serde_json::json;

    #[test]
    fn test_deserialize_and_media_url() {
        let ad: Advertisement = serde_json::from_value(json!({
            "id": 2, "media_type": "video", "media_path": "ads/promo.mp4", "is_active": "0"
        }))
        .unwrap();
        assert_eq!(ad.media_type, MediaType::Video);
        assert!(!ad.is_active);

        let ctx = RequestContext::from_config(&ConsoleConfig::default(), None);
        assert_eq!(
            ad.resolved_media_url(&ctx),
            "https://ecommerce.sidhwanitechnologies.com/uploads/ads/promo.mp4"
        );
    }

    #[test]
    fn test_unknown_media_type_rejected() {
        assert!(serde_json::from_value::<Advertisement>(json!({ "id": 1, "media_type": "gif" })).is_err());
    }
}
