use serde::{Deserialize, Serialize};

use crate::domain::common::{AdminRecord, MediaType};
use crate::shared::request_context::{AdminResource, RequestContext};
use crate::shared::serde_helpers::flexible_bool_default_true;

fn default_true() -> bool {
    true
}

/// Слайд карусели главной страницы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slider {
    pub id: i64,
    pub media_type: MediaType,
    #[serde(default)]
    pub media_path: String,
    #[serde(default = "default_true", deserialize_with = "flexible_bool_default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl Slider {
    pub fn resolved_media_url(&self, ctx: &RequestContext) -> String {
        match self.media_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => url.to_string(),
            None => ctx.media_url(&self.media_path),
        }
    }

    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }
}

impl AdminRecord for Slider {
    const RESOURCE: AdminResource = AdminResource::Slider;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Slider #{}", self.id)
    }
}
