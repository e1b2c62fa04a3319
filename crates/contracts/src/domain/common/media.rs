use serde::{Deserialize, Serialize};

/// Тип медиа рекламного баннера или слайда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn code(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "image" => Some(MediaType::Image),
            "video" => Some(MediaType::Video),
            _ => None,
        }
    }

    pub fn all() -> Vec<MediaType> {
        vec![MediaType::Image, MediaType::Video]
    }
}

/// Поля формы медиа-записи (рекламы или слайда) без самого файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaForm {
    pub media_type: MediaType,
    pub is_active: bool,
    /// Выбран ли файл для загрузки
    pub has_file: bool,
}

impl Default for MediaForm {
    fn default() -> Self {
        Self {
            media_type: MediaType::Image,
            is_active: true,
            has_file: false,
        }
    }
}

impl MediaForm {
    /// При создании файл обязателен, при редактировании можно оставить прежний
    pub fn validate(&self, is_new: bool) -> Result<(), String> {
        if is_new && !self.has_file {
            return Err("Please select a file to upload.".into());
        }
        Ok(())
    }

    /// Текстовые поля multipart-формы
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("media_type", self.media_type.code().to_string()),
            ("is_active", if self.is_active { "1" } else { "0" }.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_codes() {
        assert_eq!(MediaType::from_code(" Video "), Some(MediaType::Video));
        assert_eq!(MediaType::from_code("gif"), None);
        for t in MediaType::all() {
            assert_eq!(MediaType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_form_requires_file_on_create() {
        let form = MediaForm::default();
        assert!(form.validate(true).is_err());
        assert!(form.validate(false).is_ok());
        assert_eq!(
            form.form_fields(),
            vec![("media_type", "image".to_string()), ("is_active", "1".to_string())]
        );
    }
}
