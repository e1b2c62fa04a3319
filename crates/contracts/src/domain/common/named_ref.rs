use serde::{Deserialize, Serialize};

use super::AdminRecord;

/// Краткая ссылка на связанную запись (`{ id, name }`), как её вкладывает сервер
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl NamedRef {
    /// Имя записи из справочника или `#id`, если её там нет
    pub fn label_in<T: AdminRecord>(id: i64, options: &[T]) -> String {
        options
            .iter()
            .find(|o| o.record_id() == id)
            .map(|o| o.display_name())
            .unwrap_or_else(|| format!("#{}", id))
    }
}
