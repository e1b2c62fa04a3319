use crate::shared::request_context::AdminResource;

/// Трейт для записей, которыми управляет консоль
pub trait AdminRecord {
    /// Ресурс API, которому принадлежит запись
    const RESOURCE: AdminResource;

    /// Числовой id записи на сервере
    fn record_id(&self) -> i64;

    /// Название для заголовков, подтверждений и баннеров
    fn display_name(&self) -> String;
}
