//! Состояние страницы списка: текущая страница, общее количество,
//! строка поиска и баннер результата.

use contracts::domain::common::AdminRecord;
use contracts::shared::alert::{Alert, AlertVariant};
use contracts::shared::api_error::ApiError;
use contracts::shared::config::PaginationConfig;
use contracts::shared::envelope::ListPayload;
use contracts::shared::load_state::LoadState;
use contracts::shared::pagination::{build_page_window, page_after_delete, ListQuery, PageItem, TotalCount};
use contracts::shared::search::{filter_list, Searchable};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ListPageState<T> {
    /// Записи текущей страницы
    pub items: Vec<T>,
    /// Текущая страница, с 1
    pub page: usize,
    pub per_page: usize,
    pub max_buttons: usize,
    pub total: TotalCount,
    pub filter: String,
    pub load: LoadState<()>,
    pub banner: Option<Alert>,
}

impl<T> ListPageState<T> {
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            per_page: config.items_per_page.max(1),
            max_buttons: config.max_buttons,
            total: TotalCount::default(),
            filter: String::new(),
            load: LoadState::Idle,
            banner: None,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.page, self.per_page)
    }

    /// Начало загрузки; возвращает запрос текущей страницы
    pub fn begin_load(&mut self) -> ListQuery {
        self.load = LoadState::Loading;
        self.query()
    }

    /// Применяет разобранный ответ со списком.
    ///
    /// Если сервер не сообщил общее количество, оценка строится по
    /// полученной странице и только растёт.
    pub fn apply_payload(&mut self, payload: ListPayload<T>) {
        let reported_failure = payload.reported_failure();
        let page = match payload.into_page() {
            Ok(page) => page,
            Err(err) => {
                self.fail(&err, "Failed to load data.");
                return;
            }
        };

        let estimate = match page.total {
            Some(total) => TotalCount::Exact(total),
            None => TotalCount::observed(&self.query(), page.items.len()),
        };
        self.total = self.total.merge(estimate);
        if page.skipped > 0 {
            log::warn!("{} rows skipped on page {}", page.skipped, self.page);
        }
        self.items = page.items;
        self.load = LoadState::Loaded(());
        self.banner = reported_failure.then(|| {
            Alert::new(
                AlertVariant::Warning,
                "Warning",
                "The server reported a problem, the list may be incomplete.",
            )
        });
    }

    /// Ошибка операции: баннер и лог, данные страницы не трогаются
    pub fn fail(&mut self, err: &ApiError, fallback: &str) {
        log::error!("{}: {}", fallback, err);
        let alert = Alert::from_error(err, fallback);
        self.load = LoadState::Failed(alert.clone());
        self.banner = Some(alert);
    }

    pub fn total_pages(&self) -> usize {
        self.total.pages(self.per_page)
    }

    pub fn page_buttons(&self) -> Vec<PageItem> {
        build_page_window(self.total_pages(), self.page, self.max_buttons)
    }

    /// Переход на страницу; `None`, если страница не изменилась
    pub fn go_to(&mut self, page: usize) -> Option<ListQuery> {
        let page = page.clamp(1, self.total_pages());
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.query())
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}

impl<T: Searchable + Clone> ListPageState<T> {
    /// Записи страницы с учётом строки поиска
    pub fn visible_items(&self) -> Vec<T> {
        filter_list(&self.items, &self.filter)
    }
}

impl<T: AdminRecord> ListPageState<T> {
    /// Убирает запись со страницы без перезагрузки
    pub fn remove_local(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.record_id() != id);
        self.items.len() != before
    }

    /// После успешного удаления: запись убрана, количество уменьшено,
    /// страница прижата к новому числу страниц. Возвращает запрос для перезагрузки.
    pub fn after_delete(&mut self, id: i64, message: Option<String>) -> ListQuery {
        self.remove_local(id);
        let (total, page) = page_after_delete(self.total, self.page, self.per_page);
        self.total = total;
        self.page = page;
        self.banner = Some(Alert::success(
            message.unwrap_or_else(|| format!("{} deleted successfully.", T::RESOURCE.path())),
        ));
        self.query()
    }
}

pub fn create_state<T: Send + Sync + 'static>(config: &PaginationConfig) -> RwSignal<ListPageState<T>> {
    RwSignal::new(ListPageState::new(config))
}
