use serde::{Deserialize, Serialize};

use crate::shared::api_error::ApiError;

/// Параметры запроса страницы списка (`?page=..&limit=..`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Номер страницы, с 1
    pub page: usize,
    /// Размер страницы
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl ListQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn to_query_string(&self) -> Result<String, ApiError> {
        Ok(serde_qs::to_string(self)?)
    }

    /// Смещение первой записи страницы
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.limit
    }
}

/// Количество страниц; пустой список всё равно показывает одну страницу.
pub fn total_pages(total: u64, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    let per_page = per_page as u64;
    (total.div_ceil(per_page) as usize).max(1)
}

/// Общее количество записей списка.
///
/// Не все эндпоинты возвращают `total`. Тогда известна только нижняя
/// граница по уже полученным страницам.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalCount {
    Exact(u64),
    AtLeast(u64),
}

impl Default for TotalCount {
    fn default() -> Self {
        TotalCount::AtLeast(0)
    }
}

impl TotalCount {
    /// Нижняя граница по полученной странице. Полная страница означает,
    /// что за ней может быть ещё одна.
    pub fn observed(query: &ListQuery, received: usize) -> Self {
        let seen = (query.offset() + received) as u64;
        if received >= query.limit {
            TotalCount::AtLeast(seen + 1)
        } else {
            TotalCount::AtLeast(seen)
        }
    }

    /// Объединяет новую оценку с предыдущей: точное значение побеждает,
    /// нижние границы только растут.
    pub fn merge(self, newer: TotalCount) -> TotalCount {
        match (self, newer) {
            (_, TotalCount::Exact(n)) => TotalCount::Exact(n),
            (TotalCount::Exact(n), TotalCount::AtLeast(_)) => TotalCount::Exact(n),
            (TotalCount::AtLeast(a), TotalCount::AtLeast(b)) => TotalCount::AtLeast(a.max(b)),
        }
    }

    pub fn value(&self) -> u64 {
        match self {
            TotalCount::Exact(n) | TotalCount::AtLeast(n) => *n,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, TotalCount::Exact(_))
    }

    pub fn pages(&self, per_page: usize) -> usize {
        total_pages(self.value(), per_page)
    }

    /// Текст для подписи под таблицей: "125" или "20+"
    pub fn display(&self) -> String {
        match self {
            TotalCount::Exact(n) => n.to_string(),
            TotalCount::AtLeast(n) => format!("{}+", n),
        }
    }

    fn decremented(self) -> TotalCount {
        match self {
            TotalCount::Exact(n) => TotalCount::Exact(n.saturating_sub(1)),
            TotalCount::AtLeast(n) => TotalCount::AtLeast(n.saturating_sub(1)),
        }
    }
}

/// Пересчёт после удаления записи: общее число уменьшается, текущая
/// страница не выходит за новое число страниц.
pub fn page_after_delete(total: TotalCount, current_page: usize, per_page: usize) -> (TotalCount, usize) {
    let total = total.decremented();
    let page = current_page.clamp(1, total.pages(per_page));
    (total, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        assert_eq!(ListQuery::new(3, 20).to_query_string().unwrap(), "page=3&limit=20");
        assert_eq!(ListQuery::new(0, 0), ListQuery { page: 1, limit: 1 });
        assert_eq!(ListQuery::new(3, 20).offset(), 40);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(130, 20), 7);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_observed_total() {
        let q = ListQuery::new(1, 20);
        assert_eq!(TotalCount::observed(&q, 20), TotalCount::AtLeast(21));
        assert_eq!(TotalCount::observed(&q, 20).pages(20), 2);
        assert_eq!(TotalCount::observed(&q, 7), TotalCount::AtLeast(7));

        let q = ListQuery::new(4, 20);
        assert_eq!(TotalCount::observed(&q, 3), TotalCount::AtLeast(63));
    }

    #[test]
    fn test_merge() {
        let lower = TotalCount::AtLeast(41);
        assert_eq!(lower.merge(TotalCount::AtLeast(21)), TotalCount::AtLeast(41));
        assert_eq!(lower.merge(TotalCount::Exact(30)), TotalCount::Exact(30));
        assert_eq!(TotalCount::Exact(30).merge(TotalCount::AtLeast(61)), TotalCount::Exact(30));
    }

    #[test]
    fn test_page_after_delete() {
        // последняя запись на последней странице: шаг назад
        assert_eq!(
            page_after_delete(TotalCount::Exact(41), 3, 20),
            (TotalCount::Exact(40), 2)
        );
        assert_eq!(
            page_after_delete(TotalCount::Exact(45), 3, 20),
            (TotalCount::Exact(44), 3)
        );
        assert_eq!(
            page_after_delete(TotalCount::Exact(1), 1, 20),
            (TotalCount::Exact(0), 1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TotalCount::Exact(125).display(), "125");
        assert_eq!(TotalCount::AtLeast(21).display(), "21+");
    }
}
