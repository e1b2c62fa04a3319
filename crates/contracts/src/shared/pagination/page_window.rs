use serde::Serialize;

/// Минимальное число кнопок, при котором окно ещё помещает
/// первую, последнюю страницу, два многоточия и текущую.
pub const MIN_BUTTONS: usize = 5;

/// Элемент переключателя страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    /// Номер страницы (с 1)
    Page(usize),
    /// Пропуск нескольких страниц
    Ellipsis,
}

impl PageItem {
    pub fn label(&self) -> String {
        match self {
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        }
    }

    pub fn page(&self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }
}

/// Строит окно кнопок страниц вокруг `current_page`.
///
/// Первая и последняя страницы присутствуют всегда, длина результата не
/// превышает `max_buttons + 2`. `current_page` вне `[1, total_pages]`
/// прижимается к границе, `max_buttons` меньше [`MIN_BUTTONS`] поднимается
/// до него. Многоточие заменяет не меньше двух страниц.
pub fn build_page_window(total_pages: usize, current_page: usize, max_buttons: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max_buttons = max_buttons.max(MIN_BUTTONS);
    if total_pages <= max_buttons {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let siblings = (max_buttons - 3) / 2;
    let last_inner = total_pages - 1;

    let mut start = current.saturating_sub(siblings).max(2);
    let mut end = (current + siblings).min(last_inner);

    // У краёв окно прижимается к первой или последней странице
    if current - 1 <= siblings {
        start = 2;
        end = (max_buttons - 2).min(last_inner);
    }
    if total_pages - current <= siblings {
        start = total_pages.saturating_sub(max_buttons - 3).max(2);
        end = last_inner;
    }

    let mut items = Vec::with_capacity(max_buttons + 2);
    items.push(PageItem::Page(1));
    // Пропуск ровно одной страницы заменяется её номером
    match start {
        3 => items.push(PageItem::Page(2)),
        s if s > 3 => items.push(PageItem::Ellipsis),
        _ => {}
    }
    items.extend((start..=end).map(PageItem::Page));
    match last_inner - end {
        1 => items.push(PageItem::Page(last_inner)),
        gap if gap > 1 => items.push(PageItem::Ellipsis),
        _ => {}
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn pages(range: std::ops::RangeInclusive<usize>) -> Vec<PageItem> {
        range.map(Page).collect()
    }

    #[test]
    fn test_small_total_is_not_windowed() {
        assert_eq!(build_page_window(5, 1, 10), pages(1..=5));
        assert_eq!(build_page_window(12, 7, 12), pages(1..=12));
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(build_page_window(1, 1, 10), vec![Page(1)]);
        assert!(build_page_window(0, 1, 10).is_empty());
    }

    #[test]
    fn test_head_of_range() {
        let mut expected = pages(1..=10);
        expected.push(Ellipsis);
        expected.push(Page(100));
        assert_eq!(build_page_window(100, 1, 12), expected);
    }

    #[test]
    fn test_middle_of_range() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(46..=54));
        expected.push(Ellipsis);
        expected.push(Page(100));
        assert_eq!(build_page_window(100, 50, 12), expected);
    }

    #[test]
    fn test_tail_of_range() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(91..=100));
        assert_eq!(build_page_window(100, 100, 12), expected);
    }

    #[test]
    fn test_near_edges_no_lone_gap() {
        // siblings = 4: страница 5 ещё в зоне начала
        let window = build_page_window(100, 5, 12);
        assert_eq!(window[1], Page(2));
        let window = build_page_window(100, 6, 12);
        assert_eq!(window[1], Page(2));
        // окно 3..=11: страница 2 показывается вместо многоточия
        let window = build_page_window(100, 7, 12);
        assert_eq!(&window[..3], &[Page(1), Page(2), Page(3)]);
        let window = build_page_window(100, 8, 12);
        assert_eq!(&window[..3], &[Page(1), Ellipsis, Page(4)]);
        // то же у конца диапазона
        let window = build_page_window(100, 94, 12);
        assert_eq!(&window[window.len() - 3..], &[Page(98), Page(99), Page(100)]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(build_page_window(100, 0, 12), build_page_window(100, 1, 12));
        assert_eq!(build_page_window(100, 500, 12), build_page_window(100, 100, 12));
    }

    #[test]
    fn test_tiny_max_buttons_raised() {
        assert_eq!(build_page_window(20, 10, 1), build_page_window(20, 10, MIN_BUTTONS));
        assert_eq!(
            build_page_window(20, 10, MIN_BUTTONS),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_invariants() {
        for max_buttons in [5usize, 6, 7, 10, 12, 15] {
            for total in 1..=60usize {
                for current in 1..=total {
                    let window = build_page_window(total, current, max_buttons);
                    assert!(window.len() <= max_buttons + 2, "{total}/{current}/{max_buttons}");
                    assert_eq!(window.first(), Some(&Page(1)));
                    assert_eq!(window.last(), Some(&Page(total)));

                    let numbers: Vec<usize> = window.iter().filter_map(PageItem::page).collect();
                    assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                    assert!(numbers.contains(&current));

                    for (i, item) in window.iter().enumerate() {
                        if *item == Ellipsis {
                            let before = window[i - 1].page().unwrap();
                            let after = window[i + 1].page().unwrap();
                            assert!(after - before > 2, "ellipsis hides fewer than two pages");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Page(7).label(), "7");
        assert_eq!(Ellipsis.label(), "...");
    }
}
