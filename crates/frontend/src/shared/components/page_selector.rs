use contracts::shared::pagination::{build_page_window, PageItem};
use leptos::prelude::*;

/// PageSelector component - numbered page buttons with previous / next
///
/// Pages are 1-based. The window of numbered buttons comes from
/// `build_page_window`, so the first and last page are always reachable.
#[component]
pub fn PageSelector(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Size of the page window (defaults to 12)
    #[prop(optional)]
    max_buttons: Option<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let max_buttons = max_buttons.unwrap_or(12);

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="page-selector">
                <button
                    class="page-selector__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                >
                    "Previous"
                </button>
                {move || {
                    let current = current_page.get();
                    build_page_window(total_pages.get(), current, max_buttons)
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => {
                                let class = if page == current {
                                    "page-selector__btn page-selector__btn--active"
                                } else {
                                    "page-selector__btn"
                                };
                                view! {
                                    <button class=class on:click=move |_| on_page_change.run(page)>
                                        {item.label()}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Ellipsis => {
                                view! { <span class="page-selector__ellipsis">{item.label()}</span> }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-selector__btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
