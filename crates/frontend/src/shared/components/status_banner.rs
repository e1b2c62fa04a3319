use contracts::shared::alert::Alert;
use leptos::prelude::*;

/// Баннер результата операции (успех / ошибка) с кнопкой закрытия
#[component]
pub fn StatusBanner(
    #[prop(into)] alert: Signal<Option<Alert>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        alert.get().map(|alert| {
            let class = alert.variant.css_class();
            view! {
                <div class=class role="alert">
                    <strong class="alert__title">{alert.title}</strong>
                    <span class="alert__message">{alert.message}</span>
                    <button class="alert__close" title="Закрыть" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
