use crate::layout::global_context::use_app_context;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Контент активной страницы; смена ключа пересоздаёт страницу
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-center" style="flex: 1; overflow: auto;">
            {move || {
                let key = ctx.active.get();
                render_page(&key)
            }}
        </div>
    }
}
