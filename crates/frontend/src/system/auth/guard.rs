use leptos::prelude::*;

use super::context::use_auth;

/// Показывает содержимое только при наличии разрешения
#[component]
pub fn RequirePermission(
    #[prop(into)] permission: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.can(&permission))
            fallback=|| view! { <div class="access-denied">"Недостаточно прав для этого раздела"</div> }
        >
            {children()}
        </Show>
    }
}
