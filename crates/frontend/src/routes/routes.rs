use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Страница из ?page= и обратная синхронизация адресной строки
    ctx.init_url_sync();

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.restoring)
            fallback=|| view! {
                <div class="app-loading">
                    <Spinner />
                    <span>"Проверка сессии..."</span>
                </div>
            }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
