use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_state::ListController;

/// Заголовок списка: название, счётчик, «Новый» и «Обновить»
#[component]
pub fn ListHeader<R: Resource + Send + Sync>(
    list: ListController<R>,
    /// Кнопка создания показывается, только если передан колбэк
    #[prop(optional)]
    on_create: Option<Callback<()>>,
) -> impl IntoView {
    let loading = list.loading;

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{R::META.list_name}</h1>
                <Badge>{move || list.total_count().get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {on_create.map(|cb| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| cb.run(())>
                        {icon("plus")}
                        " Новый"
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list.load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                </Button>
            </div>
        </div>
    }
}

/// Поиск по серверу и переключатель страниц
#[component]
pub fn SearchPanel<R: Resource + Send + Sync>(
    list: ListController<R>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let state = list.state;

    let apply = move || list.search(&search.get_untracked());
    let reset = move || {
        search.set(String::new());
        list.search("");
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Поиск"</span>
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| list.go_to_page(page))
                        on_page_size_change=Callback::new(move |size| list.change_page_size(size))
                    />
                </div>
            </div>

            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div
                        style="flex: 1; max-width: 360px;"
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                apply();
                            }
                        }
                    >
                        <Input value=search placeholder=placeholder />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| apply()
                        disabled=Signal::derive(move || list.loading.get())
                    >
                        "Найти"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                        "Сбросить"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

/// Кнопки «изменить» и «удалить» в строке таблицы
#[component]
pub fn RowActions(
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            {on_edit.map(|cb| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| cb.run(())
                    attr:title="Редактировать"
                >
                    {icon("edit")}
                </Button>
            })}
            {on_delete.map(|cb| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| cb.run(())
                    attr:title="Удалить"
                >
                    {icon("trash")}
                </Button>
            })}
        </div>
    }
}

/// Сообщение об ошибке загрузки и пустой список
#[component]
pub fn ListStatus<R: Resource + Send + Sync>(list: ListController<R>) -> impl IntoView {
    view! {
        {move || list.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        {move || {
            let empty = list.state.with(|s| s.is_loaded && s.items.is_empty());
            (empty && !list.loading.get()).then(|| view! {
                <div class="table-empty">"Записей не найдено"</div>
            })
        }}
    }
}
