use contracts::domain::common::StatusResource;
use contracts::enums::LabeledEnum;
use leptos::prelude::*;

use crate::shared::api;
use crate::shared::components::ui::{StatusChangeFuture, StatusSelect};
use crate::shared::dropdown::enum_options;
use crate::shared::list_state::ListController;

/// `StatusSelect` в строке таблицы: PATCH статуса и правка строки на месте
#[component]
pub fn RowStatusSelect<R: StatusResource + Send + Sync>(
    list: ListController<R>,
    #[prop(into)] id: String,
    /// Импульс галочки (например, запись только что сохранена)
    #[prop(optional, into)]
    show_success: MaybeProp<bool>,
) -> impl IntoView {
    let row_id = id.clone();
    let value = Signal::derive(move || {
        list.state.with(|s| {
            s.find(&row_id)
                .map(|item| item.status().as_str().to_string())
                .unwrap_or_default()
        })
    });

    let commit = Callback::new(move |(id, value): (String, String)| -> StatusChangeFuture {
        Box::pin(async move {
            let status: R::Status = value.parse().map_err(|e| format!("{}", e))?;
            api::set_status::<R, _>(&id, &R::status_dto(status))
                .await
                .map_err(|e| e.to_string())?;
            log::info!("{} {}: статус {}", R::META.endpoint, id, status.as_str());
            list.patch_item(&id, |item| item.set_status(status));
            Ok(())
        })
    });

    view! {
        <StatusSelect
            value=value
            options={enum_options::<R::Status>()}
            item_id=id
            on_status_change=commit
            loading=list.loading
            show_success=show_success
        />
    }
}
