//! Общие диалоги списочных страниц: форма записи, подтверждение
//! удаления и уведомление об успехе.

use std::future::Future;

use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;

use super::api::{self, ApiError};
use super::components::confirm_dialog::ConfirmDialog;
use super::components::success_modal::SuccessModal;
use super::dropdown::{options_from, SelectOption};
use super::list_state::ListController;
use super::number_format::parse_number;

/// Режим модальной формы
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<R> {
    Create,
    Edit(R),
}

impl<R: Resource> FormMode<R> {
    pub fn title(&self) -> String {
        match self {
            FormMode::Create => format!("{}: новая запись", R::META.element_name),
            FormMode::Edit(item) => format!("{}: {}", R::META.element_name, item.title()),
        }
    }

    pub fn item(&self) -> Option<&R> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(item) => Some(item),
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Запись создана",
            FormMode::Edit(_) => "Изменения сохранены",
        }
    }
}

/// Текст поля формы: обрезанный, пустой превращается в `None`
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Обязательное текстовое поле
pub fn required_text(value: &str, field: &str) -> Result<String, String> {
    optional_text(value).ok_or_else(|| format!("Заполните поле «{}»", field))
}

/// Положительное число из поля ввода
pub fn positive_number(value: &str, field: &str) -> Result<f64, String> {
    match parse_number(value) {
        Some(v) if v > 0.0 => Ok(v),
        Some(_) => Err(format!("«{}» должно быть больше нуля", field)),
        None => Err(format!("Введите число в поле «{}»", field)),
    }
}

/// Неотрицательное число; пустое поле даёт 0
pub fn non_negative_number(value: &str, field: &str) -> Result<f64, String> {
    if value.trim().is_empty() {
        return Ok(0.0);
    }
    match parse_number(value) {
        Some(v) if v >= 0.0 => Ok(v),
        Some(_) => Err(format!("«{}» не может быть отрицательным", field)),
        None => Err(format!("Введите число в поле «{}»", field)),
    }
}

/// Значение числа для поля ввода (без хвостовых нулей)
pub fn number_input_value(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// POST для новой записи, PUT для существующей
pub async fn save<R: Resource, D: Serialize>(id: Option<&str>, dto: &D) -> Result<(), ApiError> {
    match id {
        Some(id) => api::update::<R, D>(id, dto).await,
        None => api::create::<R, D>(dto).await,
    }
}

/// Запускает сохранение формы: блокирует кнопки, показывает ошибку,
/// при успехе вызывает `on_saved`
pub fn submit_form<F>(
    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_saved: Callback<()>,
    request: F,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    if saving.get_untracked() {
        return;
    }
    saving.set(true);
    error.set(None);
    spawn_local(async move {
        let result = request.await;
        let _ = saving.try_set(false);
        match result {
            Ok(()) => on_saved.run(()),
            Err(e) => {
                let _ = error.try_set(Some(e.to_string()));
            }
        }
    });
}

/// Справочник для выпадающего списка формы; грузится один раз
pub fn use_lookup<R: Resource>(label: fn(&R) -> String) -> RwSignal<Vec<SelectOption>> {
    let options = RwSignal::new(Vec::new());
    spawn_local(async move {
        match api::fetch_lookup::<R>().await {
            Ok(items) => {
                let _ = options.try_set(options_from(&items, |i| i.id().to_string(), label));
            }
            Err(e) => log::warn!("lookup {}: {}", R::META.endpoint, e),
        }
    });
    options
}

pub struct CrudDialogs<R: Resource + Send + Sync> {
    pub form: RwSignal<Option<FormMode<R>>>,
    pub deleting: RwSignal<Option<R>>,
    pub delete_busy: RwSignal<bool>,
    pub delete_error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    /// Последняя сохранённая запись: её статус подсвечивается галочкой
    pub last_saved: RwSignal<Option<String>>,
    list: ListController<R>,
}

impl<R: Resource + Send + Sync> Clone for CrudDialogs<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + Send + Sync> Copy for CrudDialogs<R> {}

impl<R: Resource + Send + Sync> CrudDialogs<R> {
    pub fn new(list: ListController<R>) -> Self {
        Self {
            form: RwSignal::new(None),
            deleting: RwSignal::new(None),
            delete_busy: RwSignal::new(false),
            delete_error: RwSignal::new(None),
            success: RwSignal::new(None),
            last_saved: RwSignal::new(None),
            list,
        }
    }

    pub fn open_create(self) {
        self.form.set(Some(FormMode::Create));
    }

    pub fn open_edit(self, item: R) {
        self.form.set(Some(FormMode::Edit(item)));
    }

    pub fn close_form(self) {
        self.form.set(None);
    }

    /// Форма сохранена: закрыть, показать уведомление, перечитать список
    pub fn saved(self) {
        let (message, id) = self
            .form
            .with_untracked(|f| {
                f.as_ref()
                    .map(|m| (m.success_message(), m.item().map(|i| i.id().to_string())))
            })
            .unwrap_or(("Сохранено", None));
        self.form.set(None);
        self.last_saved.set(id);
        self.notify(message);
        self.list.load();
    }

    pub fn notify(self, message: impl Into<String>) {
        self.success.set(Some(message.into()));
    }

    pub fn ask_delete(self, item: R) {
        self.delete_error.set(None);
        self.deleting.set(Some(item));
    }

    pub fn cancel_delete(self) {
        if !self.delete_busy.get_untracked() {
            self.deleting.set(None);
        }
    }

    pub fn confirm_delete(self) {
        let Some(item) = self.deleting.get_untracked() else {
            return;
        };
        if self.delete_busy.get_untracked() {
            return;
        }
        self.delete_busy.set(true);
        self.delete_error.set(None);

        spawn_local(async move {
            let result = api::remove::<R>(item.id()).await;
            let _ = self.delete_busy.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("{} {} удалён", R::META.endpoint, item.id());
                    let _ = self.deleting.try_set(None);
                    let _ = self.success.try_set(Some("Запись удалена".to_string()));
                    self.list.load();
                }
                Err(e) => {
                    let _ = self.delete_error.try_set(Some(e.to_string()));
                }
            }
        });
    }
}

/// Диалог удаления и уведомление об успехе для страницы ресурса `R`
#[component]
pub fn CrudOverlays<R: Resource + Send + Sync>(dialogs: CrudDialogs<R>) -> impl IntoView {
    view! {
        {move || dialogs.deleting.get().map(|item| view! {
            <ConfirmDialog
                title="Удаление"
                message=format!("Удалить «{}»? Действие нельзя отменить.", item.title())
                busy=dialogs.delete_busy
                error=dialogs.delete_error
                on_confirm=Callback::new(move |_| dialogs.confirm_delete())
                on_cancel=Callback::new(move |_| dialogs.cancel_delete())
            />
        })}
        {move || dialogs.success.get().map(|message| view! {
            <SuccessModal
                message=message
                on_close=Callback::new(move |_| {
                    dialogs.success.set(None);
                    dialogs.last_saved.set(None);
                })
            />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_material_type::MaterialType;

    fn material_type() -> MaterialType {
        MaterialType {
            id: "3".into(),
            name: "Сыпучие".into(),
            description: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn text_helpers_trim_and_require() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Toshkent "), Some("Toshkent".to_string()));
        assert_eq!(required_text("", "Название"), Err("Заполните поле «Название»".to_string()));
    }

    #[test]
    fn number_helpers_validate_sign() {
        assert_eq!(positive_number("1 500,5", "Сумма"), Ok(1500.5));
        assert!(positive_number("0", "Сумма").is_err());
        assert!(positive_number("abc", "Сумма").is_err());
        assert_eq!(non_negative_number("", "Остаток"), Ok(0.0));
        assert!(non_negative_number("-1", "Остаток").is_err());
    }

    #[test]
    fn number_input_value_drops_zero_fraction() {
        assert_eq!(number_input_value(12000.0), "12000");
        assert_eq!(number_input_value(2.5), "2.5");
        assert_eq!(number_input_value(0.0), "");
    }

    #[test]
    fn form_titles_name_the_record() {
        let create: FormMode<MaterialType> = FormMode::Create;
        assert!(create.item().is_none());
        assert_eq!(create.success_message(), "Запись создана");

        let edit = FormMode::Edit(material_type());
        assert!(edit.title().ends_with(": Сыпучие"));
        assert_eq!(edit.item().map(|m| m.id.as_str()), Some("3"));
    }
}
