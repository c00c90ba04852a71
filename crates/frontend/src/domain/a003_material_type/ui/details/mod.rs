use contracts::domain::a003_material_type::{MaterialType, MaterialTypeDto};
use leptos::prelude::*;

use crate::domain::a003_material_type::api;
use crate::shared::components::form_modal::FormModal;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::crud::{optional_text, required_text, submit_form, FormMode};

pub fn validate(name: &str, description: &str) -> Result<MaterialTypeDto, String> {
    Ok(MaterialTypeDto {
        name: required_text(name, "Название")?,
        description: optional_text(description),
    })
}

#[component]
pub fn MaterialTypeDetails(
    mode: FormMode<MaterialType>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = mode.item().map(|m| m.id.clone());
    let name = RwSignal::new(mode.item().map(|m| m.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        mode.item()
            .and_then(|m| m.description.clone())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = Callback::new(move |_| {
        match validate(&name.get_untracked(), &description.get_untracked()) {
            Ok(dto) => {
                let id = id.clone();
                submit_form(saving, error, on_saved, async move {
                    api::save_material_type(id.as_deref(), &dto).await
                });
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <FormModal
            title=mode.title()
            error=error
            saving=saving
            on_submit=on_submit
            on_close=on_close
        >
            <Input label="Название" value=name required=true disabled=saving />
            <Textarea label="Описание" value=description rows=4 disabled=saving />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional() {
        let dto = validate("Цемент", "   ").unwrap();
        assert_eq!(dto.name, "Цемент");
        assert_eq!(dto.description, None);
        assert!(validate(" ", "текст").is_err());
    }
}
