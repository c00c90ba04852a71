use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use crate::enums::{LabeledEnum, ParseEnumError};

/// Статическое описание REST-ресурса сущности
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMeta {
    /// Путь коллекции, например `/api/companies`
    pub endpoint: &'static str,
    /// Заголовок списка в меню и на странице
    pub list_name: &'static str,
    /// Название одной записи (для заголовков форм)
    pub element_name: &'static str,
}

impl ResourceMeta {
    /// Путь конкретной записи: `{endpoint}/{id}`
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Путь смены статуса: `{endpoint}/{id}/status`
    pub fn status_path(&self, id: &str) -> String {
        format!("{}/{}/status", self.endpoint, id)
    }
}

/// Запись, которую API отдаёт как элемент коллекции
pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    const META: ResourceMeta;

    /// Идентификатор записи
    fn id(&self) -> &str;

    /// Короткое название записи для диалогов подтверждения
    fn title(&self) -> String;
}

/// Запись со статусом, который меняется через `PATCH {endpoint}/{id}/status`
pub trait StatusResource: Resource {
    type Status: LabeledEnum + FromStr<Err = ParseEnumError> + Serialize;
    type StatusDto: Serialize + 'static;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    fn status_dto(status: Self::Status) -> Self::StatusDto;
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: ResourceMeta = ResourceMeta {
        endpoint: "/api/companies",
        list_name: "Компании",
        element_name: "Компания",
    };

    #[test]
    fn builds_item_and_status_paths() {
        assert_eq!(META.item_path("42"), "/api/companies/42");
        assert_eq!(META.status_path("42"), "/api/companies/42/status");
    }
}
