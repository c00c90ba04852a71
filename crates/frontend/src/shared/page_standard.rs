//! Категории страниц. Каждая страница объявляет `id` вида
//! `{entity}--{category}` и атрибут `data-page-category`, чтобы по DOM
//! можно было найти модуль (`a001_company--list` → `domain/a001_company`).

/// Таблица записей с поиском и постраничным выводом
pub const PAGE_CAT_LIST: &str = "list";

/// Форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Администрирование: пользователи, роли, журнал
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// `{entity}--{category}` с непустыми частями
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_page_ids() {
        assert!(is_valid_page_id("a001_company--list"));
        assert!(is_valid_page_id("sys_users--system"));
        assert!(!is_valid_page_id("a001_company"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_company--dashboard"));
    }
}
