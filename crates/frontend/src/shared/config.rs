//! Настройки клиента.
//!
//! Адрес API задаётся при сборке переменной `ADMIN_API_URL`
//! (например, `ADMIN_API_URL=https://api.example.uz trunk build`).
//! Без неё используется хост страницы и порт 3000.

/// Порт API по умолчанию
pub const DEFAULT_API_PORT: u16 = 3000;

/// Размер страницы списков по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 20;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Лимит при загрузке справочников для выпадающих списков
pub const LOOKUP_LIMIT: usize = 500;

/// Время показа окна «Успешно», мс
pub const SUCCESS_MODAL_MS: u32 = 2000;

/// Адрес API, заданный при сборке
pub fn configured_api_url() -> Option<&'static str> {
    option_env!("ADMIN_API_URL")
}

/// Базовый URL API без завершающего `/`
pub fn resolve_api_base(configured: Option<&str>, protocol: &str, hostname: &str) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_url_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.uz/"), "http:", "localhost"),
            "https://api.example.uz"
        );
    }

    #[test]
    fn falls_back_to_page_host() {
        assert_eq!(
            resolve_api_base(None, "https:", "admin.example.uz"),
            "https://admin.example.uz:3000"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "http:", "127.0.0.1"),
            "http://127.0.0.1:3000"
        );
    }
}
