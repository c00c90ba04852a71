use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::layout::pages::registry::is_known_page;
use crate::layout::pages::DEFAULT_PAGE;

/// Параметры адресной строки: `?page=a005_sale`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
}

/// Ключ страницы из `location.search`, если он известен
pub fn page_from_search(search: &str) -> Option<String> {
    serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.page)
        .filter(|key| is_known_page(key))
}

/// `?page=...` для активной страницы
pub fn search_for_page(key: &str) -> String {
    let query = PageQuery {
        page: Some(key.to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Читает `?page=` при старте и держит адресную строку в синхроне
    /// с активной страницей
    pub fn init_url_sync(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = page_from_search(&search) {
            self.active.set(key);
        }

        let active = self.active;
        Effect::new(move |_| {
            let new_search = search_for_page(&active.get());
            let Some(w) = window() else {
                return;
            };
            let current = w.location().search().unwrap_or_default();
            if current == new_search {
                return;
            }
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_search),
                );
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        log::debug!("open page {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_round_trip() {
        assert_eq!(search_for_page("a005_sale"), "?page=a005_sale");
        assert_eq!(page_from_search("?page=a005_sale").as_deref(), Some("a005_sale"));
    }

    #[test]
    fn unknown_or_missing_page_is_ignored() {
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?page=d400_monthly_summary"), None);
        assert_eq!(page_from_search("?active=a001_company"), None);
    }
}
