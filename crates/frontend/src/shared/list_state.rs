//! Состояние списочной страницы и загрузка страниц с сервера.

use contracts::domain::common::Resource;
use contracts::shared::{total_pages, ListQuery, PaginatedResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::config::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub search_query: String,
    /// 0-based
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
    /// Растёт с каждым ответом сервера; входит в ключ строк таблицы
    pub revision: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
            revision: 0,
        }
    }
}

impl<T: Resource> ListState<T> {
    /// Строки с ключом `(id, revision)`: после перезагрузки строки
    /// пересоздаются, а точечная правка через `patch` их сохраняет.
    pub fn rows(&self) -> Vec<((String, u64), T)> {
        self.items
            .iter()
            .map(|item| ((item.id().to_string(), self.revision), item.clone()))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn patch(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}

impl<T> ListState<T> {
    pub fn query(&self) -> ListQuery {
        ListQuery::from_ui_page(self.page, self.page_size, &self.search_query)
    }

    pub fn recalc_pagination(&mut self) {
        self.total_pages = total_pages(self.total_count, self.page_size);
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Принимает ответ сервера. Возвращает `true`, если текущая страница
    /// оказалась за концом списка (например, удалили последнюю запись)
    /// и её нужно перезапросить.
    pub fn apply_response(&mut self, response: PaginatedResponse<T>) -> bool {
        let requested = self.page;
        self.total_count = response.total;
        self.items = response.data;
        self.is_loaded = true;
        self.revision += 1;
        self.recalc_pagination();
        self.page != requested && self.items.is_empty()
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }
}

/// Реактивный список ресурса `R` с постраничной загрузкой.
///
/// Ответы на устаревшие запросы (быстрый поиск, листание) отбрасываются.
pub struct ListController<R: Resource + Send + Sync> {
    pub state: RwSignal<ListState<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    request_seq: StoredValue<u64>,
}

impl<R: Resource + Send + Sync> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource + Send + Sync> Copy for ListController<R> {}

impl<R: Resource + Send + Sync> ListController<R> {
    pub fn load(self) {
        let query = self.state.with_untracked(|s| s.query());
        let seq = self.request_seq.get_value() + 1;
        self.request_seq.set_value(seq);
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = api::fetch_page::<R>(&query).await;
            if self.request_seq.try_get_value() != Some(seq) {
                return;
            }
            let _ = self.loading.try_set(false);
            match result {
                Ok(page) => {
                    let reload = self
                        .state
                        .try_update(|s| s.apply_response(page))
                        .unwrap_or(false);
                    if reload {
                        self.load();
                    }
                }
                Err(e) => {
                    log::warn!("{}: {}", R::META.endpoint, e);
                    let _ = self.error.try_set(Some(format!(
                        "Не удалось загрузить «{}»: {}",
                        R::META.list_name,
                        e
                    )));
                }
            }
        });
    }

    pub fn go_to_page(self, page: usize) {
        self.state.update(|s| s.set_page(page));
        self.load();
    }

    pub fn change_page_size(self, size: usize) {
        self.state.update(|s| s.set_page_size(size));
        self.load();
    }

    pub fn search(self, query: &str) {
        self.state.update(|s| s.set_search(query));
        self.load();
    }

    /// Точечная правка записи без перезагрузки (например, новый статус)
    pub fn patch_item(self, id: &str, f: impl FnOnce(&mut R)) {
        let _ = self.state.try_update(|s| s.patch(id, f));
    }

    pub fn total_count(self) -> Signal<usize> {
        Signal::derive(move || self.state.with(|s| s.total_count))
    }
}

/// Создаёт контроллер и запускает первую загрузку
pub fn use_list<R: Resource + Send + Sync>() -> ListController<R> {
    let controller = ListController {
        state: RwSignal::new(ListState::default()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        request_seq: StoredValue::new(0),
    };
    controller.load();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(data: Vec<u32>, total: usize) -> PaginatedResponse<u32> {
        PaginatedResponse {
            data,
            total,
            page: 1,
            limit: 20,
        }
    }

    #[test]
    fn query_is_one_based_with_trimmed_search() {
        let mut state: ListState<u32> = ListState::default();
        state.set_search("  цемент ");
        state.page = 2;
        let q = state.query();
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(q.search.as_deref(), Some("цемент"));
    }

    #[test]
    fn apply_response_computes_pages() {
        let mut state: ListState<u32> = ListState::default();
        let reload = state.apply_response(response((1..=20).collect(), 45));
        assert!(!reload);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.items.len(), 20);
        assert!(state.is_loaded);
    }

    #[test]
    fn page_past_end_is_clamped_and_reloaded() {
        let mut state: ListState<u32> = ListState::default();
        state.apply_response(response(vec![1; 20], 41));
        state.set_page(2);
        assert_eq!(state.page, 2);

        // единственную запись третьей страницы удалили
        let reload = state.apply_response(response(vec![], 40));
        assert!(reload);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn empty_list_keeps_single_page() {
        let mut state: ListState<u32> = ListState::default();
        let reload = state.apply_response(response(vec![], 0));
        assert!(!reload);
        assert_eq!(state.page, 0);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn reload_changes_row_keys_but_patch_does_not() {
        use contracts::domain::a003_material_type::MaterialType;

        let item = |id: &str, name: &str| MaterialType {
            id: id.into(),
            name: name.into(),
            description: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        let mut state: ListState<MaterialType> = ListState::default();
        state.apply_response(PaginatedResponse {
            data: vec![item("1", "Сыпучие"), item("2", "Жидкие")],
            total: 2,
            page: 1,
            limit: 20,
        });
        let before = state.rows();

        assert!(state.patch("2", |m| m.name = "Жидкости".into()));
        assert!(!state.patch("9", |_| {}));
        let patched = state.rows();
        assert_eq!(before[1].0, patched[1].0);
        assert_eq!(state.find("2").map(|m| m.name.as_str()), Some("Жидкости"));

        state.apply_response(PaginatedResponse {
            data: vec![item("1", "Сыпучие")],
            total: 1,
            page: 1,
            limit: 20,
        });
        assert_ne!(state.rows()[0].0, before[0].0);
    }

    #[test]
    fn search_and_page_size_reset_page() {
        let mut state: ListState<u32> = ListState::default();
        state.apply_response(response(vec![1; 20], 100));
        state.set_page(4);
        state.set_page_size(50);
        assert_eq!(state.page, 0);
        state.set_page(1);
        state.set_search("x");
        assert_eq!(state.page, 0);
    }
}
