use serde::{Deserialize, Serialize};

/// Параметры запроса списка: `?page=1&limit=20&search=...`
///
/// `page` здесь 1-based, как его ожидает API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    /// Строит запрос из 0-based номера страницы интерфейса.
    pub fn from_ui_page(page: usize, limit: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page + 1,
            limit: limit.max(1),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
        }
    }
}

/// Конверт ответа любого списочного эндпоинта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
}

fn first_page() -> usize {
    1
}

impl<T> PaginatedResponse<T> {
    /// Количество страниц для этого ответа (минимум одна)
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.limit.max(self.data.len()))
    }
}

/// Количество страниц: `ceil(total / page_size)`, но не меньше 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(5, 0), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(101, 25), 5);
    }

    #[test]
    fn query_converts_ui_page_and_drops_blank_search() {
        let q = ListQuery::from_ui_page(0, 25, "   ");
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 25);
        assert_eq!(q.search, None);

        let q = ListQuery::from_ui_page(3, 0, " Cement ");
        assert_eq!(q.page, 4);
        assert_eq!(q.limit, 1);
        assert_eq!(q.search.as_deref(), Some("Cement"));
    }

    #[test]
    fn response_envelope_tolerates_missing_paging_fields() {
        let json = r#"{"data":[1,2,3],"total":7}"#;
        let resp: PaginatedResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data, vec![1, 2, 3]);
        assert_eq!(resp.page, 1);
        assert_eq!(resp.limit, 0);
        assert_eq!(resp.total_pages(), 3);
    }
}
