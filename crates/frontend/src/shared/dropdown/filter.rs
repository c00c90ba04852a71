use contracts::enums::LabeledEnum;

/// Поле поиска появляется только когда вариантов больше этого числа
pub const SEARCH_THRESHOLD: usize = 3;

/// Вариант выбора `{value, label}`; `value` уникален в пределах списка
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<(String, String)> for SelectOption {
    fn from((value, label): (String, String)) -> Self {
        Self { value, label }
    }
}

/// Варианты перечисления статусов
pub fn enum_options<E: LabeledEnum>() -> Vec<SelectOption> {
    E::ALL
        .iter()
        .map(|v| SelectOption::new(v.as_str(), v.label()))
        .collect()
}

/// Варианты справочника: `value` из `id`, `label` из названия
pub fn options_from<T>(
    items: &[T],
    value: impl Fn(&T) -> String,
    label: impl Fn(&T) -> String,
) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| SelectOption {
            value: value(item),
            label: label(item),
        })
        .collect()
}

pub fn search_visible(searchable: bool, option_count: usize) -> bool {
    searchable && option_count > SEARCH_THRESHOLD
}

/// Варианты, чей label содержит запрос без учёта регистра.
/// Пустой запрос оставляет список целиком; пробелы ищутся как есть.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    if query.is_empty() {
        return options.to_vec();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Содержимое списка в панели
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRows {
    Options(Vec<SelectOption>),
    /// Строка «Ничего не найдено»
    NoResults,
}

pub fn panel_rows(options: &[SelectOption], query: &str) -> PanelRows {
    let visible = filter_options(options, query);
    if visible.is_empty() {
        PanelRows::NoResults
    } else {
        PanelRows::Options(visible)
    }
}

pub fn label_for<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SaleStatus;

    #[test]
    fn enum_options_keep_declaration_order() {
        let opts = enum_options::<SaleStatus>();
        assert_eq!(opts.len(), 4);
        assert_eq!(opts[0], SelectOption::new("new", "Новая"));
        assert_eq!(opts[3].value, "cancelled");
    }

    #[test]
    fn options_from_lookup_items() {
        let items = vec![("c1", "Alfa"), ("c2", "Beta")];
        let opts = options_from(&items, |i| i.0.to_string(), |i| i.1.to_string());
        assert_eq!(label_for(&opts, "c2"), Some("Beta"));
    }

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("1", "Цемент М400"),
            SelectOption::new("2", "Арматура A500"),
            SelectOption::new("3", "Краска белая"),
            SelectOption::new("4", "ЦЕМЕНТ М500"),
            SelectOption::new("5", "Sand"),
        ]
    }

    #[test]
    fn filters_case_insensitively_by_label() {
        let found = filter_options(&options(), "цемент");
        let values: Vec<_> = found.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "4"]);

        let found = filter_options(&options(), "SAN");
        assert_eq!(found, vec![SelectOption::new("5", "Sand")]);
    }

    #[test]
    fn filter_ignores_values() {
        // "2" is a value, not part of any label
        assert!(filter_options(&options(), "2").is_empty());
        assert_eq!(filter_options(&options(), "a5").len(), 1);
        assert!(filter_options(&options(), "xyz").is_empty());
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        assert_eq!(filter_options(&options(), ""), options());
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let opts = vec![SelectOption::new("1", "Sand"), SelectOption::new("2", "Sand bag")];
        let values: Vec<_> = filter_options(&opts, "sand ")
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["2"]);
        assert!(filter_options(&options(), "   ").is_empty());
    }

    #[test]
    fn panel_shows_no_results_row_only_when_nothing_matches() {
        assert_eq!(panel_rows(&options(), "xyz"), PanelRows::NoResults);
        assert_eq!(panel_rows(&[], ""), PanelRows::NoResults);
        assert_eq!(
            panel_rows(&options(), "краска"),
            PanelRows::Options(vec![SelectOption::new("3", "Краска белая")])
        );
    }

    #[test]
    fn search_box_only_for_longer_lists() {
        assert!(!search_visible(true, 3));
        assert!(search_visible(true, 4));
        assert!(!search_visible(false, 40));
    }

    #[test]
    fn label_lookup() {
        let opts = options();
        assert_eq!(label_for(&opts, "3"), Some("Краска белая"));
        assert_eq!(label_for(&opts, "42"), None);
    }
}
