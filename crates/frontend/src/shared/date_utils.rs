//! Форматирование дат и времени для таблиц.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// ISO-время из API → `DD.MM.YYYY HH:MM`
///
/// Принимает RFC 3339 (`2024-03-15T14:02:26.123Z`) и время без зоны
/// (`2024-03-15T14:02:26`). Нераспознанная строка возвращается как есть.
pub fn format_datetime(value: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    value.to_string()
}

/// Дата или дата-время из API → `DD.MM.YYYY`
pub fn format_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| format_naive_date(&d))
        .unwrap_or_else(|_| value.to_string())
}

pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Значение для `<input type="date">`
pub fn to_input_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Сегодняшняя дата по часам браузера
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+05:00"), "31.12.2024 23:59");
        assert_eq!(format_datetime("2024-12-31T08:05:00"), "31.12.2024 08:05");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn input_date_round_trip() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(to_input_date(&d), "2024-02-29");
        assert_eq!(parse_input_date(" 2024-02-29 "), Some(d));
        assert_eq!(parse_input_date(""), None);
    }
}
