//! Форматирование чисел для таблиц и форм

/// Число с разделителем тысяч (пробел) и заданным количеством знаков
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма в сумах: целое с разделителем тысяч
pub fn format_money(value: f64) -> String {
    format!("{} сўм", format_number_with_decimals(value, 0))
}

/// Количество: до трёх знаков, без хвостовых нулей
pub fn format_quantity(value: f64) -> String {
    let s = format_number_with_decimals(value, 3);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Разбор числа из поля ввода: пробелы игнорируются, запятая = точка
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1 234 567");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2500000.0), "2 500 000 сўм");
        assert_eq!(format_money(999.4), "999 сўм");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(1000.0), "1 000");
        assert_eq!(format_quantity(0.125), "0.125");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1 250 000"), Some(1250000.0));
        assert_eq!(parse_number("12,5"), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
    }
}
