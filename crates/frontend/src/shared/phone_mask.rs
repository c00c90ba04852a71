//! Маска узбекского номера телефона: `+998 (XX) XXX-XX-XX`.

pub const COUNTRY_CODE: &str = "998";

/// Код оператора (2) + номер абонента (7)
pub const LOCAL_DIGITS: usize = 9;

/// Локальные цифры номера из произвольного ввода.
///
/// Код страны отрезается, если ввод начинается с `+998` (так выглядит
/// уже замаскированное значение) или если цифр больше девяти и они
/// начинаются с `998` (вставка номера без плюса).
pub fn local_digits(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let has_prefix = input.trim_start().starts_with("+998")
        || (digits.len() > LOCAL_DIGITS && digits.starts_with(COUNTRY_CODE));
    let local = if has_prefix {
        &digits[COUNTRY_CODE.len()..]
    } else {
        &digits[..]
    };
    local.chars().take(LOCAL_DIGITS).collect()
}

/// Форматирует ввод по маске по мере набора. Пустой ввод: пустая строка.
pub fn format_uz_phone(input: &str) -> String {
    let digits = local_digits(input);
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::from("+998 (");
    for (i, c) in digits.chars().enumerate() {
        match i {
            2 => out.push_str(") "),
            5 | 7 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    if digits.len() == 2 {
        out.push(')');
    }
    out
}

/// Новое значение поля по предыдущему и введённому.
///
/// Если пользователь стёр только символ маски (скобку, дефис, пробел),
/// цифры не меняются и маска вернула бы тот же текст: тогда удаляем
/// последнюю цифру, чтобы Backspace работал ожидаемо.
pub fn apply_input(previous: &str, typed: &str) -> String {
    let typed_digits = local_digits(typed);
    if typed.len() < previous.len() && typed_digits == local_digits(previous) {
        let mut digits = typed_digits;
        digits.pop();
        return format_uz_phone(&digits);
    }
    format_uz_phone(typed)
}

pub fn is_complete(input: &str) -> bool {
    local_digits(input).len() == LOCAL_DIGITS
}

/// `+998XXXXXXXXX` для отправки в API; `None`, если номер неполный
pub fn to_e164(input: &str) -> Option<String> {
    let digits = local_digits(input);
    (digits.len() == LOCAL_DIGITS).then(|| format!("+{}{}", COUNTRY_CODE, digits))
}

/// Проверка поля формы: пустой номер допустим, неполный отклоняется
pub fn validate_optional(input: &str) -> Result<Option<String>, String> {
    if local_digits(input).is_empty() {
        return Ok(None);
    }
    to_e164(input)
        .map(Some)
        .ok_or_else(|| "Номер телефона должен содержать 9 цифр после +998".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_progressively() {
        assert_eq!(format_uz_phone(""), "");
        assert_eq!(format_uz_phone("9"), "+998 (9");
        assert_eq!(format_uz_phone("90"), "+998 (90)");
        assert_eq!(format_uz_phone("901"), "+998 (90) 1");
        assert_eq!(format_uz_phone("90123"), "+998 (90) 123");
        assert_eq!(format_uz_phone("901234"), "+998 (90) 123-4");
        assert_eq!(format_uz_phone("9012345"), "+998 (90) 123-45");
        assert_eq!(format_uz_phone("90123456"), "+998 (90) 123-45-6");
        assert_eq!(format_uz_phone("901234567"), "+998 (90) 123-45-67");
    }

    #[test]
    fn remasking_masked_value_is_stable() {
        let masked = format_uz_phone("901234567");
        assert_eq!(format_uz_phone(&masked), masked);

        let partial = format_uz_phone("9012");
        assert_eq!(format_uz_phone(&partial), partial);
    }

    #[test]
    fn typing_after_mask_appends_digit() {
        assert_eq!(format_uz_phone("+998 (90) 123-4"), "+998 (90) 123-4");
        assert_eq!(format_uz_phone("+998 (90) 123-45"), "+998 (90) 123-45");
        assert_eq!(format_uz_phone("+998 (9"), "+998 (9");
        assert_eq!(format_uz_phone("+998 (90"), "+998 (90)");
    }

    #[test]
    fn strips_country_code_from_pasted_numbers() {
        assert_eq!(local_digits("+998901234567"), "901234567");
        assert_eq!(local_digits("998 90 123 45 67"), "901234567");
        // nine digits starting with 99 8 are a local number
        assert_eq!(local_digits("998123456"), "998123456");
    }

    #[test]
    fn caps_at_nine_local_digits() {
        assert_eq!(format_uz_phone("90123456789"), "+998 (90) 123-45-67");
        assert_eq!(local_digits("+998 (90) 123-45-678"), "901234567");
    }

    #[test]
    fn ignores_non_digits() {
        assert_eq!(format_uz_phone("abc"), "");
        assert_eq!(format_uz_phone("9a0b1"), "+998 (90) 1");
    }

    #[test]
    fn backspace_over_mask_character_removes_a_digit() {
        assert_eq!(apply_input("+998 (90)", "+998 (90"), "+998 (9");
        assert_eq!(apply_input("+998 (90) 123-4", "+998 (90) 123-"), "+998 (90) 123");
        assert_eq!(apply_input("+998 (9", "+998 ("), "");
        assert_eq!(apply_input("+998 (90) 12", "+998 (90) 1"), "+998 (90) 1");
        assert_eq!(apply_input("+998 (90) 1", "+998 (90) 12"), "+998 (90) 12");
    }

    #[test]
    fn e164_only_when_complete() {
        assert_eq!(to_e164("+998 (90) 123-45-6"), None);
        assert_eq!(
            to_e164("+998 (90) 123-45-67").as_deref(),
            Some("+998901234567")
        );
        assert!(is_complete("901234567"));
        assert!(!is_complete("90123"));
    }

    #[test]
    fn optional_validation() {
        assert_eq!(validate_optional(""), Ok(None));
        assert_eq!(validate_optional("+998 ("), Ok(None));
        assert!(validate_optional("+998 (90) 1").is_err());
        assert_eq!(
            validate_optional("+998 (71) 200-00-00"),
            Ok(Some("+998712000000".to_string()))
        );
    }
}
