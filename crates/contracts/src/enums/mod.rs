//! Перечисления статусов, которые API передаёт строками в snake_case.

use thiserror::Error;

/// Строка из API не соответствует ни одному варианту перечисления
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Общий интерфейс для перечислений, отображаемых в выпадающих списках
pub trait LabeledEnum: Copy + PartialEq + 'static {
    /// Все варианты в порядке отображения
    const ALL: &'static [Self];

    /// Значение, которое уходит в API
    fn as_str(&self) -> &'static str;

    /// Человекочитаемое название
    fn label(&self) -> &'static str;

    /// Пары `(value, label)` для выпадающего списка
    fn options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|v| (v.as_str().to_string(), v.label().to_string()))
            .collect()
    }
}

/// Объявляет перечисление с serde-представлением в snake_case,
/// `as_str`/`label` и разбором из строки.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $crate::enums::LabeledEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::enums::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::enums::ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::LabeledEnum::as_str(self))
            }
        }
    };
}

pub(crate) use labeled_enum;

pub mod statuses;

pub use statuses::{CompanyStatus, PaymentMethod, ProductStatus, SaleStatus, UserStatus};
