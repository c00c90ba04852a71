use super::labeled_enum;

labeled_enum! {
    /// Статус компании-контрагента
    CompanyStatus, "company status" {
        Active => ("active", "Активна"),
        Inactive => ("inactive", "Неактивна"),
    }
}

labeled_enum! {
    /// Статус товара в каталоге
    ProductStatus, "product status" {
        Active => ("active", "В продаже"),
        Inactive => ("inactive", "Снят с продажи"),
    }
}

labeled_enum! {
    /// Жизненный цикл продажи
    SaleStatus, "sale status" {
        New => ("new", "Новая"),
        InProgress => ("in_progress", "В работе"),
        Completed => ("completed", "Завершена"),
        Cancelled => ("cancelled", "Отменена"),
    }
}

labeled_enum! {
    /// Статус учётной записи
    UserStatus, "user status" {
        Active => ("active", "Активен"),
        Blocked => ("blocked", "Заблокирован"),
    }
}

labeled_enum! {
    /// Способ оплаты
    PaymentMethod, "payment method" {
        Cash => ("cash", "Наличные"),
        Card => ("card", "Карта"),
        Transfer => ("transfer", "Перечисление"),
    }
}

impl Default for CompanyStatus {
    fn default() -> Self {
        CompanyStatus::Active
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::New
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl SaleStatus {
    /// Завершённые и отменённые продажи больше не редактируются
    pub fn is_final(&self) -> bool {
        matches!(self, SaleStatus::Completed | SaleStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::LabeledEnum;
    use std::str::FromStr;

    #[test]
    fn serde_uses_snake_case_values() {
        assert_eq!(
            serde_json::to_string(&SaleStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: SaleStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, SaleStatus::Cancelled);
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for status in SaleStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        assert_eq!(UserStatus::from_str("blocked"), Ok(UserStatus::Blocked));
        let err = UserStatus::from_str("deleted").unwrap_err();
        assert_eq!(err.kind, "user status");
        assert_eq!(err.to_string(), "unknown user status value: 'deleted'");
    }

    #[test]
    fn options_follow_declaration_order() {
        let opts = CompanyStatus::options();
        assert_eq!(
            opts,
            vec![
                ("active".to_string(), "Активна".to_string()),
                ("inactive".to_string(), "Неактивна".to_string()),
            ]
        );
    }

    #[test]
    fn final_sale_statuses() {
        assert!(SaleStatus::Completed.is_final());
        assert!(SaleStatus::Cancelled.is_final());
        assert!(!SaleStatus::New.is_final());
    }
}
