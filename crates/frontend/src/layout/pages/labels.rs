//! Заголовки страниц. Для ресурсов берутся `list_name` из contracts.

use contracts::domain::a001_company::ENTITY_METADATA as A001;
use contracts::domain::a002_product::ENTITY_METADATA as A002;
use contracts::domain::a003_material_type::ENTITY_METADATA as A003;
use contracts::domain::a004_material::ENTITY_METADATA as A004;
use contracts::domain::a005_sale::ENTITY_METADATA as A005;
use contracts::domain::a006_payment::ENTITY_METADATA as A006;
use contracts::domain::a007_expense::ENTITY_METADATA as A007;
use contracts::system::actions::ENTITY_METADATA as SYS_ACTIONS;
use contracts::system::permissions::ENTITY_METADATA as SYS_PERMISSIONS;
use contracts::system::roles::ENTITY_METADATA as SYS_ROLES;
use contracts::system::users::ENTITY_METADATA as SYS_USERS;

/// Заголовок страницы; `None` для неизвестного ключа
pub fn page_label(key: &str) -> Option<&'static str> {
    let label = match key {
        "a001_company" => A001.list_name,
        "a002_product" => A002.list_name,
        "a003_material_type" => A003.list_name,
        "a004_material" => A004.list_name,
        "a005_sale" => A005.list_name,
        "a006_payment" => A006.list_name,
        "a007_expense" => A007.list_name,
        "sys_users" => SYS_USERS.list_name,
        "sys_roles" => SYS_ROLES.list_name,
        "sys_permissions" => SYS_PERMISSIONS.list_name,
        "sys_actions" => SYS_ACTIONS.list_name,
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_from_metadata() {
        assert_eq!(page_label("a005_sale"), Some("Продажи"));
        assert_eq!(page_label("sys_actions"), Some("Журнал действий"));
        assert_eq!(page_label("d400_monthly_summary"), None);
    }
}
