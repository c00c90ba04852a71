//! Реестр страниц: единственное место, где ключ страницы превращается во View.

use contracts::system::permissions::codes;
use leptos::prelude::*;

use super::labels::page_label;
use crate::domain::a001_company::ui::list::CompanyList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_material_type::ui::list::MaterialTypeList;
use crate::domain::a004_material::ui::list::MaterialList;
use crate::domain::a005_sale::ui::list::SaleList;
use crate::domain::a006_payment::ui::list::PaymentList;
use crate::domain::a007_expense::ui::list::ExpenseList;
use crate::system::actions::ui::list::ActionsListPage;
use crate::system::permissions::ui::list::PermissionsListPage;
use crate::system::roles::ui::list::RolesListPage;
use crate::system::users::ui::list::UsersListPage;

/// Страница, открываемая по умолчанию и при неизвестном `?page=`
pub const DEFAULT_PAGE: &str = "a001_company";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub key: &'static str,
    pub icon: &'static str,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        page_label(self.key).unwrap_or(self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: &'static [MenuItem],
    /// Группа видна, если у пользователя есть хотя бы одно из разрешений
    pub permissions: &'static [&'static str],
}

pub fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "Справочники",
            icon: "layers",
            items: &[
                MenuItem { key: "a001_company", icon: "building" },
                MenuItem { key: "a002_product", icon: "package" },
                MenuItem { key: "a003_material_type", icon: "layers" },
                MenuItem { key: "a004_material", icon: "box" },
            ],
            permissions: &[],
        },
        MenuGroup {
            id: "operations",
            label: "Операции",
            icon: "activity",
            items: &[
                MenuItem { key: "a005_sale", icon: "cart" },
                MenuItem { key: "a006_payment", icon: "wallet" },
                MenuItem { key: "a007_expense", icon: "receipt" },
            ],
            permissions: &[],
        },
        MenuGroup {
            id: "administration",
            label: "Администрирование",
            icon: "shield",
            items: &[
                MenuItem { key: "sys_users", icon: "users" },
                MenuItem { key: "sys_roles", icon: "shield" },
                MenuItem { key: "sys_permissions", icon: "key" },
                MenuItem { key: "sys_actions", icon: "activity" },
            ],
            permissions: &[codes::USERS_MANAGE, codes::ROLES_MANAGE, codes::ACTIONS_VIEW],
        },
    ]
}

impl MenuGroup {
    pub fn visible_for(&self, can: impl Fn(&str) -> bool) -> bool {
        self.permissions.is_empty() || self.permissions.iter().any(|p| can(p))
    }
}

/// Есть ли страница с таким ключом
pub fn is_known_page(key: &str) -> bool {
    page_label(key).is_some()
}

/// Контент страницы по ключу
pub fn render_page(key: &str) -> AnyView {
    match key {
        "a001_company" => view! { <CompanyList /> }.into_any(),
        "a002_product" => view! { <ProductList /> }.into_any(),
        "a003_material_type" => view! { <MaterialTypeList /> }.into_any(),
        "a004_material" => view! { <MaterialList /> }.into_any(),
        "a005_sale" => view! { <SaleList /> }.into_any(),
        "a006_payment" => view! { <PaymentList /> }.into_any(),
        "a007_expense" => view! { <ExpenseList /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        "sys_roles" => view! { <RolesListPage /> }.into_any(),
        "sys_permissions" => view! { <PermissionsListPage /> }.into_any(),
        "sys_actions" => view! { <ActionsListPage /> }.into_any(),
        _ => {
            log::warn!("unknown page key: {}", key);
            view! { <div class="placeholder">"Страница не найдена"</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_is_registered() {
        for group in menu_groups() {
            for item in group.items {
                assert!(is_known_page(item.key), "{} has no label", item.key);
            }
        }
        assert!(is_known_page(DEFAULT_PAGE));
    }

    #[test]
    fn admin_group_needs_any_system_permission() {
        let groups = menu_groups();
        let admin = groups.iter().find(|g| g.id == "administration").unwrap();
        assert!(!admin.visible_for(|_| false));
        assert!(admin.visible_for(|p| p == codes::ACTIONS_VIEW));
        assert!(groups[0].visible_for(|_| false));
    }
}
