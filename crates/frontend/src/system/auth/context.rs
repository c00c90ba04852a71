use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::{set_unauthorized_hook, ApiError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Идёт восстановление сессии из localStorage
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn can(&self, permission: &str) -> bool {
        self.user_info
            .as_ref()
            .map(|u| u.can(permission))
            .unwrap_or(false)
    }
}

async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    match api::get_current_user().await {
        Ok(user_info) => {
            return Some(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
                restoring: false,
            })
        }
        Err(ApiError::Unauthorized) => {}
        Err(e) => {
            log::warn!("Не удалось проверить сессию: {}", e);
            return None;
        }
    }

    // access-токен истёк: пробуем refresh
    let refresh_token = storage::get_refresh_token()?;
    let response = match api::refresh_token(refresh_token.clone()).await {
        Ok(r) => r,
        Err(e) => {
            log::info!("Refresh не удался: {}", e);
            storage::clear_tokens();
            return None;
        }
    };
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&refresh_token);

    let user_info = api::get_current_user().await.ok()?;
    Some(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(user_info),
        restoring: false,
    })
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..Default::default()
    });

    // 401 от любого запроса сбрасывает сессию
    set_unauthorized_hook(move || {
        let _ = set_auth_state.try_set(AuthState::default());
    });

    spawn_local(async move {
        let restored = restore_session().await.unwrap_or_default();
        let _ = set_auth_state.try_set(restored);
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Вход: сохраняет токены и заполняет состояние
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);
    log::info!("Вход выполнен: {}", response.user.username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    });

    Ok(())
}

/// Выход: отзыв refresh-токена (ошибки игнорируются) и очистка состояния
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Ошибка выхода: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_require_user_info() {
        let mut state = AuthState {
            access_token: Some("t".into()),
            ..Default::default()
        };
        assert!(state.is_authenticated());
        assert!(!state.can("sales.view"));

        state.user_info = Some(UserInfo {
            id: "1".into(),
            username: "kassir".into(),
            full_name: None,
            role_name: Some("Кассир".into()),
            permissions: vec!["sales.view".into()],
            is_admin: false,
        });
        assert!(state.can("sales.view"));
        assert!(!state.can("users.manage"));
    }
}
