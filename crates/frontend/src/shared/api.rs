//! HTTP-обёртка над REST API: авторизация, ошибки, типовые CRUD-вызовы.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::common::Resource;
use contracts::shared::{ListQuery, PaginatedResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::api_url;
use super::config::LOOKUP_LIMIT;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Сессия истекла, войдите снова")]
    Unauthorized,
    #[error("Сервер недоступен: {0}")]
    Network(String),
    #[error("{message} (HTTP {status})")]
    Http { status: u16, message: String },
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
    #[error("Не удалось сформировать запрос: {0}")]
    Encode(String),
}

impl ApiError {
    /// Ошибка по статусу и телу ответа. Сообщение берётся из
    /// `{"message": ...}` или `{"error": ...}`, если сервер его прислал.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            })
            .filter(|m| !m.trim().is_empty());
        let message = from_json.unwrap_or_else(|| match status {
            403 => "Недостаточно прав".to_string(),
            404 => "Запись не найдена".to_string(),
            409 => "Конфликт данных".to_string(),
            422 | 400 => "Проверьте заполнение полей".to_string(),
            _ => "Ошибка сервера".to_string(),
        });
        ApiError::Http { status, message }
    }
}

thread_local! {
    static UNAUTHORIZED_HOOK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Регистрирует реакцию на 401 (сброс состояния авторизации)
pub fn set_unauthorized_hook(hook: impl Fn() + 'static) {
    UNAUTHORIZED_HOOK.with(|h| *h.borrow_mut() = Some(Rc::new(hook)));
}

fn notify_unauthorized() {
    let hook = UNAUTHORIZED_HOOK.with(|h| h.borrow().clone());
    if let Some(hook) = hook {
        hook();
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn dispatch(label: &str, request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        log::debug!("{} -> {}", label, response.status());
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("{} -> {}", label, err);
    if err == ApiError::Unauthorized {
        storage::clear_tokens();
        notify_unauthorized();
    }
    Err(err)
}

async fn send_empty(label: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    let request = authorized(builder)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(label, request).await
}

async fn send_body<B: Serialize + ?Sized>(
    label: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request = authorized(builder)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(label, request).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_empty(&format!("GET {}", path), Request::get(&api_url(path))).await?;
    decode(response).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response =
        send_body(&format!("POST {}", path), Request::post(&api_url(path)), body).await?;
    decode(response).await
}

pub async fn post<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send_body(&format!("POST {}", path), Request::post(&api_url(path)), body).await?;
    Ok(())
}

pub async fn put<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send_body(&format!("PUT {}", path), Request::put(&api_url(path)), body).await?;
    Ok(())
}

pub async fn patch<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    send_body(&format!("PATCH {}", path), Request::patch(&api_url(path)), body).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send_empty(&format!("DELETE {}", path), Request::delete(&api_url(path))).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Ресурсы
// ---------------------------------------------------------------------------

/// `{endpoint}?page=..&limit=..&search=..`
pub fn list_path<R: Resource>(query: &ListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", R::META.endpoint, qs))
}

fn item_path<R: Resource>(id: &str) -> String {
    R::META.item_path(&urlencoding::encode(id))
}

pub async fn fetch_page<R: Resource>(query: &ListQuery) -> Result<PaginatedResponse<R>, ApiError> {
    get_json(&list_path::<R>(query)?).await
}

/// Справочник целиком для выпадающих списков
pub async fn fetch_lookup<R: Resource>() -> Result<Vec<R>, ApiError> {
    let query = ListQuery {
        page: 1,
        limit: LOOKUP_LIMIT,
        search: None,
    };
    fetch_page::<R>(&query).await.map(|page| page.data)
}

pub async fn create<R: Resource, B: Serialize>(body: &B) -> Result<(), ApiError> {
    post(R::META.endpoint, body).await
}

pub async fn update<R: Resource, B: Serialize>(id: &str, body: &B) -> Result<(), ApiError> {
    put(&item_path::<R>(id), body).await
}

pub async fn remove<R: Resource>(id: &str) -> Result<(), ApiError> {
    delete(&item_path::<R>(id)).await
}

pub async fn set_status<R: Resource, B: Serialize>(id: &str, body: &B) -> Result<(), ApiError> {
    patch(&R::META.status_path(&urlencoding::encode(id)), body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_company::Company;

    #[test]
    fn unauthorized_status_maps_to_variant() {
        assert_eq!(
            ApiError::from_response(401, r#"{"message":"expired"}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn server_message_is_surfaced() {
        let err = ApiError::from_response(409, r#"{"message":"Компания с таким ИНН уже есть"}"#);
        assert_eq!(
            err.to_string(),
            "Компания с таким ИНН уже есть (HTTP 409)"
        );
        let err = ApiError::from_response(400, r#"{"error":"name is required"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "name is required".into()
            }
        );
    }

    #[test]
    fn falls_back_to_status_text() {
        assert_eq!(
            ApiError::from_response(404, "<html>not found</html>").to_string(),
            "Запись не найдена (HTTP 404)"
        );
        assert_eq!(
            ApiError::from_response(500, r#"{"message":""}"#).to_string(),
            "Ошибка сервера (HTTP 500)"
        );
    }

    #[test]
    fn list_path_encodes_query() {
        let q = ListQuery::from_ui_page(1, 20, "Beton Servis");
        let path = list_path::<Company>(&q).unwrap();
        assert!(path.starts_with("/api/companies?"));
        assert!(path.contains("page=2"));
        assert!(path.contains("limit=20"));
        assert!(path.contains("search=Beton+Servis") || path.contains("search=Beton%20Servis"));

        let path = list_path::<Company>(&ListQuery::from_ui_page(0, 10, "")).unwrap();
        assert_eq!(path, "/api/companies?page=1&limit=10");
    }

    #[test]
    fn item_path_escapes_id() {
        assert_eq!(item_path::<Company>("a/b"), "/api/companies/a%2Fb");
    }
}
