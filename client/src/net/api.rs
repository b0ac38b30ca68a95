//! REST API helpers for the content API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`; the envelope's `success`
//! flag decides the outcome regardless of HTTP status. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Article, LoginRequest, RegisterRequest, User, VerifyRequest};
use crate::config::UPLOAD_BASE;
use crate::state::publish::PublishDraft;

/// A file picked in the browser for upload. Nothing to carry on the server.
#[cfg(feature = "hydrate")]
pub type AttachmentFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type AttachmentFile = ();

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn articles_endpoint(base: &str, category: Option<&str>) -> String {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => endpoint(base, &format!("/articles?category={}", urlencoding::encode(category))),
        None => endpoint(base, "/articles"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn article_endpoint(base: &str, id: u64) -> String {
    endpoint(base, &format!("/article/{id}"))
}

/// Download URL for a stored attachment, opened in a new browsing context.
pub fn attachment_url(filename: &str) -> String {
    format!("{}/{filename}", UPLOAD_BASE.trim_end_matches('/'))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder};
    use web_sys::RequestCredentials;

    use crate::net::error::ApiError;
    use crate::net::types::{ApiEnvelope, parse_envelope};

    pub(super) fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub(super) fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub(super) async fn send<T: serde::de::DeserializeOwned>(request: Request) -> Result<ApiEnvelope<T>, ApiError> {
        let url = request.url();
        let outcome = async {
            let resp = request.send().await?;
            let body = resp.text().await?;
            parse_envelope::<T>(&body)
        }
        .await;
        if let Err(ApiError::Transport(reason)) = &outcome {
            leptos::logging::warn!("request to {url} failed: {reason}");
        }
        outcome
    }
}

/// Fetch the signed-in user via `GET /me`.
///
/// `Ok(None)` means the server answered successfully without a user.
///
/// # Errors
///
/// Transport failures and `success:false` (the usual "not signed in" answer).
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::API_BASE, "/me");
        http::send::<User>(http::get(&url).build()?).await?.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// End the server session via `GET /logout`.
///
/// # Errors
///
/// Transport failures or a `success:false` answer.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::API_BASE, "/logout");
        http::send::<serde_json::Value>(http::get(&url).build()?)
            .await?
            .into_result()
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Exchange credentials for a session via `POST /login`.
///
/// # Errors
///
/// Transport failures, or the server's rejection (wrong password etc.).
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::API_BASE, "/login");
        http::send::<User>(http::post(&url).json(request)?).await?.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Start registration via `POST /register`; the server emails a code.
///
/// # Errors
///
/// Transport failures, or the server's rejection (name or email taken).
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::API_BASE, "/register");
        http::send::<serde_json::Value>(http::post(&url).json(request)?)
            .await?
            .into_result()
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Confirm registration with the emailed code via `POST /verify`.
///
/// # Errors
///
/// Transport failures, or the server's rejection (wrong or expired code).
pub async fn verify(request: &VerifyRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(crate::config::API_BASE, "/verify");
        http::send::<serde_json::Value>(http::post(&url).json(request)?)
            .await?
            .into_result()
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// List articles via `GET /articles`, optionally filtered by category.
///
/// # Errors
///
/// Transport failures or a `success:false` answer.
pub async fn list_articles(category: Option<String>) -> Result<Vec<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = articles_endpoint(crate::config::API_BASE, category.as_deref());
        let articles = http::send::<Vec<Article>>(http::get(&url).build()?)
            .await?
            .into_result()?;
        Ok(articles.unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category;
        Err(unavailable())
    }
}

/// Fetch one article via `GET /article/{id}`.
///
/// # Errors
///
/// Transport failures, or a rejection such as an unknown id.
pub async fn fetch_article(id: u64) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = article_endpoint(crate::config::API_BASE, id);
        http::send::<Article>(http::get(&url).build()?).await?.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Publish an article as a multipart form via `POST /admin/article/new`.
///
/// # Errors
///
/// Transport failures, or a rejection such as a non-admin session.
pub async fn publish_article(draft: &PublishDraft, attachment: Option<AttachmentFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in draft.form_fields() {
            form.append_with_str(name, value).map_err(js_err)?;
        }
        if let Some(file) = attachment {
            form.append_with_blob_and_filename("attachment", &file, &file.name())
                .map_err(js_err)?;
        }
        let url = endpoint(crate::config::API_BASE, "/admin/article/new");
        http::send::<serde_json::Value>(http::post(&url).body(form)?)
            .await?
            .into_result()
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (draft, attachment);
        Err(unavailable())
    }
}
