//! Same-origin forwarding to the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api/*` and `/uploads/*` are
//! replayed against the upstream origin with method, path, query, body and
//! end-to-end headers intact, so the upstream session cookie is set and sent
//! as if the browser talked to it directly.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or failing upstream becomes a 502 carrying the same
//! `{success,message}` envelope the content API uses, so the client's
//! envelope parsing applies unchanged. Oversized request bodies are rejected
//! by the body-limit layer before reaching this module.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::state::ProxyState;

pub const UPSTREAM_UNAVAILABLE: &str = "上游服务不可用";

/// Connection-scoped headers that must not be forwarded in either direction.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy failure");
        let body = serde_json::json!({ "success": false, "message": UPSTREAM_UNAVAILABLE });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Upstream URL for an incoming request: origin + original path and query.
pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path}", upstream.trim_end_matches('/'))
}

/// Copy headers, dropping hop-by-hop ones, anything named by `Connection`,
/// and the fields this side recomputes (`host`, `content-length`).
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let named_by_connection: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name)
            || *name == header::HOST
            || *name == header::CONTENT_LENGTH
            || named_by_connection.iter().any(|n| n == name.as_str())
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Replay one request against the upstream and relay its answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the upstream cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    tracing::debug!(%method, %url, bytes = body.len(), "forwarding");

    let upstream = state
        .client
        .request(method, &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let payload = upstream.bytes().await?;

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
