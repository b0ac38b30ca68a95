//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything the browser needs from a single origin:
//! the forwarded content API (`/api/*`), forwarded attachment downloads
//! (`/uploads/*`), the compiled WASM bundle (`/pkg`), and Leptos SSR for the
//! application routes.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::ProxyState;

/// Forwarded routes plus the health probe.
pub fn proxy_routes(state: ProxyState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/uploads/{*path}", get(proxy::forward))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Full host router: forwarded routes, static bundle and Leptos SSR.
pub fn app(state: ProxyState, max_body_bytes: usize, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    proxy_routes(state, max_body_bytes)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
