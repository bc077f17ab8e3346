//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint and the optional `/api/*` proxy
//! with Leptos SSR rendering under a single Axum router. Hydration assets are
//! served from the site root's `/pkg` directory; `SITE_ROOT` overrides the
//! Leptos `site-root`.

pub mod proxy;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Health check plus the API proxy.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .with_state(state)
}

/// Full app: API routes, Leptos SSR pages and static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(satsjar_web::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || satsjar_web::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_path = pkg_dir(state.config.site_root.as_deref(), leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `/pkg` directory under the configured site root, else the Leptos one.
fn pkg_dir(site_root_override: Option<&Path>, leptos_site_root: &str) -> PathBuf {
    site_root_override
        .map_or_else(|| PathBuf::from(leptos_site_root), Path::to_path_buf)
        .join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
