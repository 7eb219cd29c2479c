//! HTTP tablebase server.

pub mod config;
pub mod context;
pub mod error;
pub mod response;
pub mod routes;
pub mod tablebase;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::context::AppContext;

/// Build the router. Every path is answered by the probe handler.
pub fn app(ctx: AppContext) -> Router {
    let cors = ctx.cors;

    let app = Router::new()
        .route("/", get(routes::probe::get_probe))
        .fallback(routes::probe::get_probe)
        .layer(Extension(ctx));

    if cors {
        app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
    } else {
        app
    }
}
