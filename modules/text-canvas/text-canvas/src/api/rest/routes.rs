use std::sync::Arc;

use axum::routing::{get, put};
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::{CanvasService, SettingsService};

pub fn register_routes(
    router: Router,
    settings: Arc<SettingsService>,
    canvases: Arc<CanvasService>,
) -> Router {
    router
        .route(
            "/api/settings",
            get(handlers::list_settings).post(handlers::create_settings),
        )
        .route("/api/settings/default", get(handlers::get_default_settings))
        .route(
            "/api/settings/set-default/{settings_id}",
            put(handlers::set_default_settings),
        )
        .route(
            "/api/settings/{settings_id}",
            put(handlers::update_settings).delete(handlers::delete_settings),
        )
        .route(
            "/api/canvas",
            get(handlers::list_canvases).post(handlers::generate_canvas),
        )
        .route("/api/canvas/{canvas_id}/accept", put(handlers::accept_canvas))
        .route(
            "/api/canvas/{canvas_id}/complete",
            put(handlers::complete_canvas),
        )
        .layer(Extension(settings))
        .layer(Extension(canvases))
}
