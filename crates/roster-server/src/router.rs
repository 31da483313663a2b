//! Router assembly for the roster HTTP API.
//!
//! [`build_router`] wires the employee handlers to their routes with CORS and
//! tracing middleware layers, plus the legacy error-collapsing layer when the
//! state asks for it.

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// CORS is permissive (the UI may be served from any origin).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(
            "/employee",
            get(handlers::employees::list_employees)
                .post(handlers::employees::create_employee),
        )
        .route(
            "/employee/{id}",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        );

    if state.legacy_errors {
        router = router.route_layer(middleware::map_response(collapse_error_responses));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Rewrites any 4xx or 5xx response to a bodyless 500.
///
/// Clients written against the old wire contract expect a plain 500 for
/// every failure, whatever its cause. Applied as a route layer: the CORS
/// layer sits outside it and stamps its headers on the rewritten response,
/// and requests that match no route keep the router's plain 404.
async fn collapse_error_responses(response: Response) -> Response {
    if response.status().is_client_error() || response.status().is_server_error() {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    } else {
        response
    }
}
