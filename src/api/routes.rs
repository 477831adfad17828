use axum::{http::Method, routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::api::handlers::{self, AppState};
use crate::store::traits::Store;

/// Blanket CORS policy covering every route: any origin (mirrored back
/// rather than wildcarded, so credentials stay allowed), the usual
/// methods, any requested headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router<S: Store + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Curriculum queries - all read-only
        .route("/branches", get(handlers::list_branches::<S>))
        .route("/branch/:branch_id", get(handlers::list_branch_semesters::<S>))
        .route(
            "/branch/:branch_id/semester/:semester_no",
            get(handlers::list_semester_subjects::<S>),
        )
        .layer(cors_layer())
}
