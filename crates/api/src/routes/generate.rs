use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// Mount the generation routes (nested under `/generate`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/code", post(generate::code))
        .route("/design", post(generate::design))
        .route("/image", post(generate::image))
        .route("/research", post(generate::research))
        .route("/movie", post(generate::movie))
}
