//! Route assembly: student CRUD, greeting and common probes behind body-limit and trace layers.

mod common;
mod greeting;
mod student;

pub use common::common_routes;
pub use greeting::greeting_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application router.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(greeting_routes())
        .merge(student_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
