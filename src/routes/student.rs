//! Student CRUD routes.

use crate::handlers::student::{create, delete as delete_handler, get_one, list, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create).put(update))
        .route("/students/:student_id", get(get_one).delete(delete_handler))
        .with_state(state)
}
