//! Greeting route (GET and POST).

use crate::handlers::greeting::greet;
use axum::{routing::get, Router};

pub fn greeting_routes() -> Router {
    Router::new().route("/greeting", get(greet).post(greet))
}
