//! Greeting endpoint: personalised when a name arrives in the query string or body.

use crate::codec::decode_json;
use crate::error::AppError;
use axum::{body::Bytes, extract::Query};
use serde::Deserialize;

const ANONYMOUS_GREETING: &str = "This HTTP triggered function executed successfully. Pass a name in the query string or in the request body for a personalized response.";

#[derive(Debug, Default, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

pub fn greeting_message(name: Option<&str>) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => format!(
            "Hello, {}. This HTTP triggered function executed successfully.",
            name
        ),
        None => ANONYMOUS_GREETING.to_string(),
    }
}

/// GET or POST /greeting. The query parameter wins over the body's `name`.
pub async fn greet(
    Query(params): Query<GreetingParams>,
    body: Bytes,
) -> Result<String, AppError> {
    tracing::info!("greeting requested");
    let name = match params.name {
        Some(name) => Some(name),
        None => decode_json::<GreetingParams>(&body)?.and_then(|b| b.name),
    };
    Ok(greeting_message(name.as_deref()))
}
