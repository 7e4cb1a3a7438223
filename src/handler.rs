use crate::{
    errors::echo_error::EchoError,
    models::{EchoResponse, HttpEvent},
};
use axum::{extract::State, response::Json, routing::post, Router};
use lazy_static::lazy_static;
use log::info;
use serde_json::Value;
use std::collections::HashMap;

lazy_static! {
    // Built once and shared by reference; the content never varies.
    static ref COMPUTE_TYPE_HEADERS: HashMap<String, String> = {
        let mut headers = HashMap::new();
        headers.insert("Compute-Type".to_string(), "function".to_string());
        headers
    };
}

/// The two deployed variants of the echo function: one attaches the fixed
/// `Compute-Type: function` header map to its response, the other does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    ComputeType,
    Plain,
}

pub fn router(mode: HeaderMode) -> Router {
    Router::new().route("/", post(echo)).with_state(mode)
}

type EndpointResult<T> = std::result::Result<Json<T>, EchoError>;

async fn echo(
    State(mode): State<HeaderMode>,
    Json(event): Json<HttpEvent>,
) -> EndpointResult<EchoResponse> {
    info!("Handling HTTP event {}", display_event_id(&event.event_id));

    let data = event.data.ok_or(EchoError::MalformedRequest)?;
    Ok(Json(EchoResponse {
        body: data.body,
        headers: match mode {
            HeaderMode::ComputeType => Some(&*COMPUTE_TYPE_HEADERS),
            HeaderMode::Plain => None,
        },
        status_code: 200,
    }))
}

// String ids log without quotes, everything else in its JSON rendering.
fn display_event_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
