use super::serialize_err;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("malformed request: missing data envelope")]
    MalformedRequest,
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        let status = match self {
            EchoError::MalformedRequest => StatusCode::BAD_REQUEST,
        };
        (status, serialize_err(self.into())).into_response()
    }
}
