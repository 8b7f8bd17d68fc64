// Proxy error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    /// The caller sent an unusable request (400)
    #[error("{0}")]
    BadRequest(String),

    /// The server is missing credentials for the upstream API (500)
    #[error("{message}")]
    MissingCredentials { message: String, detail: Value },

    /// The upstream call failed or answered with something unusable (502)
    #[error("{0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::MissingCredentials { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ProxyError::MissingCredentials { message, detail } => {
                json!({ "error": message, "detail": detail })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProxyError::BadRequest("query is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::MissingCredentials {
                message: "missing".into(),
                detail: Value::Null
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::Upstream("quota exceeded".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_response_status() {
        let response = ProxyError::Upstream("quota exceeded".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
