// GET /shopping-search

use super::{ProxyError, ProxyState, clamped_param, forward, required_param};
use crate::log_info;
use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use strum::{Display, EnumString, IntoStaticStr};

pub const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
pub const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

const DEFAULT_DISPLAY: u32 = 20;
const MAX_DISPLAY: u32 = 100;
const DEFAULT_START: u32 = 1;
const MAX_START: u32 = 1000;

/// Raw query string. Everything is optional so bad input gets our own 400.
#[derive(Debug, Default, Deserialize)]
pub struct ShoppingParams {
    pub query: Option<String>,
    pub display: Option<String>,
    pub start: Option<String>,
    pub sort: Option<String>,
    pub diag: Option<String>,
}

impl ShoppingParams {
    fn wants_diagnostics(&self) -> bool {
        self.diag.as_deref().map(str::trim) == Some("1")
    }
}

/// Result ordering understood by the shopping API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Relevance
    #[default]
    Sim,
    /// Newest first
    Date,
    /// Price ascending
    Asc,
    /// Price descending
    Dsc,
}

/// A validated shopping search, ready to forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingRequest {
    pub query: String,
    pub display: u32,
    pub start: u32,
    pub sort: SortOrder,
}

impl ShoppingRequest {
    pub fn from_params(params: &ShoppingParams) -> Result<Self, ProxyError> {
        let query = required_param(params.query.as_deref())
            .ok_or_else(|| ProxyError::BadRequest("query is required".to_string()))?;

        Ok(Self {
            query: query.to_string(),
            display: clamped_param(params.display.as_deref(), DEFAULT_DISPLAY, 1, MAX_DISPLAY),
            start: clamped_param(params.start.as_deref(), DEFAULT_START, 1, MAX_START),
            sort: params
                .sort
                .as_deref()
                .and_then(|s| SortOrder::from_str(s.trim()).ok())
                .unwrap_or_default(),
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("display", self.display.to_string()),
            ("start", self.start.to_string()),
            ("sort", self.sort.to_string()),
        ]
    }
}

/// Credential presence report for `diag=1`. Carries lengths, never values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingDiagnostics {
    pub has_client_id: bool,
    pub has_client_secret: bool,
    pub client_id_length: usize,
    pub client_secret_length: usize,
}

impl ShoppingDiagnostics {
    pub fn from_state(state: &ProxyState) -> Self {
        let id = state.credentials.shopping_client_id.as_deref();
        let secret = state.credentials.shopping_client_secret.as_deref();
        Self {
            has_client_id: id.is_some(),
            has_client_secret: secret.is_some(),
            client_id_length: id.map_or(0, |v| v.chars().count()),
            client_secret_length: secret.map_or(0, |v| v.chars().count()),
        }
    }
}

pub async fn shopping_search(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<ShoppingParams>,
) -> Result<Json<Value>, ProxyError> {
    if params.wants_diagnostics() {
        let diag = ShoppingDiagnostics::from_state(&state);
        return Ok(Json(json!(diag)));
    }

    let Some((client_id, client_secret)) = state.credentials.shopping() else {
        let diag = ShoppingDiagnostics::from_state(&state);
        return Err(ProxyError::MissingCredentials {
            message: "missing shopping credentials".to_string(),
            detail: json!(diag),
        });
    };

    let request = ShoppingRequest::from_params(&params)?;
    log_info!(
        "Forwarding shopping search (display {}, start {}, sort {})",
        request.display,
        request.start,
        request.sort
    );

    let upstream = state
        .client
        .get(&state.upstream.shopping_url)
        .query(&request.query_pairs())
        .header(CLIENT_ID_HEADER, client_id)
        .header(CLIENT_SECRET_HEADER, client_secret);

    forward(upstream, "shopping search").await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, UpstreamConfig};
    use std::time::Duration;

    fn params(query: Option<&str>, display: Option<&str>, start: Option<&str>, sort: Option<&str>) -> ShoppingParams {
        ShoppingParams {
            query: query.map(str::to_string),
            display: display.map(str::to_string),
            start: start.map(str::to_string),
            sort: sort.map(str::to_string),
            diag: None,
        }
    }

    #[test]
    fn test_defaults() {
        let request = ShoppingRequest::from_params(&params(Some("camera"), None, None, None)).unwrap();
        assert_eq!(
            request,
            ShoppingRequest {
                query: "camera".to_string(),
                display: 20,
                start: 1,
                sort: SortOrder::Sim,
            }
        );
    }

    #[test]
    fn test_clamps_and_sort_fallback() {
        let request =
            ShoppingRequest::from_params(&params(Some("lens"), Some("500"), Some("0"), Some("DSC"))).unwrap();
        assert_eq!(request.display, 100);
        assert_eq!(request.start, 1);
        assert_eq!(request.sort, SortOrder::Dsc);

        let request =
            ShoppingRequest::from_params(&params(Some("lens"), None, Some("5000"), Some("price"))).unwrap();
        assert_eq!(request.start, 1000);
        assert_eq!(request.sort, SortOrder::Sim);
    }

    #[test]
    fn test_missing_query_is_bad_request() {
        let err = ShoppingRequest::from_params(&params(Some("  "), None, None, None)).unwrap_err();
        assert!(matches!(err, ProxyError::BadRequest(_)));
        assert_eq!(err.to_string(), "query is required");
    }

    #[test]
    fn test_query_pairs() {
        let request = ShoppingRequest::from_params(&params(Some("tent"), Some("5"), Some("11"), Some("date"))).unwrap();
        assert_eq!(
            request.query_pairs(),
            vec![
                ("query", "tent".to_string()),
                ("display", "5".to_string()),
                ("start", "11".to_string()),
                ("sort", "date".to_string()),
            ]
        );
    }

    #[test]
    fn test_diagnostics_report_lengths_only() {
        let state = ProxyState::new(
            UpstreamConfig::default(),
            Credentials {
                shopping_client_id: Some("abcd".to_string()),
                shopping_client_secret: None,
                video_api_key: None,
            },
            Duration::from_secs(1),
        )
        .unwrap();

        let diag = ShoppingDiagnostics::from_state(&state);
        assert_eq!(
            diag,
            ShoppingDiagnostics {
                has_client_id: true,
                has_client_secret: false,
                client_id_length: 4,
                client_secret_length: 0,
            }
        );
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"clientIdLength\":4"));
        assert!(!json.contains("abcd"));
    }
}
