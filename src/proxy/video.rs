// GET /video-search

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
use strum::{Display, EnumString};

const DEFAULT_MAX_RESULTS: u32 = 12;
const MAX_RESULTS: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct VideoParams {
    pub mode: Option<String>,
    pub q: Option<String>,
    pub id: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VideoMode {
    #[default]
    Search,
    Video,
}

/// A validated video request, ready to forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoRequest {
    Search { query: String, max_results: u32 },
    Details { id: String },
}

impl VideoRequest {
    pub fn from_params(params: &VideoParams) -> Result<Self, ProxyError> {
        let mode = match required_param(params.mode.as_deref()) {
            None => VideoMode::default(),
            Some(raw) => VideoMode::from_str(raw)
                .map_err(|_| ProxyError::BadRequest(format!("unknown mode: {}", raw)))?,
        };

        match mode {
            VideoMode::Search => {
                let query = required_param(params.q.as_deref())
                    .ok_or_else(|| ProxyError::BadRequest("q is required".to_string()))?;
                Ok(VideoRequest::Search {
                    query: query.to_string(),
                    max_results: clamped_param(params.max.as_deref(), DEFAULT_MAX_RESULTS, 1, MAX_RESULTS),
                })
            }
            VideoMode::Video => {
                let id = required_param(params.id.as_deref())
                    .ok_or_else(|| ProxyError::BadRequest("id is required".to_string()))?;
                Ok(VideoRequest::Details { id: id.to_string() })
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            VideoRequest::Search { .. } => "search",
            VideoRequest::Details { .. } => "videos",
        }
    }

    /// Upstream query parameters, without the API key
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            VideoRequest::Search { query, max_results } => vec![
                ("part", "snippet".to_string()),
                ("type", "video".to_string()),
                ("q", query.clone()),
                ("maxResults", max_results.to_string()),
            ],
            VideoRequest::Details { id } => vec![
                ("part", "snippet,contentDetails,statistics".to_string()),
                ("id", id.clone()),
            ],
        }
    }
}

/// Upstream search payload. Every field is optional; absent pieces are
/// handled explicitly when reshaping.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: Option<SearchItemId>,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItemId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: Option<String>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

impl Thumbnails {
    /// Medium first, then high, then default
    fn best_url(&self) -> Option<String> {
        [&self.medium, &self.high, &self.default]
            .into_iter()
            .flatten()
            .find_map(|t| t.url.clone())
    }
}

/// One reshaped search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub thumb: Option<String>,
}

impl SearchResponse {
    /// Reshape into summaries, dropping entries without a video id
    pub fn into_summaries(self) -> Vec<VideoSummary> {
        self.items
            .into_iter()
            .filter_map(|item| {
                let id = item
                    .id
                    .and_then(|id| id.video_id)
                    .filter(|id| !id.is_empty())?;
                let snippet = item.snippet;
                let (title, channel, thumb) = match snippet {
                    Some(s) => (
                        s.title.unwrap_or_default(),
                        s.channel_title.unwrap_or_default(),
                        s.thumbnails.as_ref().and_then(Thumbnails::best_url),
                    ),
                    None => (String::new(), String::new(), None),
                };
                Some(VideoSummary {
                    id,
                    title,
                    channel,
                    thumb,
                })
            })
            .collect()
    }
}

pub async fn video_search(
    State(state): State<Arc<ProxyState>>,
    Query(params): Query<VideoParams>,
) -> Result<Json<Value>, ProxyError> {
    let Some(api_key) = state.credentials.video() else {
        return Err(ProxyError::MissingCredentials {
            message: "missing video API key".to_string(),
            detail: json!({ "hasApiKey": false }),
        });
    };

    let request = VideoRequest::from_params(&params)?;
    log_info!("Forwarding video {} request", request.path());

    let upstream = state
        .client
        .get(state.upstream.video_endpoint(request.path()))
        .query(&request.query_pairs())
        .query(&[("key", api_key)]);

    let body = forward(upstream, "video api").await?;

    match request {
        VideoRequest::Details { .. } => Ok(Json(body)),
        VideoRequest::Search { .. } => {
            let response: SearchResponse = serde_json::from_value(body)
                .map_err(|_| ProxyError::Upstream("malformed video api response".to_string()))?;
            Ok(Json(json!({ "items": response.into_summaries() })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mode: Option<&str>, q: Option<&str>, id: Option<&str>, max: Option<&str>) -> VideoParams {
        VideoParams {
            mode: mode.map(str::to_string),
            q: q.map(str::to_string),
            id: id.map(str::to_string),
            max: max.map(str::to_string),
        }
    }

    #[test]
    fn test_search_is_default_mode() {
        let request = VideoRequest::from_params(&params(None, Some("vintage camera"), None, None)).unwrap();
        assert_eq!(
            request,
            VideoRequest::Search {
                query: "vintage camera".to_string(),
                max_results: 12
            }
        );
        assert_eq!(request.path(), "search");
    }

    #[test]
    fn test_max_is_clamped() {
        let request = VideoRequest::from_params(&params(Some("search"), Some("x"), None, Some("99"))).unwrap();
        assert_eq!(
            request,
            VideoRequest::Search {
                query: "x".to_string(),
                max_results: 50
            }
        );
    }

    #[test]
    fn test_video_mode_needs_id() {
        let err = VideoRequest::from_params(&params(Some("video"), Some("ignored"), None, None)).unwrap_err();
        assert_eq!(err.to_string(), "id is required");

        let request = VideoRequest::from_params(&params(Some("video"), None, Some("abc123"), None)).unwrap();
        assert_eq!(request.path(), "videos");
        assert!(request.query_pairs().contains(&("id", "abc123".to_string())));
    }

    #[test]
    fn test_bad_mode_and_missing_query() {
        assert!(matches!(
            VideoRequest::from_params(&params(Some("channel"), Some("x"), None, None)),
            Err(ProxyError::BadRequest(_))
        ));
        assert_eq!(
            VideoRequest::from_params(&params(None, None, None, None))
                .unwrap_err()
                .to_string(),
            "q is required"
        );
    }

    #[test]
    fn test_reshape_filters_missing_ids() {
        let body = json!({
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "v1"},
                    "snippet": {
                        "title": "Film camera review",
                        "channelTitle": "Lens Lab",
                        "thumbnails": {
                            "default": {"url": "https://img/v1/default.jpg"},
                            "medium": {"url": "https://img/v1/mq.jpg"}
                        }
                    }
                },
                {"id": {"kind": "youtube#channel", "channelId": "c1"}, "snippet": {"title": "A channel"}},
                {"snippet": {"title": "no id at all"}},
                {
                    "id": {"videoId": "v2"},
                    "snippet": {"title": "Only default thumb", "thumbnails": {"default": {"url": "https://img/v2.jpg"}}}
                },
                {"id": {"videoId": "v3"}}
            ]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let summaries = response.into_summaries();

        assert_eq!(
            summaries,
            vec![
                VideoSummary {
                    id: "v1".to_string(),
                    title: "Film camera review".to_string(),
                    channel: "Lens Lab".to_string(),
                    thumb: Some("https://img/v1/mq.jpg".to_string()),
                },
                VideoSummary {
                    id: "v2".to_string(),
                    title: "Only default thumb".to_string(),
                    channel: String::new(),
                    thumb: Some("https://img/v2.jpg".to_string()),
                },
                VideoSummary {
                    id: "v3".to_string(),
                    title: String::new(),
                    channel: String::new(),
                    thumb: None,
                },
            ]
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_value(json!({"kind": "youtube#searchListResponse"})).unwrap();
        assert!(response.into_summaries().is_empty());
    }
}
