// Upstream API credentials, read from the environment only

use std::fmt;

pub const SHOPPING_CLIENT_ID_ENV: &str = "NAVER_CLIENT_ID";
pub const SHOPPING_CLIENT_SECRET_ENV: &str = "NAVER_CLIENT_SECRET";
pub const VIDEO_API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Secrets attached to upstream requests. Never serialized, never logged.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub shopping_client_id: Option<String>,
    pub shopping_client_secret: Option<String>,
    pub video_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            shopping_client_id: read_env(SHOPPING_CLIENT_ID_ENV),
            shopping_client_secret: read_env(SHOPPING_CLIENT_SECRET_ENV),
            video_api_key: read_env(VIDEO_API_KEY_ENV),
        }
    }

    /// Both shopping credentials, when both are present
    pub fn shopping(&self) -> Option<(&str, &str)> {
        Some((
            self.shopping_client_id.as_deref()?,
            self.shopping_client_secret.as_deref()?,
        ))
    }

    pub fn video(&self) -> Option<&str> {
        self.video_api_key.as_deref()
    }
}

// Blank values count as missing.
fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "set" } else { "missing" }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("shopping_client_id", &presence(&self.shopping_client_id))
            .field("shopping_client_secret", &presence(&self.shopping_client_secret))
            .field("video_api_key", &presence(&self.video_api_key))
            .finish()
    }
}
