// Log message formatting

use crate::log::LogLevel;
use chrono::Local;

pub struct LogFormatter;

impl LogFormatter {
    /// Format a log message with timestamp, level, module, and message
    pub fn format_with_timestamp(level: LogLevel, module: &str, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let sanitized_message = Self::sanitize_sensitive_info(message);
        format!(
            "[{}] [{}] [{}] {}",
            timestamp,
            level.as_str(),
            module,
            sanitized_message
        )
    }

    /// Format a log message without timestamp
    pub fn format(level: LogLevel, module: &str, message: &str) -> String {
        let sanitized_message = Self::sanitize_sensitive_info(message);
        format!("[{}] [{}] {}", level.as_str(), module, sanitized_message)
    }

    /// Mask the values that follow credential-like keys, so upstream URLs
    /// carrying `key=...` never reach the log file in clear text.
    fn sanitize_sensitive_info(message: &str) -> String {
        let mut sanitized = message.to_string();

        let sensitive_patterns = [
            "password=",
            "secret=",
            "token=",
            "key=",
            "x-naver-client-id:",
            "x-naver-client-secret:",
            "authorization:",
        ];

        for pattern in &sensitive_patterns {
            let mut search_from = 0;
            while let Some(found) = sanitized[search_from..].to_ascii_lowercase().find(pattern) {
                let mut start = search_from + found + pattern.len();
                while sanitized[start..].starts_with(' ') {
                    start += 1;
                }

                // The value runs until whitespace, a separator, a quote, or the end.
                let end = sanitized[start..]
                    .find(|c: char| {
                        c.is_whitespace() || c == ',' || c == '&' || c == '"' || c == '\''
                    })
                    .map(|i| start + i)
                    .unwrap_or(sanitized.len());

                if end > start {
                    let replacement = "*".repeat(end - start);
                    sanitized.replace_range(start..end, &replacement);
                }
                search_from = end.max(start);
            }
        }

        sanitized
    }
}
