use once_cell::sync::Lazy;
use regex::Regex;

static SENSITIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)api[_-]?key[=:\s]*['\x22]?([a-zA-Z0-9\-_.]+)['\x22]?",
        r"(?i)([?&])key=([^&\s'\x22]+)",
        r"(?i)bearer\s+([a-zA-Z0-9\-_.=]+)",
        r"(?i)token[=:\s]*['\x22]?([a-zA-Z0-9\-_.]+)['\x22]?",
        r"(?i)password[=:\s]*['\x22]?([^\s'\x22]+)['\x22]?",
        r"(?i)secret[=:\s]*['\x22]?([^\s'\x22]+)['\x22]?",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

pub struct Sanitization;

impl Sanitization {
    /// Redact credentials from text headed for a log line
    pub fn sanitize_log_data(data: &str) -> String {
        let mut sanitized = data.to_string();

        for (index, re) in SENSITIVE_PATTERNS.iter().enumerate() {
            // keep the `?`/`&` separator of query-string keys
            let replacement = if index == 1 {
                "${1}key=***REDACTED***"
            } else {
                "***REDACTED***"
            };
            sanitized = re.replace_all(&sanitized, replacement).to_string();
        }

        sanitized
    }

    /// Cut text to at most `max_chars` characters, marking the cut
    pub fn truncate(data: &str, max_chars: usize) -> String {
        match data.char_indices().nth(max_chars) {
            Some((byte_index, _)) => format!("{}...[truncated]", &data[..byte_index]),
            None => data.to_string(),
        }
    }

    /// Sanitized and truncated form used for AI payloads and upstream errors
    pub fn for_log(data: &str, max_chars: usize) -> String {
        Self::truncate(&Self::sanitize_log_data(data), max_chars)
    }
}
