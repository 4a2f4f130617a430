//! Caller identification for rate limiting

use once_cell::sync::Lazy;
use regex::Regex;

const UNKNOWN: &str = "unknown";
const MAX_CLIENT_ID_CHARS: usize = 128;

static CLIENT_ID_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-:.@]+$").ok());

/// Who is calling, as far as the gateway can tell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    client_id: Option<String>,
    network_address: String,
}

impl CallerIdentity {
    /// Resolve from raw request hints.
    ///
    /// The network address is the first `X-Forwarded-For` hop, then
    /// `X-Real-IP`, then the peer address, then `"unknown"`. Malformed client
    /// ids are ignored.
    pub fn from_parts(
        client_id: Option<&str>,
        forwarded_for: Option<&str>,
        real_ip: Option<&str>,
        peer: Option<&str>,
    ) -> Self {
        let forwarded = forwarded_for.and_then(|value| value.split(',').next());
        let network_address = [forwarded, real_ip, peer]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(UNKNOWN)
            .to_string();

        Self {
            client_id: client_id.map(str::trim).filter(|id| is_valid_client_id(id)).map(str::to_string),
            network_address,
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn network_address(&self) -> &str {
        &self.network_address
    }

    /// Identifier for the AI policy: client id when present, else address
    pub fn ai_identifier(&self) -> &str {
        self.client_id.as_deref().unwrap_or(&self.network_address)
    }
}

fn is_valid_client_id(id: &str) -> bool {
    !id.is_empty()
        && id.chars().count() <= MAX_CLIENT_ID_CHARS
        && CLIENT_ID_RE.as_ref().is_some_and(|re| re.is_match(id))
}
