use axum::http::Uri;
use validator::ValidationError;

/// Hostname domain type. Once constructed, guaranteed to be trimmed, lowercase,
/// non-empty and free of a trailing `:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    /// Normalize a raw host string. Returns an error if nothing is left.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            let mut error = ValidationError::new("empty_hostname");
            error.message = Some("Hostname is empty".into());
            return Err(error);
        }
        Ok(Self(normalized))
    }

    /// Extract and normalize the host component of an `Origin` value, which
    /// may be a full origin (`https://host:port`) or a bare `host[:port]`.
    /// `Origin: null` carries no host.
    pub fn from_origin(origin: &str) -> Option<Self> {
        let origin = origin.trim();
        if origin.eq_ignore_ascii_case("null") {
            return None;
        }
        let uri = origin.parse::<Uri>().ok()?;
        Self::new(uri.host()?).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Hostname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim, lowercase, then drop a `:<digits>` suffix anchored at the end of the string.
pub fn normalize(raw: &str) -> String {
    let host = raw.trim().to_lowercase();
    match host.rsplit_once(':') {
        Some((head, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            head.to_string()
        }
        _ => host,
    }
}
