//! Reference URL validation and normalization.

use log::warn;

/// Longest reference URL accepted, in bytes.
const MAX_URL_LENGTH: usize = 2048;

/// Validates and normalizes a reference URL.
///
/// Adds an `https://` prefix when no http(s) scheme is present, then requires
/// the result to parse as an http or https URL with a host.
///
/// Returns `None` (after logging a warning) for anything else.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        warn!("Ignoring empty reference URL");
        return None;
    }

    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else if url.contains("://") {
        warn!("Ignoring reference URL with unsupported scheme: {url}");
        return None;
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Ignoring reference URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some() => Some(normalized),
        Ok(_) => {
            warn!("Ignoring reference URL without a host: {url}");
            None
        }
        Err(e) => {
            warn!("Ignoring invalid reference URL {url}: {e}");
            None
        }
    }
}
