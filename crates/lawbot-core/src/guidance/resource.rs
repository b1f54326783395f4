//! Resolution of backend resource locations (audio, PDF).

/// Turns a backend-provided resource location into an absolute URL.
///
/// Relative paths are prefixed with `base_origin` exactly once. Locations
/// that already carry an `http://` or `https://` scheme pass through
/// unchanged, so resolving an already-resolved URL is a no-op. Blank input
/// yields `None`.
pub fn resolve_resource_url(base_origin: &str, location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    if has_http_scheme(location) {
        return Some(location.to_string());
    }

    let base = base_origin.trim_end_matches('/');
    if location.starts_with('/') {
        Some(format!("{}{}", base, location))
    } else {
        Some(format!("{}/{}", base, location))
    }
}

fn has_http_scheme(location: &str) -> bool {
    let lower = location.get(..8).unwrap_or(location).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
