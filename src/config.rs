/// Default API base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// API base URL, overridable at build time through `FINANCAS_API_URL`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("FINANCAS_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_removed() {
        assert_eq!(normalize_base_url("http://api.local/"), "http://api.local");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        assert_eq!(normalize_base_url("  "), DEFAULT_API_BASE_URL);
    }
}
