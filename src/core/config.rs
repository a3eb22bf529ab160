//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Public URL of the site, used for the canonical link and `og:url`
    /// Example: https://outercamp.com
    pub site_url: Option<String>,

    /// Endpoint a deployment may attach for waitlist submissions.
    /// The page itself never calls it.
    pub waitlist_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            site_url: non_blank("SITE_URL").map(|url| url.trim_end_matches('/').to_string()),
            waitlist_endpoint: non_blank("WAITLIST_ENDPOINT"),
        }
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    /// Check if a waitlist endpoint is configured
    pub fn has_waitlist_endpoint(&self) -> bool {
        self.waitlist_endpoint.is_some()
    }

    /// Canonical URL of the landing page, when the site URL is known
    pub fn canonical_url(&self) -> Option<String> {
        self.site_url.as_ref().map(|url| format!("{url}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "https://outercamp.com/"),
            ("WAITLIST_ENDPOINT", "https://forms.example.com/waitlist"),
        ]));

        assert_eq!(config.site_url.as_deref(), Some("https://outercamp.com"));
        assert_eq!(
            config.canonical_url().as_deref(),
            Some("https://outercamp.com/")
        );
        assert!(config.has_waitlist_endpoint());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert!(!config.has_site_url());
        assert!(!config.has_waitlist_endpoint());
        assert_eq!(config.canonical_url(), None);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[("SITE_URL", "   ")]));
        assert!(!config.has_site_url());
    }
}
