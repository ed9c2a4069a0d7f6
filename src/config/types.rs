use serde::Deserialize;

/// Main configuration structure for docsift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// The URL pair the crawl runs against
///
/// Pages are fetched from the local base (typically a localhost mirror of the
/// built site) and attributed to the remote base (the public URL the site
/// will be deployed at). The two trees must have identical structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL the crawler fetches pages from
    #[serde(rename = "local-base-url")]
    pub local_base_url: String,

    /// Public base URL the extracted records are attributed to
    #[serde(rename = "remote-base-url")]
    pub remote_base_url: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub name: String,

    /// Version of the crawler
    pub version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// One language's documentation tree, living at `{base}/{code}/`
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    /// Short language code (e.g., "en", "es", "fr")
    pub code: String,
}
