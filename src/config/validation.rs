use crate::config::types::{Config, LanguageEntry, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_languages(&config.languages)?;
    Ok(())
}

/// Validates the site URL pair
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_base_url("local-base-url", &config.local_base_url)?;
    validate_base_url("remote-base-url", &config.remote_base_url)?;
    Ok(())
}

/// Validates one base URL: must parse and use an http(s) scheme
fn validate_base_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must use an http or https scheme, got '{}'",
            field, value
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent version cannot be empty".to_string(),
        ));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

/// Validates language entries
///
/// At least one language is required, codes must look like short language
/// identifiers, and duplicates are rejected because each code maps to one
/// index partition.
fn validate_languages(languages: &[LanguageEntry]) -> Result<(), ConfigError> {
    if languages.is_empty() {
        return Err(ConfigError::Validation(
            "at least one [[languages]] entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in languages {
        if entry.code.is_empty() {
            return Err(ConfigError::Validation(
                "language code cannot be empty".to_string(),
            ));
        }

        if !entry
            .code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ConfigError::Validation(format!(
                "language code must be lowercase alphanumeric (plus hyphens), got '{}'",
                entry.code
            )));
        }

        if !seen.insert(entry.code.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate language code '{}'",
                entry.code
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            site: SiteConfig {
                local_base_url: "http://localhost:8331/".to_string(),
                remote_base_url: "https://docs.example.org/latest/".to_string(),
            },
            user_agent: UserAgentConfig {
                name: "docsift".to_string(),
                version: "1.0".to_string(),
                contact_url: "https://example.org/about".to_string(),
            },
            languages: vec![
                LanguageEntry {
                    code: "en".to_string(),
                },
                LanguageEntry {
                    code: "es".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = valid_config();
        config.site.local_base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = valid_config();
        config.site.remote_base_url = "ftp://docs.example.org/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_user_agent_name() {
        let mut config = valid_config();
        config.user_agent.name = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_no_languages() {
        let mut config = valid_config();
        config.languages.clear();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_uppercase_language_code_rejected() {
        let mut config = valid_config();
        config.languages[0].code = "EN".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_language_code_rejected() {
        let mut config = valid_config();
        config.languages[1].code = "en".to_string();
        assert!(validate(&config).is_err());
    }
}
