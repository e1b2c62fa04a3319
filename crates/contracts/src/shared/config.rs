use serde::Deserialize;

use super::pagination::MIN_BUTTONS;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    #[serde(default = "default_max_buttons")]
    pub max_buttons: usize,
}

fn default_base_url() -> String {
    "https://ecommerce.sidhwanitechnologies.com".to_string()
}

fn default_api_key() -> String {
    "ecommerceapp".to_string()
}

fn default_items_per_page() -> usize {
    20
}

fn default_max_buttons() -> usize {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            max_buttons: default_max_buttons(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://ecommerce.sidhwanitechnologies.com"
api_key = "ecommerceapp"

[pagination]
items_per_page = 20
max_buttons = 12
"#;

impl ConsoleConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration
    ///
    /// Uses `override_toml` when given (e.g. a `config.toml` served next to
    /// the bundle), otherwise falls back to the embedded default.
    pub fn load(override_toml: Option<&str>) -> anyhow::Result<Self> {
        match override_toml {
            Some(contents) => {
                log::info!("Loading console config from override");
                Self::from_toml_str(contents)
            }
            None => {
                log::info!("Using default embedded configuration");
                Self::from_toml_str(DEFAULT_CONFIG)
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            anyhow::bail!("api.base_url must start with http:// or https://");
        }
        if self.pagination.items_per_page == 0 {
            anyhow::bail!("pagination.items_per_page must be positive");
        }
        if self.pagination.max_buttons < MIN_BUTTONS {
            anyhow::bail!("pagination.max_buttons must be at least {}", MIN_BUTTONS);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::load(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api.api_key, "ecommerceapp");
        assert_eq!(config.pagination.max_buttons, 12);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ConsoleConfig::load(Some(
            r#"
[api]
base_url = "http://localhost:8080"
"#,
        ))
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.api_key, "ecommerceapp");
        assert_eq!(config.pagination.items_per_page, 20);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ConsoleConfig::from_toml_str("[api]\nbase_url = \"\"").is_err());
        assert!(ConsoleConfig::from_toml_str("[api]\nbase_url = \"ftp://x\"").is_err());
        assert!(ConsoleConfig::from_toml_str("[pagination]\nitems_per_page = 0").is_err());
        assert!(ConsoleConfig::from_toml_str("[pagination]\nmax_buttons = 4").is_err());
        assert!(ConsoleConfig::from_toml_str("not toml at all = = =").is_err());
    }
}
