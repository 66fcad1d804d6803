use crate::config::PickupSettings;
use crate::utils::error::{PickupError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `bean-pickup.toml` file.
///
/// ```toml
/// [site]
/// location = "http://localhost:5500/index.html"
///
/// [pickup]
/// listing_path = "products.html"
/// pickup_count = 3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub pickup: PickupSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: Option<String>,
    pub location: Option<String>,
    pub output_path: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PickupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PickupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHOP_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PickupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(location) = &self.site.location {
            validation::validate_location("site.location", location)?;
        }
        if let Some(output_path) = &self.site.output_path {
            validation::validate_non_empty_string("site.output_path", output_path)?;
        }
        self.pickup.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
name = "Bean Shop"
location = "https://beans.example/index.html"

[pickup]
container_id = "featured"
card_selector = "article.card"
pickup_count = 4
"#,
        )
        .unwrap();

        assert_eq!(config.site.name.as_deref(), Some("Bean Shop"));
        assert_eq!(config.pickup.container_id, "featured");
        assert_eq!(config.pickup.card_selector, "article.card");
        assert_eq!(config.pickup.pickup_count, 4);
        // 未指定的欄位沿用預設值
        assert_eq!(config.pickup.listing_path, "products.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.pickup, PickupSettings::default());
        assert!(config.site.location.is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("BEAN_PICKUP_TEST_HOST", "http://127.0.0.1:8080");
        let config = SiteConfig::from_toml_str(
            "[site]\nlocation = \"${BEAN_PICKUP_TEST_HOST}/index.html\"\n",
        )
        .unwrap();
        assert_eq!(
            config.site.location.as_deref(),
            Some("http://127.0.0.1:8080/index.html")
        );
    }

    #[test]
    fn test_unset_variable_is_kept() {
        let config = SiteConfig::from_toml_str(
            "[site]\nlocation = \"${BEAN_PICKUP_SURELY_UNSET}/index.html\"\n",
        )
        .unwrap();
        assert_eq!(
            config.site.location.as_deref(),
            Some("${BEAN_PICKUP_SURELY_UNSET}/index.html")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_toml_str("[pickup\n").unwrap_err();
        assert!(matches!(err, PickupError::ConfigError { .. }));
    }
}
