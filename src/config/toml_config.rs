use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed inputs of the drivers that have any. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub flyweight: FlyweightSettings,
    pub observer: ObserverSettings,
    pub command: CommandSettings,
    pub proxy: ProxySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyweightSettings {
    pub circles: usize,
    pub radius: u32,
    pub seed: u64,
    pub colors: Vec<String>,
}

impl Default for FlyweightSettings {
    fn default() -> Self {
        Self {
            circles: 20,
            radius: 100,
            seed: 42,
            colors: ["Red", "Green", "Blue", "White", "Black"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverSettings {
    pub states: Vec<u32>,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            states: vec![15, 10],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    pub stock_name: String,
    pub quantity: u32,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            stock_name: "ABC".to_string(),
            quantity: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub file_name: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            file_name: "test_10mb.jpg".to_string(),
        }
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STOCK_NAME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 載入檔案（若有），否則使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.as_ref().display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_range("flyweight.circles", self.flyweight.circles, 1, 1000)?;
        validate_positive_number("flyweight.radius", self.flyweight.radius as usize, 1)?;
        validate_non_empty_list("flyweight.colors", &self.flyweight.colors)?;
        for color in &self.flyweight.colors {
            validate_non_empty_string("flyweight.colors", color)?;
        }

        validate_non_empty_list("observer.states", &self.observer.states)?;
        validate_non_empty_string("command.stock_name", &self.command.stock_name)?;
        validate_non_empty_string("proxy.file_name", &self.proxy.file_name)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.flyweight.circles, 20);
        assert_eq!(config.observer.states, vec![15, 10]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml_content = r#"
[flyweight]
circles = 5
seed = 7

[command]
quantity = 3
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.flyweight.circles, 5);
        assert_eq!(config.flyweight.seed, 7);
        assert_eq!(config.flyweight.radius, 100);
        assert_eq!(config.command.stock_name, "ABC");
        assert_eq!(config.command.quantity, 3);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PATTERN_CATALOG_TEST_STOCK", "XYZ");

        let toml_content = r#"
[command]
stock_name = "${PATTERN_CATALOG_TEST_STOCK}"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.command.stock_name, "XYZ");

        std::env::remove_var("PATTERN_CATALOG_TEST_STOCK");
    }

    #[test]
    fn test_missing_env_var_is_left_untouched() {
        let toml_content = r#"
[proxy]
file_name = "${PATTERN_CATALOG_SURELY_UNSET}"
"#;

        let config = CatalogConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.proxy.file_name, "${PATTERN_CATALOG_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let config = CatalogConfig::from_toml_str("[flyweight]\ncolors = []\n").unwrap();
        assert!(config.validate().is_err());

        let config = CatalogConfig::from_toml_str("[flyweight]\ncircles = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = CatalogConfig::from_toml_str("[proxy]\nfile_name = \" \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CatalogConfig::from_toml_str("[flyweight\n").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError { .. }));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let err = CatalogConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[observer]\nstates = [1, 2, 3]\n")
            .unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.observer.states, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = CatalogConfig::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }
}
