use super::{RunConfig, DEFAULT_BASE_DIR, DEFAULT_ID_PREFIX, DEFAULT_OUTPUT_FILE};
use crate::domain::model::MenuSource;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    /// Omitted means the built-in page list.
    pub sources: Option<Vec<MenuSource>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub base_dir: Option<String>,
    pub file: Option<String>,
    pub id_prefix: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${MENU_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn into_run_config(self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            base_dir: self.output.base_dir.unwrap_or_else(|| DEFAULT_BASE_DIR.to_string()),
            output_file: self.output.file.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
            id_prefix: self
                .output
                .id_prefix
                .unwrap_or_else(|| DEFAULT_ID_PREFIX.to_string()),
            sources: self.sources.unwrap_or(defaults.sources),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_run_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[output]
base_dir = "pages/benes"
file = "menu.json"
id_prefix = "benes"

[[sources]]
label = "Dinner"
path = "dinner.html"

[[sources]]
label = "Happy Hour"
path = "hh.html"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap().into_run_config();

        assert_eq!(config.base_dir, "pages/benes");
        assert_eq!(config.output_file, "menu.json");
        assert_eq!(config.id_prefix, "benes");
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[1], MenuSource::new("Happy Hour", "hh.html"));
    }

    #[test]
    fn test_empty_toml_falls_back_to_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap().into_run_config();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_EXTRACT_TEST_DIR", "/srv/menus");

        let toml_content = r#"
[output]
base_dir = "${MENU_EXTRACT_TEST_DIR}/southfork"
file = "${MENU_EXTRACT_UNSET_VAR}.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.base_dir.as_deref(), Some("/srv/menus/southfork"));
        assert_eq!(config.output.file.as_deref(), Some("${MENU_EXTRACT_UNSET_VAR}.json"));

        std::env::remove_var("MENU_EXTRACT_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = TomlConfig::from_toml_str("[output\nbase_dir = 1").unwrap_err();
        assert!(matches!(err, EtlError::TomlError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
id_prefix = "Not A Slug"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[sources]]\nlabel = \"Kids\"\npath = \"kids.html\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.sources.unwrap(), vec![MenuSource::new("Kids", "kids.html")]);
    }
}
