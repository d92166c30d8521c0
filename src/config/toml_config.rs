use crate::config::{validate_settings, DEFAULT_BUNDLE_FILENAME, DEFAULT_FORMATS};
use crate::domain::fields::{FieldAliases, FieldOverrides};
use crate::domain::model::SortOption;
use crate::domain::ports::{ConfigProvider, DatasetSource, OutputFormat};
use crate::utils::error::{CampsiteError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub dataset: DatasetConfig,
    pub view: ViewConfig,
    pub fields: FieldOverrides,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// 省略時使用內建資料集
    pub path: Option<String>,
    pub sample: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sort: SortOption,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub output_formats: Option<Vec<OutputFormat>>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    #[serde(default = "default_bundle_filename")]
    pub filename: String,
}

fn default_bundle_filename() -> String {
    DEFAULT_BUNDLE_FILENAME.to_string()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CampsiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CampsiteError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CampsiteError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 命令列參數覆蓋檔案設定
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            self.dataset.path = Some(input.clone());
            self.dataset.sample = false;
        }
        if cli.sample {
            self.dataset.sample = true;
        }
        if let Some(sort) = cli.sort {
            tracing::info!("🔧 Sort overridden to: {}", sort);
            self.view.sort = sort;
        }
        if !cli.format.is_empty() {
            self.load.output_formats = Some(cli.format.clone());
        }
        if let Some(path) = &cli.output_path {
            self.load.output_path = Some(path.clone());
        }
        if cli.zip {
            let compression = self.load.compression.get_or_insert_with(|| CompressionConfig {
                enabled: true,
                filename: default_bundle_filename(),
            });
            compression.enabled = true;
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn dataset(&self) -> DatasetSource {
        if self.dataset.sample {
            return DatasetSource::Sample;
        }
        match &self.dataset.path {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Bundled,
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.load.output_path.as_deref()
    }

    fn sort_option(&self) -> SortOption {
        self.view.sort
    }

    fn output_formats(&self) -> &[OutputFormat] {
        self.load.output_formats.as_deref().unwrap_or(DEFAULT_FORMATS)
    }

    fn field_aliases(&self) -> FieldAliases {
        FieldAliases::with_overrides(&self.fields)
    }

    fn bundle_filename(&self) -> Option<&str> {
        self.load
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.fields.validate()?;
        validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::Field;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.dataset(), DatasetSource::Bundled);
        assert_eq!(config.sort_option(), SortOption::NameAsc);
        assert_eq!(config.output_formats(), DEFAULT_FORMATS);
        assert_eq!(config.bundle_filename(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[dataset]
path = "data/campings.json"

[view]
sort = "places-desc"

[fields]
name = ["title", "Nombre"]

[load]
output_path = "./test-output"
output_formats = ["text", "csv", "json"]

[load.compression]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.dataset(),
            DatasetSource::File("data/campings.json".to_string())
        );
        assert_eq!(config.sort_option(), SortOption::PlacesDesc);
        assert_eq!(
            config.output_formats(),
            [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json]
        );
        assert_eq!(config.bundle_filename(), Some("campsites.zip"));
        assert_eq!(config.field_aliases().keys(Field::Name), ["title", "Nombre"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_sort_is_parse_error() {
        let err = TomlConfig::from_toml_str("[view]\nsort = \"by-size\"\n").unwrap_err();
        assert!(matches!(err, CampsiteError::ConfigParseError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAMPSITE_TEST_DATA_DIR", "/srv/data");

        let toml_content = r#"
[dataset]
path = "${CAMPSITE_TEST_DATA_DIR}/campings.json"

[load]
output_path = "${CAMPSITE_TEST_UNSET_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.dataset.path.as_deref(),
            Some("/srv/data/campings.json")
        );
        assert_eq!(
            config.load.output_path.as_deref(),
            Some("${CAMPSITE_TEST_UNSET_DIR}")
        );

        std::env::remove_var("CAMPSITE_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let missing_output = TomlConfig::from_toml_str(
            r#"
[load]
output_formats = ["csv"]
"#,
        )
        .unwrap();
        assert!(missing_output.validate().is_err());

        let bad_bundle = TomlConfig::from_toml_str(
            r#"
[load]
output_path = "./out"

[load.compression]
enabled = true
filename = "campsites.tar"
"#,
        )
        .unwrap();
        assert!(bad_bundle.validate().is_err());

        let empty_alias = TomlConfig::from_toml_str("[fields]\nplaces = []\n").unwrap();
        assert!(empty_alias.validate().is_err());

        let no_formats = TomlConfig::from_toml_str("[load]\noutput_formats = []\n").unwrap();
        assert!(no_formats.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[dataset]\nsample = true\n\n[view]\nsort = \"name-desc\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dataset(), DatasetSource::Sample);
        assert_eq!(config.sort_option(), SortOption::NameDesc);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str(
            r#"
[dataset]
path = "from-file.json"

[view]
sort = "name-desc"
"#,
        )
        .unwrap();
        let cli = crate::config::CliConfig::parse_from([
            "campsite-etl",
            "--sort",
            "places-desc",
            "--output-path",
            "./out",
            "--zip",
        ]);

        config.apply_overrides(&cli);

        assert_eq!(config.dataset(), DatasetSource::File("from-file.json".to_string()));
        assert_eq!(config.sort_option(), SortOption::PlacesDesc);
        assert_eq!(config.output_path(), Some("./out"));
        assert_eq!(config.bundle_filename(), Some("campsites.zip"));
    }
}
