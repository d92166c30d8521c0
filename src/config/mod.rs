pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, DatasetSource, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_list, validate_path, validate_required_field,
};
#[cfg(feature = "cli")]
use crate::{domain::fields::FieldAliases, domain::model::SortOption, utils::validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMATS: &[OutputFormat] = &[OutputFormat::Text];
pub const DEFAULT_BUNDLE_FILENAME: &str = "campsites.zip";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "campsite-etl")]
#[command(about = "Load a campsite dataset and print it as a sorted listing")]
pub struct CliConfig {
    /// Dataset JSON file; the bundled dataset is used when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sort order for the listing
    #[arg(short, long, value_enum)]
    pub sort: Option<SortOption>,

    /// Output formats (comma separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub format: Vec<OutputFormat>,

    /// Directory to write rendered files into
    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Bundle rendered files into a single ZIP archive
    #[arg(long)]
    pub zip: bool,

    /// Use the two built-in preview records instead of a dataset
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn dataset(&self) -> DatasetSource {
        match (&self.input, self.sample) {
            (_, true) => DatasetSource::Sample,
            (Some(path), false) => DatasetSource::File(path.clone()),
            (None, false) => DatasetSource::Bundled,
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn sort_option(&self) -> SortOption {
        self.sort.unwrap_or_default()
    }

    fn output_formats(&self) -> &[OutputFormat] {
        if self.format.is_empty() {
            DEFAULT_FORMATS
        } else {
            &self.format
        }
    }

    fn field_aliases(&self) -> FieldAliases {
        FieldAliases::default()
    }

    fn bundle_filename(&self) -> Option<&str> {
        self.zip.then_some(DEFAULT_BUNDLE_FILENAME)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

/// 共用的設定檢查
pub fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    if let DatasetSource::File(path) = config.dataset() {
        validate_path("dataset.path", &path)?;
    }

    validate_non_empty_list("load.output_formats", config.output_formats())?;

    if let Some(path) = config.output_path() {
        validate_path("load.output_path", path)?;
    }

    if let Some(filename) = config.bundle_filename() {
        validate_file_extension("load.compression.filename", filename, &["zip"])?;
        validate_required_field("load.output_path", &config.output_path())?;
    }

    // 非 text 格式只能寫檔
    if config
        .output_formats()
        .iter()
        .any(|format| *format != OutputFormat::Text)
    {
        validate_required_field("load.output_path", &config.output_path())?;
    }

    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::CampsiteError;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["campsite-etl"]);
        assert_eq!(config.dataset(), DatasetSource::Bundled);
        assert_eq!(config.sort_option(), SortOption::NameAsc);
        assert_eq!(config.output_formats(), DEFAULT_FORMATS);
        assert_eq!(config.bundle_filename(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_parses_sort_and_formats() {
        let config = CliConfig::parse_from([
            "campsite-etl",
            "--input",
            "data/campings.json",
            "--sort",
            "places-desc",
            "--format",
            "text,csv",
            "--output-path",
            "./out",
            "--zip",
        ]);
        assert_eq!(
            config.dataset(),
            DatasetSource::File("data/campings.json".to_string())
        );
        assert_eq!(config.sort_option(), SortOption::PlacesDesc);
        assert_eq!(config.output_formats(), [OutputFormat::Text, OutputFormat::Csv]);
        assert_eq!(config.bundle_filename(), Some("campsites.zip"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_formats_require_output_path() {
        let config = CliConfig::parse_from(["campsite-etl", "--format", "json"]);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CampsiteError::MissingConfigError { ref field } if field == "load.output_path"
        ));
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        let result = CliConfig::try_parse_from(["campsite-etl", "--sample", "--input", "x.json"]);
        assert!(result.is_err());

        let config = CliConfig::parse_from(["campsite-etl", "--sample"]);
        assert_eq!(config.dataset(), DatasetSource::Sample);
    }
}
