use crate::domain::fields::FieldAliases;
use crate::domain::model::{Campsite, SortOption};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// 資料來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Dataset compiled into the binary.
    Bundled,
    /// The two fixed preview records.
    Sample,
    File(String),
}

pub trait ConfigProvider {
    fn dataset(&self) -> DatasetSource;
    /// Directory for rendered files; `None` writes nothing.
    fn output_path(&self) -> Option<&str>;
    fn sort_option(&self) -> SortOption;
    fn output_formats(&self) -> &[OutputFormat];
    fn field_aliases(&self) -> FieldAliases;
    /// ZIP bundle filename when compression is enabled.
    fn bundle_filename(&self) -> Option<&str>;
}

/// One rendered artifact of the transform phase.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFile {
    pub format: OutputFormat,
    pub filename: String,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct ViewOutput {
    pub sort: SortOption,
    pub ordered: Vec<Campsite>,
    pub files: Vec<RenderedFile>,
}

impl ViewOutput {
    pub fn rendered(&self, format: OutputFormat) -> Option<&RenderedFile> {
        self.files.iter().find(|file| file.format == format)
    }
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Campsite>>;
    fn transform(&self, data: Vec<Campsite>) -> Result<ViewOutput>;
    fn load(&self, output: ViewOutput) -> Result<LoadSummary>;
}

/// Result of the load phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadSummary {
    pub record_count: usize,
    /// Paths written to storage, empty when nothing was persisted.
    pub written: Vec<String>,
    /// Text listing for stdout, when requested.
    pub listing: Option<String>,
}
