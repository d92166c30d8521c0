pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{
    etl::EtlEngine, extractor::RecordExtractor, pipeline::CampsitePipeline,
    repository::CampsiteRepository, sort_view::{reorder, CampsiteView},
};
pub use domain::model::{Campsite, SortOption};
pub use utils::error::{CampsiteError, Result};
