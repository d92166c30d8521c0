pub mod etl;
pub mod extractor;
pub mod pipeline;
pub mod render;
pub mod repository;
pub mod sort_view;

pub use crate::domain::model::{Campsite, SortOption};
pub use crate::domain::ports::{
    ConfigProvider, DatasetSource, LoadSummary, OutputFormat, Pipeline, RenderedFile, Storage,
    ViewOutput,
};
pub use crate::utils::error::Result;
