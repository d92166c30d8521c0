use crate::core::render::{render_csv, render_json, render_text, render_tsv};
use crate::core::repository::CampsiteRepository;
use crate::core::sort_view::CampsiteView;
use crate::core::{
    Campsite, ConfigProvider, DatasetSource, LoadSummary, OutputFormat, Pipeline, RenderedFile,
    Storage, ViewOutput,
};
use crate::domain::model::sample_campsites;
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

const OUTPUT_STEM: &str = "campsites";

pub struct CampsitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    repository: CampsiteRepository,
}

impl<S: Storage, C: ConfigProvider> CampsitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let repository = CampsiteRepository::new(config.field_aliases());
        Self {
            storage,
            config,
            repository,
        }
    }

    fn render(&self, format: OutputFormat, ordered: &[Campsite]) -> Result<RenderedFile> {
        let sort = self.config.sort_option();
        let contents = match format {
            OutputFormat::Text => render_text(ordered, sort),
            OutputFormat::Csv => render_csv(ordered)?,
            OutputFormat::Tsv => render_tsv(ordered)?,
            OutputFormat::Json => render_json(ordered, sort, Utc::now())?,
        };
        Ok(RenderedFile {
            format,
            filename: format!("{}.{}", OUTPUT_STEM, format.extension()),
            contents,
        })
    }

    fn bundle(&self, files: &[RenderedFile]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for file in files {
            zip.start_file::<_, ()>(file.filename.as_str(), FileOptions::default())?;
            zip.write_all(file.contents.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CampsitePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Campsite>> {
        match self.config.dataset() {
            DatasetSource::Bundled => self.repository.bundled(),
            DatasetSource::Sample => {
                tracing::debug!("Using preview sample records");
                Ok(sample_campsites())
            }
            DatasetSource::File(path) => self.repository.load(&self.storage, &path),
        }
    }

    fn transform(&self, data: Vec<Campsite>) -> Result<ViewOutput> {
        let sort = self.config.sort_option();
        let mut view = CampsiteView::with_sort(data, sort);
        let ordered = view.ordered().to_vec();

        let files = self
            .config
            .output_formats()
            .iter()
            .map(|&format| self.render(format, &ordered))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Rendered {} output files sorted by {}", files.len(), sort);

        Ok(ViewOutput {
            sort,
            ordered,
            files,
        })
    }

    fn load(&self, output: ViewOutput) -> Result<LoadSummary> {
        let listing = output
            .rendered(OutputFormat::Text)
            .map(|file| file.contents.clone());

        let mut written = Vec::new();
        if let Some(dir) = self.config.output_path() {
            let dir = Path::new(dir);
            match self.config.bundle_filename() {
                Some(bundle_name) => {
                    let data = self.bundle(&output.files)?;
                    let path = dir.join(bundle_name).to_string_lossy().into_owned();
                    tracing::debug!("Writing ZIP bundle ({} bytes) to {}", data.len(), path);
                    self.storage.write_file(&path, &data)?;
                    written.push(path);
                }
                None => {
                    for file in &output.files {
                        let path = dir.join(&file.filename).to_string_lossy().into_owned();
                        tracing::debug!("Writing {} to {}", file.format, path);
                        self.storage.write_file(&path, file.contents.as_bytes())?;
                        written.push(path);
                    }
                }
            }
        }

        Ok(LoadSummary {
            record_count: output.ordered.len(),
            written,
            listing,
        })
    }
}
