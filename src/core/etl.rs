use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting campsite pipeline...");

        // Extract
        tracing::info!("Extracting campsites...");
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} campsites", records.len());

        // Transform
        tracing::info!("Sorting and rendering...");
        let output = self.pipeline.transform(records)?;
        tracing::info!(
            "Rendered {} campsites as {} output(s)",
            output.ordered.len(),
            output.files.len()
        );

        // Load
        let summary = self.pipeline.load(output)?;
        for path in &summary.written {
            tracing::info!("📁 Output saved to: {}", path);
        }

        Ok(summary)
    }
}
