use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting menu extraction...");

        // Extract
        let documents = self.pipeline.extract().await?;
        tracing::info!("Read {} source pages", documents.len());

        // Transform
        let menu = self.pipeline.transform(documents).await?;
        tracing::info!(
            "Parsed {} categories with {} items",
            menu.categories.len(),
            menu.item_count()
        );

        // Load
        let summary = self.pipeline.load(menu).await?;
        tracing::info!("Output saved to: {}", summary.output_path);

        Ok(summary)
    }
}
