use crate::core::{ConfigProvider, LoadSummary, MenuDocument, Pipeline, SourceDocument, Storage};
use crate::parser::{text, StylishPriceListParser};
use crate::utils::error::Result;

/// Reads every configured page, parses it and writes one menu JSON.
pub struct MenuPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MenuPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MenuPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceDocument>> {
        let mut documents = Vec::new();

        for source in self.config.sources() {
            if !self.storage.exists(&source.path).await {
                tracing::debug!("Skipping missing page {} ({})", source.path, source.label);
                continue;
            }

            let bytes = self.storage.read_file(&source.path).await?;
            tracing::debug!("Read {} bytes from {}", bytes.len(), source.path);

            documents.push(SourceDocument {
                source: source.clone(),
                html: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(documents)
    }

    async fn transform(&self, documents: Vec<SourceDocument>) -> Result<MenuDocument> {
        let mut parser = StylishPriceListParser::new(self.config.id_prefix());
        let mut menu = MenuDocument::default();

        for document in documents {
            let html = text::decode_entities(&document.html);
            let categories = parser.parse(&html, &document.source.label, &document.source.path)?;
            tracing::debug!(
                "{}: {} categories",
                document.source.path,
                categories.len()
            );
            menu.categories.extend(categories);
        }

        Ok(menu)
    }

    async fn load(&self, document: MenuDocument) -> Result<LoadSummary> {
        let json = serde_json::to_string_pretty(&document)?;

        tracing::debug!("Writing {} bytes of JSON", json.len());
        self.storage
            .write_file(self.config.output_file(), json.as_bytes())
            .await?;

        Ok(LoadSummary {
            output_path: self.storage.display_path(self.config.output_file()),
            category_count: document.categories.len(),
            item_count: document.item_count(),
        })
    }
}
