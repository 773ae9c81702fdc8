use crate::app::render;
use crate::core::repository::HiringRepository;
use crate::domain::model::TransformResult;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use std::sync::Arc;

/// Marker returned by `load` when the output went to stdout.
pub const STDOUT: &str = "-";

/// Reads the hiring document, groups it and writes the rendered result.
///
/// `R` is where the document is read from, `W` where the output is written.
pub struct HiringPipeline<R: Storage, W: Storage, C: ConfigProvider> {
    repository: Arc<HiringRepository<R>>,
    storage: W,
    config: C,
}

impl<R: Storage, W: Storage, C: ConfigProvider> HiringPipeline<R, W, C> {
    pub fn new(repository: Arc<HiringRepository<R>>, storage: W, config: C) -> Self {
        Self {
            repository,
            storage,
            config,
        }
    }

    pub fn output_file_name(&self) -> String {
        format!("hiring_items.{}", self.config.output_format().extension())
    }
}

#[async_trait::async_trait]
impl<R: Storage, W: Storage, C: ConfigProvider> Pipeline for HiringPipeline<R, W, C> {
    async fn extract(&self) -> Result<Vec<u8>> {
        tracing::debug!("Reading hiring document from {}", self.repository.path());
        self.repository.read_document().await
    }

    async fn transform(&self, data: Vec<u8>) -> Result<TransformResult> {
        let hiring_item_map = self.repository.loader().load_slice(&data)?;
        let rendered = render::render(&hiring_item_map, self.config.output_format())?;

        Ok(TransformResult {
            hiring_item_map,
            rendered,
        })
    }

    /// Writes through `W`; the returned location comes from `W`, not the config.
    async fn load(&self, result: TransformResult) -> Result<String> {
        let Some(output_path) = self.config.output_path() else {
            print!("{}", result.rendered);
            return Ok(STDOUT.to_string());
        };

        let file_name = self.output_file_name();
        self.storage
            .write_file(&file_name, result.rendered.as_bytes())
            .await?;

        tracing::debug!("Configured output directory: {}", output_path);
        Ok(self.storage.location(&file_name))
    }
}
