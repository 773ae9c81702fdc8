use crate::domain::model::{OutputFormat, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Where `path` ends up, for reporting.
    fn location(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider: Send + Sync {
    /// `None` selects the bundled resource.
    fn source_path(&self) -> Option<&str>;
    /// `None` writes to stdout.
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<u8>>;
    async fn transform(&self, data: Vec<u8>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
