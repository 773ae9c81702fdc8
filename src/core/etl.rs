use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order. Returns where the output went.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting hiring list load");
        self.monitor.log_stats("start");

        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} bytes", raw_data.len());
        self.monitor.log_stats("extract");

        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Grouped {} hiring items into {} lists",
            result.item_count(),
            result.hiring_item_map.len()
        );
        self.monitor.log_stats("transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output written to {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
