use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PublishEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PublishEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading catalog data...");
        let table = self.pipeline.extract().await?;
        tracing::info!("Loaded {} rows", table.rows.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Grouping catalog and formatting age label...");
        let page = self.pipeline.transform(table).await?;
        tracing::info!("Grouped into {} categories", page.grouped_wines.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Rendering page...");
        let output_path = self.pipeline.load(page).await?;
        tracing::info!("Page written to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
