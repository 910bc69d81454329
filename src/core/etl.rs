use crate::core::Pipeline;
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

    /// Load → Normalize/Filter → Sort → Serialize → Substitute → Write
    pub fn run(&mut self) -> Result<String> {
        tracing::info!("Starting report generation...");
        self.monitor.log_stats("Start");

        // Extract
        let raw_data = self.pipeline.extract()?;
        tracing::info!("Extracted {} candidate records", raw_data.len());
        self.monitor.log_stats("Extract");

        // Transform
        let transformed = self.pipeline.transform(raw_data)?;
        tracing::info!(
            "Kept {} complete records",
            transformed.processed_records.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(transformed)?;
        tracing::info!("Report written to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
