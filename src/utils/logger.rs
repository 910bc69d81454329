use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// JSON lines, 方便排程器或 CI 收集
    Json,
}

/// `RUST_LOG` 優先，否則依 verbose 決定預設層級
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        "draw_report=debug,info".to_string()
    } else {
        "draw_report=info".to_string()
    }
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let base = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
        LogFormat::Compact => base.compact().boxed(),
        LogFormat::Json => base.json().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}
