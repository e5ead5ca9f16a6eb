use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "untappd=debug,info" } else { "untappd=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs a global subscriber honouring `RUST_LOG`. Returns false when one
/// was already installed.
pub fn init_logger(verbose: bool, format: LogFormat) -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter(verbose))
            .with(fmt_layer.compact())
            .try_init()
            .is_ok(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter(verbose))
            .with(fmt_layer.json())
            .try_init()
            .is_ok(),
    }
}
