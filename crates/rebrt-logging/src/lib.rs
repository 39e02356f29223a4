use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level`. Serenity and the HTTP stack are
/// chatty at debug, so they are capped at `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true),
        )
        .try_init()?;

    Ok(())
}

fn default_directives(level: &str) -> String {
    format!("{level},serenity=warn,h2=warn,hyper=warn,rustls=warn")
}
