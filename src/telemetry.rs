use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a global fmt subscriber. `RUST_LOG` wins over `default_directive` when set.
pub fn init_tracing(default_directive: &str) -> anyhow::Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::builder().parse(directive)?,
        Err(_) => EnvFilter::builder().parse(default_directive)?,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_line_number(true)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(())
}
