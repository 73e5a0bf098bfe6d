use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives win over the CLI verbosity, which only sets the default.
/// # Errors
/// Returns an error if a global subscriber was already installed.
pub fn init(level: Level) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
