//! Logging setup
//!
//! The engine only emits `tracing` events; the binary decides where they go
//! by calling [`init`] once at startup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::time, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// - `RUST_LOG` is honored on top of the defaults
/// - debug builds log engine events from `debug` up, release builds from `info`
/// - `extra` directives (from the config's `log_filter`) are applied last
pub fn init(extra: Option<&str>) -> anyhow::Result<()> {
    let engine_level = if cfg!(debug_assertions) {
        "krystal=debug"
    } else {
        "krystal=info"
    };
    let backend_level = if cfg!(debug_assertions) {
        "macroquad=warn"
    } else {
        "macroquad=error"
    };

    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?
        .add_directive(engine_level.parse()?)
        .add_directive(backend_level.parse()?);

    if let Some(extra) = extra {
        for directive in extra.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(time::uptime()),
        )
        .with(filter)
        .try_init()?;
    Ok(())
}
