//! Tracing subscriber installation.
//!
//! The library only emits `tracing` events; embedders that do not install
//! their own subscriber can call [`init`] with the resolved logging settings.
//! `RUST_LOG` directives take precedence over the configured level.

use anyhow::{Result, anyhow};
use tracing_subscriber::{
	EnvFilter, fmt,
	layer::{Layer, SubscriberExt},
	util::SubscriberInitExt,
};

use crate::settings::{LogFormat, LoggingSettings};

/// Install a global subscriber. Fails if one is already installed.
pub fn init(logging: &LoggingSettings) -> Result<()> {
	let env_filter = EnvFilter::builder()
		.with_default_directive(logging.level.into())
		.from_env_lossy();

	let fmt_layer = match logging.format {
		LogFormat::Json => fmt::layer()
			.json()
			.with_current_span(true)
			.with_target(true)
			.boxed(),
		LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
	};

	tracing_subscriber::registry()
		.with(env_filter)
		.with(fmt_layer)
		.try_init()
		.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
