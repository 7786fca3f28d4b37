use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use super::loader::LoadOptions;
use crate::app_dirs;

pub(super) const ENV_PREFIX: &str = "WEBPANE";

/// The only setting read as a comma-separated list from the environment.
const LIST_KEYS: [&str; 1] = ["sandbox.disabled_features"];

/// Layer the preview settings sources: optional per-user and per-project
/// files, then files the embedder asked for, then `WEBPANE__*` variables.
pub(super) fn build_config(options: &LoadOptions) -> Result<Config> {
	let mut builder = Config::builder();

	if !options.skip_default_files {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &options.files {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	if !options.skip_environment {
		let mut environment = Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",");
		for key in LIST_KEYS {
			environment = environment.with_list_parse_key(key);
		}
		builder = builder.add_source(environment);
	}

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Per-user `config.toml` first, then the project's `.webpane.toml` and
/// `webpane.toml` so a checkout can pin its own preview defaults.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".webpane.toml"));
		files.push(current_dir.join("webpane.toml"));
	}

	files
}
