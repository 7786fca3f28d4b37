use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use super::raw::{Origins, RawSettings};
use super::resolved::Settings;
use super::sources::build_config;

/// Controls which sources [`load`] consults.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
	/// Files that must exist, applied after the default locations.
	pub files: Vec<PathBuf>,
	pub skip_default_files: bool,
	pub skip_environment: bool,
}

impl LoadOptions {
	/// Only read the given files; ignore default locations and the environment.
	pub fn isolated(files: impl IntoIterator<Item = PathBuf>) -> Self {
		Self {
			files: files.into_iter().collect(),
			skip_default_files: true,
			skip_environment: true,
		}
	}
}

/// Load and validate settings.
pub fn load(options: &LoadOptions) -> Result<Settings> {
	let config = build_config(options)?;
	let raw: RawSettings = config
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.resolve(Origins::new(!options.skip_environment))
		.context("invalid configuration")
}
