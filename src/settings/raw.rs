use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use webpane_protocol::{EditorMode, ThemeId};

use super::errors::{SettingSource, SettingsError};
use super::resolved::{
	DEFAULT_DISABLED_FEATURES, DEFAULT_FONT_SIZE, DEFAULT_PAGE, DEFAULT_SPLIT_RATIO,
	DEFAULT_THEME, DebugSettings, DefaultSettings, LogFormat, LoggingSettings, SandboxSettings,
	Settings,
};

/// Mirror of the configuration file before defaults and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	sandbox: SandboxSection,
	defaults: DefaultsSection,
	debug: DebugSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SandboxSection {
	page: Option<String>,
	preload: Option<PathBuf>,
	context_isolation: Option<bool>,
	node_integration: Option<bool>,
	disabled_features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DefaultsSection {
	font_size: Option<f64>,
	theme: Option<String>,
	split_ratio: Option<f64>,
	editor_mode: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DebugSection {
	dev_tools: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	format: Option<LogFormat>,
}

impl RawSettings {
	/// Fill defaults and validate every value.
	pub(super) fn resolve(self, origins: Origins) -> Result<Settings, SettingsError> {
		Ok(Settings {
			sandbox: self.sandbox.resolve(origins)?,
			defaults: self.defaults.resolve(origins)?,
			debug: DebugSettings {
				dev_tools: self.debug.dev_tools.unwrap_or(false),
			},
			logging: self.logging.resolve(origins)?,
		})
	}
}

/// Attributes rejected values to the source they were read from.
#[derive(Debug, Clone, Copy)]
pub(super) struct Origins {
	environment: bool,
}

impl Origins {
	/// `environment` is whether `WEBPANE__*` variables were layered in.
	pub(super) fn new(environment: bool) -> Self {
		Self { environment }
	}

	fn source(self, env_var: &'static str, key: &'static str) -> SettingSource {
		if self.environment && env::var_os(env_var).is_some() {
			SettingSource::Environment(env_var)
		} else {
			SettingSource::ConfigKey(key)
		}
	}
}

impl SandboxSection {
	fn resolve(self, origins: Origins) -> Result<SandboxSettings, SettingsError> {
		let page = self.page.unwrap_or_else(|| DEFAULT_PAGE.to_string());
		let page = page.trim();
		if page.is_empty() {
			return Err(SettingsError::invalid(
				"sandbox.page",
				page,
				origins.source("WEBPANE__SANDBOX__PAGE", "sandbox.page"),
				"must not be empty",
			));
		}

		let disabled_features = match self.disabled_features {
			Some(features) => sanitize_features(features),
			None => DEFAULT_DISABLED_FEATURES
				.iter()
				.map(|feature| feature.to_string())
				.collect(),
		};

		Ok(SandboxSettings {
			page: page.to_string(),
			preload: self.preload,
			context_isolation: self.context_isolation.unwrap_or(true),
			node_integration: self.node_integration.unwrap_or(true),
			disabled_features,
		})
	}
}

impl DefaultsSection {
	fn resolve(self, origins: Origins) -> Result<DefaultSettings, SettingsError> {
		let font_size = self.font_size.unwrap_or(DEFAULT_FONT_SIZE);
		if !(font_size.is_finite() && font_size > 0.0) {
			return Err(SettingsError::invalid(
				"defaults.font_size",
				font_size.to_string(),
				origins.source("WEBPANE__DEFAULTS__FONT_SIZE", "defaults.font_size"),
				"must be a positive number",
			));
		}

		let split_ratio = self.split_ratio.unwrap_or(DEFAULT_SPLIT_RATIO);
		if !(0.0..=1.0).contains(&split_ratio) {
			return Err(SettingsError::invalid(
				"defaults.split_ratio",
				split_ratio.to_string(),
				origins.source("WEBPANE__DEFAULTS__SPLIT_RATIO", "defaults.split_ratio"),
				"must be between 0 and 1",
			));
		}

		let editor_mode = match self.editor_mode {
			Some(value) => value.parse::<EditorMode>().map_err(|err| {
				SettingsError::invalid(
					"defaults.editor_mode",
					value.clone(),
					origins.source("WEBPANE__DEFAULTS__EDITOR_MODE", "defaults.editor_mode"),
					err.to_string(),
				)
			})?,
			None => EditorMode::default(),
		};

		let theme = self
			.theme
			.map(|theme| theme.trim().to_string())
			.filter(|theme| !theme.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		Ok(DefaultSettings {
			font_size,
			theme: ThemeId::new(theme),
			split_ratio,
			editor_mode,
		})
	}
}

impl LoggingSection {
	fn resolve(self, origins: Origins) -> Result<LoggingSettings, SettingsError> {
		let level = match self.level {
			Some(value) => value.trim().parse::<LevelFilter>().map_err(|err| {
				SettingsError::invalid(
					"logging.level",
					value.clone(),
					origins.source("WEBPANE__LOGGING__LEVEL", "logging.level"),
					err.to_string(),
				)
			})?,
			None => LevelFilter::INFO,
		};

		Ok(LoggingSettings {
			level,
			format: self.format.unwrap_or_default(),
		})
	}
}

/// Trim, drop empties and deduplicate while keeping the first occurrence.
fn sanitize_features(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.filter(|value| seen.insert(value.clone()))
		.collect()
}
