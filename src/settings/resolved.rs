use std::path::PathBuf;

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use webpane_protocol::{EditorMode, ThemeId};

pub(super) const DEFAULT_PAGE: &str = "webpane://preview/index.html";
pub(super) const DEFAULT_FONT_SIZE: f64 = 16.0;
pub(super) const DEFAULT_THEME: &str = "light";
pub(super) const DEFAULT_SPLIT_RATIO: f64 = 0.5;
pub(super) const DEFAULT_DISABLED_FEATURES: [&str; 1] = ["Auxclick"];

/// Validated settings with every default filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
	pub sandbox: SandboxSettings,
	pub defaults: DefaultSettings,
	pub debug: DebugSettings,
	pub logging: LoggingSettings,
}

/// How the sandboxed renderer is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxSettings {
	/// Page loaded into the sandbox; it hosts the renderer script.
	pub page: String,
	/// Script injected before the page runs, bridging IPC into the page.
	pub preload: Option<PathBuf>,
	pub context_isolation: bool,
	pub node_integration: bool,
	/// Browser features switched off inside the sandbox.
	pub disabled_features: Vec<String>,
}

impl Default for SandboxSettings {
	fn default() -> Self {
		Self {
			page: DEFAULT_PAGE.to_string(),
			preload: None,
			context_isolation: true,
			node_integration: true,
			disabled_features: DEFAULT_DISABLED_FEATURES
				.iter()
				.map(|feature| feature.to_string())
				.collect(),
		}
	}
}

/// Initial editor state used before the window supplies its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSettings {
	pub font_size: f64,
	pub theme: ThemeId,
	pub split_ratio: f64,
	pub editor_mode: EditorMode,
}

impl Default for DefaultSettings {
	fn default() -> Self {
		Self {
			font_size: DEFAULT_FONT_SIZE,
			theme: ThemeId::new(DEFAULT_THEME),
			split_ratio: DEFAULT_SPLIT_RATIO,
			editor_mode: EditorMode::default(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugSettings {
	/// Expose the developer tools affordance on the preview.
	pub dev_tools: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Compact,
	Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
	pub level: LevelFilter,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: LevelFilter::INFO,
			format: LogFormat::default(),
		}
	}
}
