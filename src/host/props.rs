use webpane_protocol::{EditorMode, RenderPayload, ThemeId};

use crate::settings::{DefaultSettings, Settings};

/// Inputs the editor window feeds into the preview host.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewProps {
	/// Markup produced by the external converter.
	pub html: String,
	pub theme: ThemeId,
	pub editor_mode: EditorMode,
	pub font_size: f64,
	/// Whether the split divider is being dragged.
	pub drag: bool,
	/// Share of the horizontal space taken by the editor pane.
	pub split_ratio: f64,
}

impl PreviewProps {
	/// Props seeded from configured defaults.
	pub fn from_defaults(defaults: &DefaultSettings, html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			theme: defaults.theme.clone(),
			editor_mode: defaults.editor_mode,
			font_size: defaults.font_size,
			drag: false,
			split_ratio: defaults.split_ratio,
		}
	}

	pub fn render_state(&self) -> RenderState<'_> {
		RenderState {
			html: &self.html,
			theme: &self.theme,
			editor_mode: self.editor_mode,
			font_size: self.font_size,
		}
	}

	/// Whether moving from `previous` requires a full re-render.
	pub(crate) fn content_changed(&self, previous: &PreviewProps) -> bool {
		self.html != previous.html
			|| self.theme != previous.theme
			|| self.editor_mode != previous.editor_mode
	}

	/// Whether moving from `previous` requires the body width to be recomputed.
	pub(crate) fn layout_changed(&self, previous: &PreviewProps) -> bool {
		self.editor_mode != previous.editor_mode || self.split_ratio != previous.split_ratio
	}
}

impl Default for PreviewProps {
	fn default() -> Self {
		Self::from_defaults(&DefaultSettings::default(), String::new())
	}
}

/// The part of the props the sandbox renders from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState<'a> {
	pub html: &'a str,
	pub theme: &'a ThemeId,
	pub editor_mode: EditorMode,
	pub font_size: f64,
}

impl RenderState<'_> {
	/// Build a render command body; the font size is only attached on request.
	pub fn to_payload(&self, with_font_size: bool) -> RenderPayload {
		RenderPayload {
			html: self.html.to_string(),
			editor_mode: self.editor_mode,
			theme: self.theme.clone(),
			font_size: with_font_size.then_some(self.font_size),
		}
	}
}

/// Host behaviour switches derived from settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostOptions {
	pub dev_tools: bool,
}

impl From<&Settings> for HostOptions {
	fn from(settings: &Settings) -> Self {
		Self {
			dev_tools: settings.debug.dev_tools,
		}
	}
}
