use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Layout mode of the surrounding editor window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
	/// Editor and preview side by side.
	#[default]
	Normal,
	/// Preview only.
	Preview,
	/// Editor with a resizable preview split.
	Edit,
	/// Editor only; the preview is hidden.
	Write,
	/// Distraction-free editor; the preview is hidden.
	Immersion,
}

impl EditorMode {
	pub const ALL: [EditorMode; 5] = [
		EditorMode::Normal,
		EditorMode::Preview,
		EditorMode::Edit,
		EditorMode::Write,
		EditorMode::Immersion,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			EditorMode::Normal => "normal",
			EditorMode::Preview => "preview",
			EditorMode::Edit => "edit",
			EditorMode::Write => "write",
			EditorMode::Immersion => "immersion",
		}
	}

	/// Whether the preview pane takes the whole container in this mode.
	pub fn is_full_width(self) -> bool {
		matches!(self, EditorMode::Normal | EditorMode::Preview)
	}

	/// Whether the preview shares the editing root with the editor pane.
	pub fn shares_editing_root(self) -> bool {
		matches!(self, EditorMode::Edit | EditorMode::Write)
	}

	/// Whether the preview pane is hidden from view in this mode.
	pub fn hides_preview(self) -> bool {
		matches!(self, EditorMode::Write | EditorMode::Immersion)
	}
}

impl fmt::Display for EditorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EditorMode {
	type Err = ProtocolError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		EditorMode::ALL
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(value.trim()))
			.ok_or_else(|| ProtocolError::UnknownEditorMode(value.to_string()))
	}
}
