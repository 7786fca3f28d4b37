use webpane_protocol::EditorMode;

use crate::layout::WidthValue;

/// Presentational state derived from the host's inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
	pub root_classes: Vec<&'static str>,
	/// Whether the loading overlay is drawn above the sandbox.
	pub show_loading: bool,
	pub body_width: WidthValue,
	pub show_dev_tools: bool,
}

impl PreviewView {
	pub(super) fn derive(
		editor_mode: EditorMode,
		drag: bool,
		body_width: WidthValue,
		show_loading: bool,
		show_dev_tools: bool,
	) -> Self {
		let mut root_classes = vec!["preview-root"];
		if editor_mode.hides_preview() {
			root_classes.push("hide");
		}
		if editor_mode == EditorMode::Preview {
			root_classes.push("pre-mode");
		}
		if drag {
			root_classes.push("drag");
		}

		Self {
			root_classes,
			show_loading,
			body_width,
			show_dev_tools,
		}
	}

	pub fn class_name(&self) -> String {
		self.root_classes.join(" ")
	}

	pub fn body_style_width(&self) -> String {
		self.body_width.to_css()
	}

	pub fn is_hidden(&self) -> bool {
		self.root_classes.contains(&"hide")
	}
}
