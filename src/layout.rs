//! Width computation for the preview body.
//!
//! The preview body is either stretched over its container or pinned to the
//! share of the editing root left over by the editor pane. The calculation is
//! pure so the host can rerun it on every layout-affecting event.

use std::fmt;

use webpane_protocol::EditorMode;

/// Width applied to the preview body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum WidthValue {
	/// Fill the whole container (`100%`).
	#[default]
	Full,
	/// Absolute width in pixels.
	Pixels(f64),
}

impl WidthValue {
	pub fn is_full(&self) -> bool {
		matches!(self, WidthValue::Full)
	}

	/// CSS value for the body's `width` property.
	pub fn to_css(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for WidthValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			WidthValue::Full => f.write_str("100%"),
			WidthValue::Pixels(px) => write!(f, "{px}px"),
		}
	}
}

/// Container widths measured once the preview pane is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerWidths {
	/// Width of the root container shared by the editor and preview panes.
	pub editing_root: Option<f64>,
	/// Width of the preview pane's offset parent.
	pub offset_parent: Option<f64>,
}

/// Layout owned by the preview host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutState {
	pub body_width: WidthValue,
}

/// Compute the preview body width.
///
/// `measured` is `None` until the panes exist. `split_ratio` is the share of
/// the container taken by the editor pane.
pub fn compute_body_width(
	mode: EditorMode,
	split_ratio: f64,
	measured: Option<ContainerWidths>,
) -> WidthValue {
	if mode.is_full_width() {
		return WidthValue::Full;
	}
	let Some(measured) = measured else {
		return WidthValue::Full;
	};

	let parent_width = if mode.shares_editing_root() {
		measured.editing_root
	} else {
		measured.offset_parent
	};

	match parent_width {
		Some(width) if is_set(width) && is_set(split_ratio) => {
			WidthValue::Pixels(width * (1.0 - split_ratio))
		}
		_ => WidthValue::Full,
	}
}

/// Zero and NaN count as "not provided".
fn is_set(value: f64) -> bool {
	value != 0.0 && !value.is_nan()
}
