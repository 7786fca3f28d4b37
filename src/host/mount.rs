use std::sync::Arc;

use crate::bridge::MessageBridge;
use crate::layout::ContainerWidths;
use crate::notify::NotificationBus;
use crate::shell::PrivilegedShell;

/// Identifier of a pane element issued by the mounting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneHandle(pub u64);

/// Measures mounted panes on behalf of the host.
pub trait ContainerMetrics {
	/// Rendered width of the pane itself.
	fn offset_width(&self, pane: PaneHandle) -> Option<f64>;

	/// Rendered width of the pane's offset parent.
	fn offset_parent_width(&self, pane: PaneHandle) -> Option<f64>;
}

/// Everything the host needs from its surroundings, resolved once at mount.
pub struct MountContext {
	pub bridge: MessageBridge,
	pub metrics: Box<dyn ContainerMetrics>,
	pub shell: Box<dyn PrivilegedShell>,
	pub bus: Arc<dyn NotificationBus>,
	/// The preview pane element, once it exists.
	pub preview: Option<PaneHandle>,
	/// The root container shared by the editor and preview panes.
	pub note_root: Option<PaneHandle>,
}

/// Pane handles plus the metrics source used to measure them.
pub(super) struct Panes {
	pub(super) metrics: Box<dyn ContainerMetrics>,
	pub(super) preview: Option<PaneHandle>,
	pub(super) note_root: Option<PaneHandle>,
}

impl Panes {
	/// Current container widths, or `None` while either pane is missing.
	pub(super) fn measure(&self) -> Option<ContainerWidths> {
		let (preview, note_root) = (self.preview?, self.note_root?);
		Some(ContainerWidths {
			editing_root: self.metrics.offset_width(note_root),
			offset_parent: self.metrics.offset_parent_width(preview),
		})
	}
}
