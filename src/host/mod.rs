//! The preview host.
//!
//! [`PreviewHost`] exists exactly as long as the preview pane is mounted. It
//! owns the bridge to the sandbox, the computed layout and the loading phase,
//! and reacts to prop updates, window resizes, sandbox messages and heading
//! jump notifications. Every reaction runs to completion on the caller's
//! thread; nothing here blocks on the sandbox.

mod mount;
mod props;
mod sandbox;
mod view;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use serde_json::Value;
use tracing::{debug, trace, warn};
use webpane_protocol::{
	EditorMode, HeadingTarget, InboundEvent, InboundMessage, OutboundCommand, channels,
};

use crate::bridge::MessageBridge;
use crate::layout::{LayoutState, WidthValue, compute_body_width};
use crate::loading::LoadingPhase;
use crate::navigation::should_open_externally;
use crate::notify::{NotificationBus, NotificationHandler, SubscriptionToken};
use crate::shell::PrivilegedShell;

pub use mount::{ContainerMetrics, MountContext, PaneHandle};
pub use props::{HostOptions, PreviewProps, RenderState};
pub use sandbox::SandboxSpec;
pub use view::PreviewView;

use mount::Panes;

pub struct PreviewHost {
	props: PreviewProps,
	layout: LayoutState,
	loading: LoadingPhase,
	options: HostOptions,
	bridge: MessageBridge,
	panes: Panes,
	shell: Box<dyn PrivilegedShell>,
	bus: Arc<dyn NotificationBus>,
	toc_subscription: Option<SubscriptionToken>,
	toc_jumps: Receiver<Value>,
}

impl PreviewHost {
	/// Mount the host: subscribe to heading jumps and compute the initial layout.
	///
	/// The sandbox does not need to be ready; its first-loaded signal triggers
	/// a full render later.
	pub fn mount(props: PreviewProps, context: MountContext, options: HostOptions) -> Self {
		let MountContext {
			bridge,
			metrics,
			shell,
			bus,
			preview,
			note_root,
		} = context;

		let (jump_tx, toc_jumps) = mpsc::channel();
		let handler: NotificationHandler = Arc::new(move |payload: &Value| {
			let _ = jump_tx.send(payload.clone());
		});
		let toc_subscription = bus.subscribe(channels::TOC_JUMP, handler);

		let mut host = Self {
			props,
			layout: LayoutState::default(),
			loading: LoadingPhase::default(),
			options,
			bridge,
			panes: Panes {
				metrics,
				preview,
				note_root,
			},
			shell,
			bus,
			toc_subscription: Some(toc_subscription),
			toc_jumps,
		};
		host.recompute_layout();
		debug!(
			editor_mode = %host.props.editor_mode,
			body_width = %host.layout.body_width,
			"preview host mounted"
		);
		host
	}

	/// Apply new props from the editor window.
	pub fn update(&mut self, props: PreviewProps) {
		let previous = std::mem::replace(&mut self.props, props);

		if self.props.content_changed(&previous) {
			self.send_render(false);
		}
		if self.props.layout_changed(&previous) {
			self.recompute_layout();
		}
		if self.props.font_size != previous.font_size {
			self.bridge
				.send(OutboundCommand::ChangeFontSize(self.props.font_size));
		}
	}

	/// React to the window being resized.
	///
	/// Only the `edit` layout tracks the window; other modes keep their width
	/// until the next mode or split change.
	pub fn on_window_resize(&mut self) {
		if self.props.editor_mode == EditorMode::Edit {
			self.recompute_layout();
		}
	}

	/// Handle every pending sandbox message and heading jump, in arrival order
	/// per source. Returns the number of events handled.
	pub fn pump(&mut self) -> usize {
		let mut handled = 0;
		while let Some(message) = self.bridge.try_recv() {
			self.handle_inbound(&message);
			handled += 1;
		}
		while let Ok(payload) = self.toc_jumps.try_recv() {
			self.handle_toc_jump(&payload);
			handled += 1;
		}
		handled
	}

	/// Scroll the rendered document to `ratio` of its height.
	pub fn set_scroll_ratio(&self, ratio: f64) {
		self.bridge.send(OutboundCommand::Scroll(ratio));
	}

	/// Open developer tools for the sandbox, when enabled.
	pub fn open_dev_tools(&self) {
		if !self.options.dev_tools {
			trace!("developer tools disabled; ignoring request");
			return;
		}
		if let Err(err) = self.shell.open_dev_tools() {
			warn!(error = %err, "failed to open sandbox developer tools");
		}
	}

	/// Tear the host down. Equivalent to dropping it.
	pub fn unmount(self) {
		drop(self);
	}

	pub fn props(&self) -> &PreviewProps {
		&self.props
	}

	pub fn render_state(&self) -> RenderState<'_> {
		self.props.render_state()
	}

	pub fn layout(&self) -> LayoutState {
		self.layout
	}

	pub fn body_width(&self) -> WidthValue {
		self.layout.body_width
	}

	pub fn loading_phase(&self) -> LoadingPhase {
		self.loading
	}

	pub fn view(&self) -> PreviewView {
		PreviewView::derive(
			self.props.editor_mode,
			self.props.drag,
			self.layout.body_width,
			self.loading.shows_indicator(),
			self.options.dev_tools,
		)
	}

	fn handle_inbound(&mut self, message: &InboundMessage) {
		match message.event() {
			InboundEvent::FirstLoaded => {
				if self.loading.mark_ready() {
					debug!("sandbox reported first load");
				}
				// Renders sent before this point may have been lost.
				self.send_render(true);
			}
			InboundEvent::LinkClicked { href } => self.handle_link(href),
			InboundEvent::Other(channel) => {
				trace!(channel, "ignoring sandbox message");
			}
		}
	}

	fn handle_link(&self, href: &str) {
		if !should_open_externally(href) {
			trace!(href, "link left to the sandbox");
			return;
		}
		debug!(href, "opening link externally");
		if let Err(err) = self.shell.open_external(href) {
			warn!(href, error = %err, "failed to open link externally");
		}
	}

	fn handle_toc_jump(&self, payload: &Value) {
		match HeadingTarget::from_payload(payload) {
			Some(target) => self.bridge.send(OutboundCommand::ScrollToTarget(target)),
			None => trace!(%payload, "ignoring malformed heading jump"),
		}
	}

	fn send_render(&self, with_font_size: bool) {
		let payload = self.props.render_state().to_payload(with_font_size);
		self.bridge.send(OutboundCommand::RenderHtml(payload));
	}

	fn recompute_layout(&mut self) {
		let body_width = compute_body_width(
			self.props.editor_mode,
			self.props.split_ratio,
			self.panes.measure(),
		);
		if body_width != self.layout.body_width {
			trace!(%body_width, "preview body width changed");
		}
		self.layout.body_width = body_width;
	}
}

impl Drop for PreviewHost {
	fn drop(&mut self) {
		if let Some(token) = self.toc_subscription.take() {
			self.bus.unsubscribe(token);
		}
		self.bridge.detach();
		debug!("preview host unmounted");
	}
}

#[cfg(test)]
mod tests;
