use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use serde_json::json;
use webpane_protocol::{
	EditorMode, HeadingTarget, InboundMessage, OutboundCommand, RenderPayload, ThemeId, channels,
};

use super::*;
use crate::bridge::{self, SandboxPort};
use crate::notify::LocalBus;
use crate::shell::ShellError;

#[derive(Clone)]
struct FakeMetrics {
	root_width: Rc<Cell<f64>>,
	parent_width: Rc<Cell<f64>>,
}

impl ContainerMetrics for FakeMetrics {
	fn offset_width(&self, _pane: PaneHandle) -> Option<f64> {
		Some(self.root_width.get())
	}

	fn offset_parent_width(&self, _pane: PaneHandle) -> Option<f64> {
		Some(self.parent_width.get())
	}
}

#[derive(Clone, Default)]
struct RecordingShell {
	opened: Rc<RefCell<Vec<String>>>,
	dev_tools: Rc<Cell<usize>>,
	fail: bool,
}

impl PrivilegedShell for RecordingShell {
	fn open_external(&self, url: &str) -> Result<(), ShellError> {
		self.opened.borrow_mut().push(url.to_string());
		if self.fail {
			return Err(ShellError::open_external(url, "no browser"));
		}
		Ok(())
	}

	fn open_dev_tools(&self) -> Result<(), ShellError> {
		self.dev_tools.set(self.dev_tools.get() + 1);
		Ok(())
	}
}

struct Harness {
	host: PreviewHost,
	port: SandboxPort,
	bus: LocalBus,
	shell: RecordingShell,
	metrics: FakeMetrics,
}

impl Harness {
	fn mount(props: PreviewProps) -> Self {
		Self::mount_with(props, HostOptions::default(), RecordingShell::default())
	}

	fn mount_with(props: PreviewProps, options: HostOptions, shell: RecordingShell) -> Self {
		let (bridge, port) = bridge::connect();
		let bus = LocalBus::new();
		let metrics = FakeMetrics {
			root_width: Rc::new(Cell::new(1000.0)),
			parent_width: Rc::new(Cell::new(700.0)),
		};
		let context = MountContext {
			bridge,
			metrics: Box::new(metrics.clone()),
			shell: Box::new(shell.clone()),
			bus: Arc::new(bus.clone()),
			preview: Some(PaneHandle(1)),
			note_root: Some(PaneHandle(2)),
		};
		let host = PreviewHost::mount(props, context, options);
		Self {
			host,
			port,
			bus,
			shell,
			metrics,
		}
	}

	fn sent(&self) -> Vec<OutboundCommand> {
		self.port.drain_commands().unwrap()
	}
}

fn edit_props() -> PreviewProps {
	PreviewProps {
		html: "<p>draft</p>".into(),
		theme: ThemeId::new("light"),
		editor_mode: EditorMode::Edit,
		font_size: 16.0,
		drag: false,
		split_ratio: 0.4,
	}
}

fn render(props: &PreviewProps, font_size: Option<f64>) -> OutboundCommand {
	OutboundCommand::RenderHtml(RenderPayload {
		html: props.html.clone(),
		editor_mode: props.editor_mode,
		theme: props.theme.clone(),
		font_size,
	})
}

#[test]
fn mount_computes_split_width_without_sending() {
	let harness = Harness::mount(edit_props());
	assert_eq!(harness.host.body_width(), WidthValue::Pixels(600.0));
	assert_eq!(harness.host.loading_phase(), LoadingPhase::Loading);
	assert!(harness.sent().is_empty());
	assert_eq!(harness.bus.subscriber_count(channels::TOC_JUMP), 1);
}

#[test]
fn mount_without_panes_fills_the_container() {
	let (bridge, _port) = bridge::connect();
	let metrics = FakeMetrics {
		root_width: Rc::new(Cell::new(1000.0)),
		parent_width: Rc::new(Cell::new(700.0)),
	};
	let context = MountContext {
		bridge,
		metrics: Box::new(metrics),
		shell: Box::new(RecordingShell::default()),
		bus: Arc::new(LocalBus::new()),
		preview: None,
		note_root: Some(PaneHandle(2)),
	};
	let host = PreviewHost::mount(edit_props(), context, HostOptions::default());
	assert_eq!(host.body_width(), WidthValue::Full);
}

#[test]
fn switching_to_preview_mode_restores_full_width() {
	let mut harness = Harness::mount(edit_props());
	let props = PreviewProps {
		editor_mode: EditorMode::Preview,
		..edit_props()
	};
	harness.host.update(props.clone());

	assert_eq!(harness.host.body_width(), WidthValue::Full);
	assert_eq!(harness.sent(), vec![render(&props, None)]);
}

#[test]
fn font_size_change_alone_sends_only_font_size() {
	let mut harness = Harness::mount(edit_props());
	harness.host.update(PreviewProps {
		font_size: 18.0,
		..edit_props()
	});
	assert_eq!(harness.sent(), vec![OutboundCommand::ChangeFontSize(18.0)]);
}

#[test]
fn unchanged_props_send_nothing() {
	let mut harness = Harness::mount(edit_props());
	harness.host.update(PreviewProps {
		drag: true,
		..edit_props()
	});
	assert!(harness.sent().is_empty());
	assert!(harness.host.view().root_classes.contains(&"drag"));
}

#[test]
fn content_and_font_changes_send_both_commands() {
	let mut harness = Harness::mount(edit_props());
	let props = PreviewProps {
		html: "<p>final</p>".into(),
		theme: ThemeId::new("dark"),
		font_size: 20.0,
		..edit_props()
	};
	harness.host.update(props.clone());
	assert_eq!(
		harness.sent(),
		vec![render(&props, None), OutboundCommand::ChangeFontSize(20.0)]
	);
}

#[test]
fn split_ratio_change_recomputes_width() {
	let mut harness = Harness::mount(edit_props());
	harness.host.update(PreviewProps {
		split_ratio: 0.75,
		..edit_props()
	});
	assert_eq!(harness.host.body_width(), WidthValue::Pixels(250.0));
	assert!(harness.sent().is_empty());
}

#[test]
fn resize_only_recomputes_in_edit_mode() {
	let mut harness = Harness::mount(edit_props());
	harness.metrics.root_width.set(2000.0);
	harness.host.on_window_resize();
	assert_eq!(harness.host.body_width(), WidthValue::Pixels(1200.0));

	let write = PreviewProps {
		editor_mode: EditorMode::Write,
		..edit_props()
	};
	harness.host.update(write);
	assert_eq!(harness.host.body_width(), WidthValue::Pixels(1200.0));

	harness.metrics.root_width.set(500.0);
	harness.host.on_window_resize();
	assert_eq!(harness.host.body_width(), WidthValue::Pixels(1200.0));
}

#[test]
fn resize_in_preview_mode_keeps_width() {
	let mut harness = Harness::mount(PreviewProps {
		editor_mode: EditorMode::Preview,
		..edit_props()
	});
	harness.metrics.root_width.set(300.0);
	harness.host.on_window_resize();
	assert_eq!(harness.host.body_width(), WidthValue::Full);
}

#[test]
fn first_loaded_marks_ready_and_resends_full_state() {
	let mut harness = Harness::mount(edit_props());
	assert!(harness.host.view().show_loading);

	harness.port.post(InboundMessage::first_loaded());
	assert_eq!(harness.host.pump(), 1);

	assert_eq!(harness.host.loading_phase(), LoadingPhase::Ready);
	assert!(!harness.host.view().show_loading);
	assert_eq!(harness.sent(), vec![render(&edit_props(), Some(16.0))]);
}

#[test]
fn repeated_first_loaded_stays_ready() {
	let mut harness = Harness::mount(edit_props());
	harness.port.post(InboundMessage::first_loaded());
	harness.port.post(InboundMessage::first_loaded());
	harness.host.pump();

	assert_eq!(harness.host.loading_phase(), LoadingPhase::Ready);
	assert_eq!(harness.sent().len(), 2);
}

#[test]
fn external_link_opens_once_without_side_effects() {
	let mut harness = Harness::mount(edit_props());
	let width = harness.host.body_width();

	harness.port.post(InboundMessage::link_clicked("https://a.b/c"));
	harness.host.pump();

	assert_eq!(*harness.shell.opened.borrow(), vec!["https://a.b/c".to_string()]);
	assert!(harness.sent().is_empty());
	assert_eq!(harness.host.body_width(), width);
	assert_eq!(harness.host.loading_phase(), LoadingPhase::Loading);
}

#[test]
fn unsafe_links_are_not_opened() {
	let mut harness = Harness::mount(edit_props());
	for href in ["javascript:alert(1)", "/local/path", "file:///etc/hosts", ""] {
		harness.port.post(InboundMessage::link_clicked(href));
	}
	harness
		.port
		.post(InboundMessage::new(channels::LINK_CLICKED, Vec::new()));
	harness.host.pump();

	assert!(harness.shell.opened.borrow().is_empty());
}

#[test]
fn shell_failures_are_swallowed() {
	let shell = RecordingShell {
		fail: true,
		..RecordingShell::default()
	};
	let mut harness = Harness::mount_with(edit_props(), HostOptions::default(), shell);
	harness.port.post(InboundMessage::link_clicked("http://x"));
	assert_eq!(harness.host.pump(), 1);
	assert_eq!(harness.shell.opened.borrow().len(), 1);
}

#[test]
fn unknown_channels_are_ignored() {
	let mut harness = Harness::mount(edit_props());
	harness
		.port
		.post(InboundMessage::new("wv-word-count", vec![json!(42)]));
	assert_eq!(harness.host.pump(), 1);
	assert!(harness.sent().is_empty());
	assert_eq!(harness.host.loading_phase(), LoadingPhase::Loading);
}

#[test]
fn heading_jumps_are_forwarded_when_well_formed() {
	let mut harness = Harness::mount(edit_props());
	harness
		.bus
		.publish(channels::TOC_JUMP, &json!({ "depth": 2, "text": "Usage" }));
	harness
		.bus
		.publish(channels::TOC_JUMP, &json!({ "depth": 2, "text": "" }));
	harness.bus.publish(channels::TOC_JUMP, &json!({}));
	assert_eq!(harness.host.pump(), 3);

	assert_eq!(
		harness.sent(),
		vec![OutboundCommand::ScrollToTarget(HeadingTarget::new(2, "Usage"))]
	);
}

#[test]
fn scroll_ratio_is_forwarded() {
	let harness = Harness::mount(edit_props());
	harness.host.set_scroll_ratio(0.5);
	assert_eq!(harness.sent(), vec![OutboundCommand::Scroll(0.5)]);
}

#[test]
fn dev_tools_respect_options() {
	let harness = Harness::mount(edit_props());
	harness.host.open_dev_tools();
	assert_eq!(harness.shell.dev_tools.get(), 0);
	assert!(!harness.host.view().show_dev_tools);

	let harness = Harness::mount_with(
		edit_props(),
		HostOptions { dev_tools: true },
		RecordingShell::default(),
	);
	harness.host.open_dev_tools();
	assert_eq!(harness.shell.dev_tools.get(), 1);
	assert!(harness.host.view().show_dev_tools);
}

#[test]
fn unmount_releases_subscriptions_and_bridge() {
	let Harness {
		host, port, bus, ..
	} = Harness::mount(edit_props());
	host.unmount();

	assert_eq!(bus.subscriber_count(channels::TOC_JUMP), 0);
	assert_eq!(bus.publish(channels::TOC_JUMP, &json!({ "depth": 1, "text": "A" })), 0);
	assert!(!port.post(InboundMessage::first_loaded()));
	assert!(port.drain().is_empty());
}

#[test]
fn sends_after_sandbox_teardown_are_no_ops() {
	let Harness { host, port, .. } = Harness::mount(edit_props());
	drop(port);
	host.set_scroll_ratio(0.2);
	let mut host = host;
	host.update(PreviewProps {
		html: "<p>gone</p>".into(),
		..edit_props()
	});
	assert_eq!(host.pump(), 0);
}
