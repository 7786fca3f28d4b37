//! Host-side core for a sandboxed markdown preview pane.
//!
//! The editor window feeds [`PreviewProps`] into a [`PreviewHost`], which keeps
//! an isolated renderer in sync through a fire-and-forget [`MessageBridge`].
//! Layout, loading state and link navigation are decided here; rendering,
//! theming and the sandbox's own script live elsewhere.

pub mod app_dirs;
pub mod bridge;
pub mod host;
pub mod layout;
pub mod loading;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod settings;
pub mod shell;

pub use bridge::{BridgeError, MessageBridge, SandboxPort, connect};
pub use host::{
	ContainerMetrics, HostOptions, MountContext, PaneHandle, PreviewHost, PreviewProps,
	PreviewView, RenderState, SandboxSpec,
};
pub use layout::{ContainerWidths, LayoutState, WidthValue, compute_body_width};
pub use loading::LoadingPhase;
pub use navigation::should_open_externally;
pub use notify::{LocalBus, NotificationBus, NotificationHandler, SubscriptionToken};
pub use settings::{LoadOptions, Settings};
pub use shell::{PrivilegedShell, ShellError};

pub use webpane_protocol as protocol;
