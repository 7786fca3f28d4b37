//! Message contract between the preview host and the sandboxed renderer.
//!
//! The host and the script running inside the sandbox never share memory; they
//! exchange named channels carrying JSON arguments. This crate owns the channel
//! names and the typed views over both directions so that embedders and tests
//! can speak the same protocol as the host.

pub mod channels;
pub mod error;
pub mod heading;
pub mod inbound;
pub mod outbound;
pub mod types;

pub use error::ProtocolError;
pub use heading::HeadingTarget;
pub use inbound::{InboundEvent, InboundMessage};
pub use outbound::{OutboundCommand, OutboundFrame, RenderPayload};
pub use types::{EditorMode, ThemeId};
