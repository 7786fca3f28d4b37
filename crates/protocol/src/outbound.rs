//! Commands the host sends into the sandbox.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channels;
use crate::error::ProtocolError;
use crate::heading::HeadingTarget;
use crate::types::{EditorMode, ThemeId};

/// Body of a render command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
	pub html: String,
	pub editor_mode: EditorMode,
	pub theme: ThemeId,
	/// Only carried when the sandbox has just become ready; other renders keep
	/// the font size the sandbox already applied.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub font_size: Option<f64>,
}

/// Instruction for the sandboxed renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundCommand {
	RenderHtml(RenderPayload),
	ChangeFontSize(f64),
	Scroll(f64),
	ScrollToTarget(HeadingTarget),
}

/// Serialized command ready to cross the sandbox boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundFrame {
	pub channel: String,
	pub payload: Value,
}

impl OutboundCommand {
	/// Channel the command travels on.
	pub fn channel(&self) -> &'static str {
		match self {
			OutboundCommand::RenderHtml(_) => channels::RENDER_HTML,
			OutboundCommand::ChangeFontSize(_) => channels::CHANGE_FONT_SIZE,
			OutboundCommand::Scroll(_) => channels::SCROLL,
			OutboundCommand::ScrollToTarget(_) => channels::SCROLL_TO_TARGET,
		}
	}

	pub fn into_frame(self) -> Result<OutboundFrame, ProtocolError> {
		let channel = self.channel();
		let payload = match self {
			OutboundCommand::RenderHtml(render) => serde_json::to_value(render),
			OutboundCommand::ChangeFontSize(size) => serde_json::to_value(size),
			OutboundCommand::Scroll(ratio) => serde_json::to_value(ratio),
			OutboundCommand::ScrollToTarget(target) => serde_json::to_value(target),
		}
		.map_err(|err| ProtocolError::payload(channel, err))?;

		Ok(OutboundFrame {
			channel: channel.to_string(),
			payload,
		})
	}

	/// Decode a frame produced by [`OutboundCommand::into_frame`].
	pub fn from_frame(frame: &OutboundFrame) -> Result<Self, ProtocolError> {
		let payload = frame.payload.clone();
		match frame.channel.as_str() {
			channels::RENDER_HTML => serde_json::from_value(payload)
				.map(OutboundCommand::RenderHtml)
				.map_err(|err| ProtocolError::payload(channels::RENDER_HTML, err)),
			channels::CHANGE_FONT_SIZE => serde_json::from_value(payload)
				.map(OutboundCommand::ChangeFontSize)
				.map_err(|err| ProtocolError::payload(channels::CHANGE_FONT_SIZE, err)),
			channels::SCROLL => serde_json::from_value(payload)
				.map(OutboundCommand::Scroll)
				.map_err(|err| ProtocolError::payload(channels::SCROLL, err)),
			channels::SCROLL_TO_TARGET => serde_json::from_value(payload)
				.map(OutboundCommand::ScrollToTarget)
				.map_err(|err| ProtocolError::payload(channels::SCROLL_TO_TARGET, err)),
			other => Err(ProtocolError::UnknownChannel(other.to_string())),
		}
	}
}
