//! Messages raised by the sandbox and delivered to the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::channels;

/// Raw message as it arrives from the sandbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundMessage {
	pub channel: String,
	#[serde(default)]
	pub args: Vec<Value>,
}

/// Classified view over an [`InboundMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundEvent<'a> {
	/// The sandbox finished its first load and can now render.
	FirstLoaded,
	/// A link inside the rendered document was activated.
	LinkClicked { href: &'a str },
	/// Any channel the host does not act upon.
	Other(&'a str),
}

impl InboundMessage {
	pub fn new(channel: impl Into<String>, args: Vec<Value>) -> Self {
		Self {
			channel: channel.into(),
			args,
		}
	}

	pub fn first_loaded() -> Self {
		Self::new(channels::FIRST_LOADED, Vec::new())
	}

	pub fn link_clicked(href: impl Into<String>) -> Self {
		Self::new(channels::LINK_CLICKED, vec![Value::String(href.into())])
	}

	/// Classify the message by channel.
	///
	/// A link click whose first argument is missing or not a string yields an
	/// empty `href`, which no navigation rule accepts.
	pub fn event(&self) -> InboundEvent<'_> {
		match self.channel.as_str() {
			channels::FIRST_LOADED => InboundEvent::FirstLoaded,
			channels::LINK_CLICKED => {
				let href = self
					.args
					.first()
					.and_then(Value::as_str)
					.unwrap_or_default();
				InboundEvent::LinkClicked { href }
			}
			other => InboundEvent::Other(other),
		}
	}
}
