use thiserror::Error;

/// Errors raised while encoding or decoding protocol frames.
#[derive(Debug, Error)]
pub enum ProtocolError {
	/// A frame named a channel that has no outbound command.
	#[error("unknown outbound channel '{0}'")]
	UnknownChannel(String),

	/// The payload of a frame did not match the shape its channel expects.
	#[error("malformed payload on channel '{channel}': {source}")]
	Payload {
		channel: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// An editor mode string did not name a known mode.
	#[error("unknown editor mode '{0}'")]
	UnknownEditorMode(String),
}

impl ProtocolError {
	pub(crate) fn payload(channel: &'static str, source: serde_json::Error) -> Self {
		Self::Payload { channel, source }
	}
}
