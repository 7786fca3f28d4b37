use thiserror::Error;
use webpane_protocol::ProtocolError;

/// Reasons a command did not reach the sandbox.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// The host detached the bridge during teardown.
	#[error("sandbox bridge is detached")]
	Detached,

	/// The sandbox end of the channel no longer exists.
	#[error("sandbox context is gone")]
	Disconnected,

	#[error(transparent)]
	Protocol(#[from] ProtocolError),
}
