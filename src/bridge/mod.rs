//! Fire-and-forget channel between the host and the sandboxed renderer.
//!
//! [`connect`] creates both ends: the host keeps the [`MessageBridge`] while
//! the embedder moves the [`SandboxPort`] to wherever the sandbox's script
//! context is reachable. Messages on either side are delivered in send order;
//! nothing is acknowledged and nothing is retried.

mod error;
mod port;

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, trace, warn};
use webpane_protocol::{InboundMessage, OutboundCommand, OutboundFrame};

pub use error::BridgeError;
pub use port::SandboxPort;

/// Create a connected bridge and sandbox port.
pub fn connect() -> (MessageBridge, SandboxPort) {
	let (outbound_tx, outbound_rx) = mpsc::channel();
	let (inbound_tx, inbound_rx) = mpsc::channel();

	let bridge = MessageBridge {
		outbound: Some(outbound_tx),
		inbound: Some(inbound_rx),
	};
	(bridge, SandboxPort::new(inbound_tx, outbound_rx))
}

/// Host end of the sandbox channel.
pub struct MessageBridge {
	outbound: Option<Sender<OutboundFrame>>,
	inbound: Option<Receiver<InboundMessage>>,
}

impl MessageBridge {
	/// Send a command, dropping it silently if it cannot be delivered.
	pub fn send(&self, command: OutboundCommand) {
		let channel = command.channel();
		match self.try_send(command) {
			Ok(()) => debug!(channel, "sent command to sandbox"),
			Err(BridgeError::Protocol(err)) => {
				warn!(channel, error = %err, "dropping unencodable sandbox command");
			}
			Err(err) => debug!(channel, error = %err, "dropping sandbox command"),
		}
	}

	/// Send a command, reporting why it could not be delivered.
	pub fn try_send(&self, command: OutboundCommand) -> Result<(), BridgeError> {
		let sender = self.outbound.as_ref().ok_or(BridgeError::Detached)?;
		let frame = command.into_frame()?;
		sender.send(frame).map_err(|_| BridgeError::Disconnected)
	}

	/// Take the next pending inbound message, if any.
	///
	/// Once the sandbox end is gone the inbound side is released so later
	/// calls return immediately.
	pub fn try_recv(&mut self) -> Option<InboundMessage> {
		let receiver = self.inbound.as_ref()?;
		match receiver.try_recv() {
			Ok(message) => {
				trace!(channel = %message.channel, "received sandbox message");
				Some(message)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				debug!("sandbox port closed; releasing inbound channel");
				self.inbound = None;
				None
			}
		}
	}

	/// Stop sending and receiving. Later sends become no-ops.
	pub fn detach(&mut self) {
		self.outbound = None;
		self.inbound = None;
	}

	pub fn is_attached(&self) -> bool {
		self.outbound.is_some()
	}
}
