use std::sync::mpsc::{Receiver, Sender};

use webpane_protocol::{InboundMessage, OutboundCommand, OutboundFrame, ProtocolError};

/// Sandbox end of the bridge.
///
/// Embedders forward the frames it yields into the sandbox's script context
/// and post the sandbox's IPC messages back through it.
pub struct SandboxPort {
	inbound: Sender<InboundMessage>,
	outbound: Receiver<OutboundFrame>,
}

impl SandboxPort {
	pub(super) fn new(inbound: Sender<InboundMessage>, outbound: Receiver<OutboundFrame>) -> Self {
		Self { inbound, outbound }
	}

	/// Deliver a message to the host. Returns `false` once the host is gone.
	pub fn post(&self, message: InboundMessage) -> bool {
		self.inbound.send(message).is_ok()
	}

	/// Take the next frame sent by the host, if any.
	pub fn try_recv(&self) -> Option<OutboundFrame> {
		self.outbound.try_recv().ok()
	}

	/// Take every frame currently queued.
	pub fn drain(&self) -> Vec<OutboundFrame> {
		self.outbound.try_iter().collect()
	}

	/// Take every queued frame and decode it into a command.
	pub fn drain_commands(&self) -> Result<Vec<OutboundCommand>, ProtocolError> {
		self.drain().iter().map(OutboundCommand::from_frame).collect()
	}
}
