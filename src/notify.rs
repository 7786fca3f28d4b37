//! Publish/subscribe seam for application-wide notifications.
//!
//! The host only consumes one topic (heading jumps from the outline), but it
//! never reaches for a global bus: the embedder hands it a [`NotificationBus`]
//! and the host owns its subscription token until teardown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::trace;

/// Callback invoked with the payload of every notification on a topic.
pub type NotificationHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Identifies one subscription so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// Topic-based notification facility supplied by the embedder.
pub trait NotificationBus: Send + Sync {
	fn subscribe(&self, topic: &str, handler: NotificationHandler) -> SubscriptionToken;

	/// Remove a subscription. Unknown tokens are ignored.
	fn unsubscribe(&self, token: SubscriptionToken);
}

struct Subscriber {
	token: SubscriptionToken,
	topic: String,
	handler: NotificationHandler,
}

#[derive(Default)]
struct Registry {
	next_id: u64,
	subscribers: Vec<Subscriber>,
}

/// In-process [`NotificationBus`]. Clones share the same subscribers.
#[derive(Clone, Default)]
pub struct LocalBus {
	registry: Arc<Mutex<Registry>>,
}

impl LocalBus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Deliver `payload` to every subscriber of `topic` in subscription order.
	///
	/// Handlers run after the registry lock is released, so they may
	/// subscribe or unsubscribe freely. Returns the number of handlers run.
	pub fn publish(&self, topic: &str, payload: &Value) -> usize {
		let handlers: Vec<NotificationHandler> = self
			.registry()
			.subscribers
			.iter()
			.filter(|subscriber| subscriber.topic == topic)
			.map(|subscriber| Arc::clone(&subscriber.handler))
			.collect();

		trace!(topic, subscribers = handlers.len(), "publishing notification");
		for handler in &handlers {
			handler(payload);
		}
		handlers.len()
	}

	pub fn subscriber_count(&self, topic: &str) -> usize {
		self.registry()
			.subscribers
			.iter()
			.filter(|subscriber| subscriber.topic == topic)
			.count()
	}

	fn registry(&self) -> MutexGuard<'_, Registry> {
		self.registry.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl NotificationBus for LocalBus {
	fn subscribe(&self, topic: &str, handler: NotificationHandler) -> SubscriptionToken {
		let mut registry = self.registry();
		registry.next_id += 1;
		let token = SubscriptionToken(registry.next_id);
		registry.subscribers.push(Subscriber {
			token,
			topic: topic.to_string(),
			handler,
		});
		token
	}

	fn unsubscribe(&self, token: SubscriptionToken) {
		self.registry()
			.subscribers
			.retain(|subscriber| subscriber.token != token);
	}
}
