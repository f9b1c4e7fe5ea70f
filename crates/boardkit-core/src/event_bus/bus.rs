//! Event Bus implementation.
//!
//! Provides the EventBus struct used by the camera, the selection, and the
//! transformer to notify the render scheduler. Delivery is synchronous and
//! handlers run in the order they subscribed.

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use super::events::{BoardEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &BoardEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Arc<dyn Fn(BoardEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: EventHandler,
}

/// Synchronous, ordered publish/subscribe hub
pub struct EventBus {
    /// Registered handlers in subscription order
    subscriptions: RwLock<Vec<Subscription>>,
}

impl EventBus {
    /// Create a new event bus with no subscribers
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
        }
    }

    /// Create a new shared event bus
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Publish an event to all matching subscribers
    ///
    /// Handlers are invoked on the calling thread, in subscription order.
    /// The handler list is snapshotted first, so a handler may subscribe or
    /// unsubscribe without deadlocking; such changes apply to the next event.
    ///
    /// Returns the number of handlers that received the event.
    pub fn publish(&self, event: BoardEvent) -> usize {
        let handlers: Vec<EventHandler> = self
            .subscriptions
            .read()
            .iter()
            .filter(|sub| sub.filter.matches(&event))
            .map(|sub| Arc::clone(&sub.handler))
            .collect();

        tracing::trace!("Publishing {} to {} handlers", event.description(), handlers.len());

        for handler in &handlers {
            handler(event.clone());
        }
        handlers.len()
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler will be called on the publishing thread, so it should
    /// return quickly to avoid blocking pointer handling.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(BoardEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.write().push(Subscription {
            id,
            filter,
            handler: Arc::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
