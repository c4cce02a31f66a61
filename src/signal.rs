use crate::cell::CellEvent;
use uuid::Uuid;

/// A token identifying a single handler registration.
///
/// Returned by [`Signal::subscribe`] and consumed by [`Signal::unsubscribe`].
/// Subscribing the same handler logic twice yields two independent
/// registrations with distinct tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Subscription(Uuid);

/// An ordered list of handlers fired when a cell announces a transition.
///
/// Handlers are invoked synchronously, in subscription order, and are
/// expected to be non-blocking. Each cell owns one signal per transition
/// kind (birth, death).
pub struct Signal {
    handlers: Vec<(Uuid, Box<dyn FnMut(CellEvent)>)>,
}

impl Signal {
    pub fn new() -> Signal {
        Signal {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler to the list. No deduplication is performed.
    pub fn subscribe(&mut self, handler: impl FnMut(CellEvent) + 'static) -> Subscription {
        let id = Uuid::new_v4();
        self.handlers.push((id, Box::new(handler)));
        Subscription(id)
    }

    /// Removes the registration identified by the token.
    ///
    /// Returns false if the token is unknown or was already removed. Other
    /// registrations of the same handler logic keep their own tokens and are
    /// left untouched.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match self
            .handlers
            .iter()
            .position(|(id, _)| *id == subscription.0)
        {
            Some(index) => {
                self.handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Invokes every currently subscribed handler, in subscription order.
    pub fn fire(&mut self, event: CellEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}
