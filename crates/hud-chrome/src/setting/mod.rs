//! Observable setting cells
//!
//! A `Setting<T>` is a value cell with change-listener registration. The host
//! settings system persists the value externally; this crate only defines the
//! observation contract: listeners are invoked synchronously, in subscription
//! order, with the previous and new value, once per accepted change.

/// Handle identifying one subscription on a [`Setting`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T, &T)>;

/// Observable value cell with explicit subscriptions
pub struct Setting<T> {
    value: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Setting<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Setting")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Clone + PartialEq> Setting<T> {
    /// Create a setting with an initial value
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Get the current value
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Set a new value, notifying listeners if it differs
    ///
    /// Returns true when the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let prev = std::mem::replace(&mut self.value, value);
        for (_, listener) in &mut self.listeners {
            listener(&prev, &self.value);
        }
        true
    }

    /// Register a change listener, returning its subscription handle
    pub fn subscribe(&mut self, listener: impl FnMut(&T, &T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription; returns false if the handle is unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}
