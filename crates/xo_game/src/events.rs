//! Publish/subscribe notifications emitted by the model.
//!
//! Each notification kind has its own [`Subject`]. Listeners run
//! synchronously, in subscription order, inside the call that triggered
//! them. For delivery to another task, [`Subject::forward_to`] pushes
//! payloads into an unbounded channel without waiting on the receiver.

use super::position::Position;
use super::types::{MoveNotice, Player};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Handle returned by [`Subject::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Listener<T> = Box<dyn FnMut(&T) + Send>;

/// An ordered list of listeners for one notification kind.
pub struct Subject<T> {
    name: &'static str,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T> Subject<T> {
    /// Creates a subject with no listeners. `name` only appears in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener; it sees every payload published from now on.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subject = self.name, %id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        debug!(subject = self.name, %id, removed, "Listener unsubscribed");
        removed
    }

    /// Invokes every listener with `payload`.
    pub fn publish(&mut self, payload: &T) {
        trace!(subject = self.name, listeners = self.listeners.len(), "Publishing");
        for (_, listener) in &mut self.listeners {
            listener(payload);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Forwards every payload into `sender`.
    ///
    /// Sending never blocks. Once the receiver is dropped, payloads are
    /// discarded.
    pub fn forward_to(&mut self, sender: mpsc::UnboundedSender<T>) -> SubscriptionId {
        self.forward_with(sender, T::clone)
    }
}

impl<T> Subject<T> {
    /// Forwards every payload into `sender` after mapping it with `map`.
    pub fn forward_with<U, F>(&mut self, sender: mpsc::UnboundedSender<U>, map: F) -> SubscriptionId
    where
        U: Send + 'static,
        F: Fn(&T) -> U + Send + 'static,
    {
        let name = self.name;
        self.subscribe(move |payload| {
            if sender.send(map(payload)).is_err() {
                trace!(subject = name, "Receiver dropped, notification discarded");
            }
        })
    }
}

impl<T> std::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.name)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The three notification kinds as one type, for single-channel delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to this player.
    TurnChanged(Player),
    /// A mark was placed, or a move onto an occupied cell was attempted.
    Move(MoveNotice),
    /// The game ended; `None` means a draw.
    GameComplete(Option<Player>),
}

impl GameEvent {
    /// The placed position, for a move event that placed a mark.
    pub fn placed(&self) -> Option<Position> {
        match self {
            GameEvent::Move(notice) => notice.position(),
            GameEvent::TurnChanged(_) | GameEvent::GameComplete(_) => None,
        }
    }
}

/// The model's three notification channels.
#[derive(Debug)]
pub(crate) struct GameSubjects {
    pub(crate) turn_changed: Subject<Player>,
    pub(crate) moves: Subject<MoveNotice>,
    pub(crate) game_complete: Subject<Option<Player>>,
}

impl GameSubjects {
    pub(crate) fn new() -> Self {
        Self {
            turn_changed: Subject::new("turn_changed"),
            moves: Subject::new("move"),
            game_complete: Subject::new("game_complete"),
        }
    }
}
