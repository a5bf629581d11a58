//! Domain events raised by entities during a tick
//!
//! Entities push into an `EventQueue` owned by the active phase; the engine
//! drains it once per tick and hands each event back to the phase.

/// In-simulation notification, distinct from raw input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The craft fired a volley
    CraftFired,
    /// An asteroid lost its last life point
    EnemyDestroyed { bonus: u32 },
    /// The craft was destroyed
    PlayerDestroyed,
}

/// Ordered per-tick event buffer
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
