//! Gameplay event channel
//!
//! Collision detection never mutates game state directly; it publishes
//! events here and the dispatch loop at the end of the tick resolves
//! them. The event set is closed; there are no dynamic channels.

use std::collections::VecDeque;

use super::entity::EntityId;

/// Everything that can happen between detection and resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A laser overlapped a live enemy (one event per distinct pair)
    LaserHitEnemy { laser: EntityId, enemy: EntityId },
    /// A live enemy overlapped the hero
    EnemyHitHero { enemy: EntityId },
    /// A support ship overlapped a live enemy; both are forfeit
    SupportHitEnemy { support: EntityId, enemy: EntityId },
    /// All enemies dead with the hero alive
    Win,
    /// Hero out of lives
    Loss,
    /// Confirm pressed while frozen
    RestartRequested,
}

/// FIFO queue of pending events.
///
/// Handlers may emit while draining (a kill can emit `Win`), so the queue
/// is popped one event at a time rather than swapped out wholesale.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    queue: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.queue.pop_front()
    }

    /// Drop pending events (session teardown)
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
