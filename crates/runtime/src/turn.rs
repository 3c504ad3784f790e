//! Per-turn scratch state threaded through a driver tree.
use combat_core::{AttackOutcome, EntityId, PcgRng, Position};

/// What an actor decided to do this turn. Applied by the arena afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurnRecord {
    Attack {
        target: EntityId,
        outcome: AttackOutcome,
    },
    Move { to: Position },
    Wait,
}

/// Scratch record owned by the turn runner for one actor's turn.
#[derive(Clone, Debug)]
pub struct TurnState {
    pub actor: EntityId,
    pub round: u64,
    /// Stream seeded for this actor and round.
    pub rng: PcgRng,
    pub record: Option<TurnRecord>,
}

impl TurnState {
    pub fn new(actor: EntityId, round: u64, rng: PcgRng) -> Self {
        Self {
            actor,
            round,
            rng,
            record: None,
        }
    }
}
