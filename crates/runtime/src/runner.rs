//! Runs one actor's turn through its driver tree.
use combat_core::{EntityId, PcgRng, compute_seed};
use tracing::{debug, debug_span, trace};
use turn_driver::{DISABLED, TurnDriver, is_disabled};

use crate::encounter::Encounter;
use crate::turn::{TurnRecord, TurnState};

/// Stream id for the per-turn RNG in [`compute_seed`].
const TURN_STREAM: u32 = 0;

/// Outcome of running one turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnReport {
    pub acted: bool,
    /// Root priority at decision time, or [`DISABLED`].
    pub priority: f32,
    pub record: Option<TurnRecord>,
}

impl TurnReport {
    pub const IDLE: Self = Self {
        acted: false,
        priority: DISABLED,
        record: None,
    };
}

/// Synchronous turn scheduler.
///
/// Every turn gets a fresh [`TurnState`] whose RNG is derived from the base
/// seed, the round, and the actor, so replays are exact.
#[derive(Clone, Copy, Debug)]
pub struct TurnRunner {
    seed: u64,
}

impl TurnRunner {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn state_for(&self, actor: EntityId, round: u64) -> TurnState {
        let rng = PcgRng::new(compute_seed(self.seed, round, actor, TURN_STREAM));
        TurnState::new(actor, round, rng)
    }

    /// `init`, then `is_enabled`/`priority`, then `execute` on `driver`.
    ///
    /// A tree that claims to be enabled but ranks itself [`DISABLED`] is
    /// treated as idle and never executed.
    pub fn run_turn<D>(
        &self,
        driver: &D,
        encounter: &mut Encounter,
        actor: EntityId,
        round: u64,
    ) -> TurnReport
    where
        D: TurnDriver<Encounter, TurnState> + ?Sized,
    {
        let _span = debug_span!("turn", %actor, round).entered();
        let mut state = self.state_for(actor, round);

        driver.init(encounter, &mut state);

        if !driver.is_enabled(encounter, &mut state) {
            debug!("no enabled driver");
            return TurnReport::IDLE;
        }

        let priority = driver.priority(encounter, &mut state);
        if is_disabled(priority) {
            debug!("enabled driver reported a disabled priority");
            return TurnReport::IDLE;
        }

        let acted = driver.execute(encounter, &mut state);
        debug!(priority, acted, record = ?state.record, "turn decided");
        if !acted {
            trace!("driver declined to act");
        }

        TurnReport {
            acted,
            priority,
            record: state.record,
        }
    }
}
