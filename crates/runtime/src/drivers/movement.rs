//! Positioning relative to the top-threat hostile.
use combat_core::{Position, PositionOracle};
use turn_driver::TurnDriver;

use super::top_hostile;
use crate::encounter::Encounter;
use crate::turn::{TurnRecord, TurnState};

/// Closes distance to the top-threat hostile until it is within `reach`.
#[derive(Clone, Copy, Debug)]
pub struct ApproachDriver {
    reach: f32,
    step: f32,
}

impl ApproachDriver {
    pub fn new(reach: f32, step: f32) -> Self {
        Self { reach, step }
    }

    fn destination(&self, encounter: &mut Encounter, state: &TurnState) -> Option<Position> {
        let origin = encounter.world.position(state.actor)?;
        let reach = self.reach;
        let (_, target) = top_hostile(encounter, state.actor, |_| true)?;

        let gap = origin.distance(target) - reach;
        if gap <= 0.0 {
            return None;
        }
        let direction = (target - origin).normalize_or_zero();
        Some(origin + direction * gap.min(self.step))
    }
}

impl TurnDriver<Encounter, TurnState> for ApproachDriver {
    fn is_enabled(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        self.destination(encounter, state).is_some()
    }

    fn priority(&self, _encounter: &mut Encounter, _state: &mut TurnState) -> f32 {
        0.0
    }

    fn execute(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        match self.destination(encounter, state) {
            Some(to) => {
                state.record = Some(TurnRecord::Move { to });
                true
            }
            None => false,
        }
    }
}

/// Steps directly away from the top-threat hostile.
#[derive(Clone, Copy, Debug)]
pub struct RetreatDriver {
    step: f32,
}

impl RetreatDriver {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    fn destination(&self, encounter: &mut Encounter, state: &TurnState) -> Option<Position> {
        let origin = encounter.world.position(state.actor)?;
        let (_, threat) = top_hostile(encounter, state.actor, |_| true)?;

        let away = (origin - threat).normalize_or_zero();
        (away != Position::ZERO).then(|| origin + away * self.step)
    }
}

impl TurnDriver<Encounter, TurnState> for RetreatDriver {
    fn is_enabled(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        self.destination(encounter, state).is_some()
    }

    fn priority(&self, _encounter: &mut Encounter, _state: &mut TurnState) -> f32 {
        0.0
    }

    fn execute(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        match self.destination(encounter, state) {
            Some(to) => {
                state.record = Some(TurnRecord::Move { to });
                true
            }
            None => false,
        }
    }
}
