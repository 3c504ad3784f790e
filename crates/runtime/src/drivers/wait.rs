use turn_driver::TurnDriver;

use crate::encounter::Encounter;
use crate::turn::{TurnRecord, TurnState};

/// Fallback that is always enabled and does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitDriver;

impl TurnDriver<Encounter, TurnState> for WaitDriver {
    fn is_enabled(&self, _encounter: &mut Encounter, _state: &mut TurnState) -> bool {
        true
    }

    fn priority(&self, _encounter: &mut Encounter, _state: &mut TurnState) -> f32 {
        0.0
    }

    fn execute(&self, _encounter: &mut Encounter, state: &mut TurnState) -> bool {
        state.record = Some(TurnRecord::Wait);
        true
    }
}
