//! Complete driver trees for common combatant archetypes.
//!
//! ```text
//! skirmisher()
//!   └─ Composite
//!       ├─ Gated(health < flee_below) → FixedPriority(100) → Retreat
//!       ├─ Composite(bias 10)
//!       │   ├─ Attack      (priority = threat)
//!       │   └─ Approach    (priority 0, loses ties to Attack)
//!       └─ Wait            (priority 0)
//! ```

use combat_core::AttackProfile;
use turn_driver::builder::{biased, composite, fixed_priority, gated};

use super::{ApproachDriver, AttackDriver, DriverTree, RetreatDriver, WaitDriver};
use crate::encounter::Encounter;
use crate::turn::TurnState;

/// Distance covered by one movement turn.
pub const STEP: f32 = 1.0;

/// Priority of retreating once badly hurt; outranks everything else.
pub const RETREAT_PRIORITY: f32 = 100.0;

/// Bias that puts engaging ahead of waiting.
pub const ENGAGE_BIAS: f32 = 10.0;

/// Attack or close in; never retreats.
pub fn brute(profile: &AttackProfile) -> DriverTree {
    composite(vec![engage(profile), Box::new(WaitDriver)])
}

/// Attacks from where it stands, waiting when nothing is in reach.
pub fn turret(profile: &AttackProfile) -> DriverTree {
    composite(vec![
        biased(ENGAGE_BIAS, vec![Box::new(AttackDriver::new(profile))]),
        Box::new(WaitDriver),
    ])
}

/// Fights like a brute but retreats when health drops below `flee_below`
/// (a fraction of max health).
pub fn skirmisher(profile: &AttackProfile, flee_below: f32) -> DriverTree {
    let hurt = move |encounter: &Encounter, state: &TurnState| {
        encounter
            .world
            .health_ratio(state.actor)
            .is_some_and(|ratio| ratio < flee_below)
    };

    composite(vec![
        gated(hurt, fixed_priority(RETREAT_PRIORITY, Box::new(RetreatDriver::new(STEP)))),
        engage(profile),
        Box::new(WaitDriver),
    ])
}

fn engage(profile: &AttackProfile) -> DriverTree {
    biased(
        ENGAGE_BIAS,
        vec![
            Box::new(AttackDriver::new(profile)),
            Box::new(ApproachDriver::new(profile.reach, STEP)),
        ],
    )
}
