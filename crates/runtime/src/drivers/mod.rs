//! Game-specific leaf drivers and ready-made trees.
//!
//! Leaves only record a [`TurnRecord`](crate::TurnRecord) in the turn state;
//! the arena applies it afterwards. Trees are assembled from these leaves
//! with the `turn-driver` composites and decorators.
mod attack;
mod movement;
pub mod presets;
mod wait;

pub use attack::AttackDriver;
pub use movement::{ApproachDriver, RetreatDriver};
pub use wait::WaitDriver;

use combat_core::{EntityId, Position, PositionOracle, ThreatEntry};
use turn_driver::TurnDriver;

use crate::encounter::Encounter;
use crate::turn::TurnState;
use crate::world::World;

/// Driver tree over the reference encounter.
pub type DriverTree = Box<dyn TurnDriver<Encounter, TurnState>>;

/// Highest-threat hostile of `actor` accepted by `filter(position)`.
pub(crate) fn top_hostile(
    encounter: &mut Encounter,
    actor: EntityId,
    mut filter: impl FnMut(Position) -> bool,
) -> Option<(ThreatEntry, Position)> {
    let Encounter { world, threat, .. } = encounter;
    let world: &World = world;
    let table = threat.get_mut(&actor)?;
    let entry = table.top_where(world, |source, _| {
        world.is_hostile(actor, source) && world.position(source).is_some_and(&mut filter)
    })?;
    Some((entry, world.position(entry.source)?))
}
