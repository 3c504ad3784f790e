//! In-memory world implementing every collaborator oracle.
//!
//! Actors live in generation-checked slots: despawning bumps the slot's
//! generation, so stale [`EntityId`]s stop resolving instead of aliasing the
//! next occupant.
mod actor;
mod sight;
pub mod stat;

pub use actor::{Actor, Faction};
pub use sight::Occluder;

use std::collections::HashMap;

use combat_core::{
    EntityId, Env, GameEnv, ItemRef, Position, PositionOracle, SightOracle, StatId, StatOracle,
};

#[derive(Clone, Debug, Default)]
struct Slot {
    generation: u32,
    actor: Option<Actor>,
}

#[derive(Clone, Debug, Default)]
pub struct World {
    slots: Vec<Slot>,
    items: HashMap<ItemRef, HashMap<StatId, f32>>,
    occluders: Vec<Occluder>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) the stats an item grants.
    pub fn define_item(&mut self, item: ItemRef, stats: &[(StatId, f32)]) {
        self.items.insert(item, stats.iter().copied().collect());
    }

    pub fn add_occluder(&mut self, occluder: Occluder) {
        self.occluders.push(occluder);
    }

    /// Places `actor` in the first free slot.
    pub fn spawn(&mut self, actor: Actor) -> EntityId {
        if let Some(index) = self.slots.iter().position(|slot| slot.actor.is_none()) {
            let slot = &mut self.slots[index];
            slot.actor = Some(actor);
            return EntityId::new(index as u32, slot.generation);
        }

        self.slots.push(Slot {
            generation: 0,
            actor: Some(actor),
        });
        EntityId::first((self.slots.len() - 1) as u32)
    }

    /// Removes the actor and retires its handle.
    pub fn despawn(&mut self, id: EntityId) -> Option<Actor> {
        let slot = self.slot_mut(id)?;
        let actor = slot.actor.take();
        slot.generation = slot.generation.wrapping_add(1);
        actor
    }

    fn slot_mut(&mut self, id: EntityId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation && slot.actor.is_some())
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.actor.as_ref()
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.slot_mut(id)?.actor.as_mut()
    }

    /// Live actors in slot order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.actor.is_some())
            .map(|(index, slot)| EntityId::new(index as u32, slot.generation))
            .collect()
    }

    pub fn is_hostile(&self, a: EntityId, b: EntityId) -> bool {
        match (self.actor(a), self.actor(b)) {
            (Some(a), Some(b)) => a.faction != b.faction,
            _ => false,
        }
    }

    pub fn health_ratio(&self, id: EntityId) -> Option<f32> {
        self.actor(id).map(Actor::health_ratio)
    }

    /// Factions that still have a living actor, sorted.
    pub fn factions(&self) -> Vec<Faction> {
        let mut factions: Vec<_> = self
            .slots
            .iter()
            .filter_map(|slot| slot.actor.as_ref())
            .filter(|actor| actor.is_alive())
            .map(|actor| actor.faction)
            .collect();
        factions.sort_unstable();
        factions.dedup();
        factions
    }

    /// Oracle bundle over this world.
    pub fn env(&self) -> GameEnv<'_> {
        Env::with_all(self, self, self).into_game_env()
    }
}

impl StatOracle for World {
    fn stat(&self, entity: EntityId, stat: StatId) -> Option<f32> {
        self.actor(entity)?.stats.get(&stat).copied()
    }

    fn equipped_items(&self, entity: EntityId) -> &[ItemRef] {
        self.actor(entity)
            .map(|actor| actor.equipment.as_slice())
            .unwrap_or(&[])
    }

    fn item_stat(&self, item: ItemRef, stat: StatId) -> Option<f32> {
        self.items.get(&item)?.get(&stat).copied()
    }
}

impl SightOracle for World {
    fn has_clear_line(&self, from: Position, to: Position) -> bool {
        !self
            .occluders
            .iter()
            .any(|occluder| occluder.blocks(from, to))
    }
}

impl PositionOracle for World {
    fn position(&self, entity: EntityId) -> Option<Position> {
        self.actor(entity).map(|actor| actor.position)
    }
}
