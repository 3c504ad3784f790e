//! Encounter: the world plus each actor's threat table.
use std::collections::BTreeMap;

use combat_core::{CombatConfig, EntityId, GameEnv, OracleError, ThreatDecay, ThreatTable};
use tracing::trace;

use crate::error::Result;
use crate::world::{Actor, World};

/// Everything a driver tree reads and writes during a turn.
///
/// The world and the threat tables are separate fields so a driver can rank
/// its own table while reading positions from the world.
#[derive(Clone, Debug, Default)]
pub struct Encounter {
    pub world: World,
    pub threat: BTreeMap<EntityId, ThreatTable>,
    decay: ThreatDecay,
}

impl Encounter {
    pub fn new(decay: ThreatDecay) -> Self {
        Self {
            world: World::new(),
            threat: BTreeMap::new(),
            decay,
        }
    }

    /// Builds an encounter from validated combat tunables.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Config`](crate::RuntimeError::Config) if the
    /// config does not validate.
    pub fn from_config(config: &CombatConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.threat))
    }

    pub fn env(&self) -> GameEnv<'_> {
        self.world.env()
    }

    pub fn spawn(&mut self, actor: Actor) -> EntityId {
        let id = self.world.spawn(actor);
        self.threat.insert(id, ThreatTable::new(self.decay));
        id
    }

    pub fn despawn(&mut self, id: EntityId) -> Option<Actor> {
        self.threat.remove(&id);
        self.world.despawn(id)
    }

    pub fn threat(&self, owner: EntityId) -> Option<&ThreatTable> {
        self.threat.get(&owner)
    }

    pub fn threat_mut(&mut self, owner: EntityId) -> Option<&mut ThreatTable> {
        self.threat.get_mut(&owner)
    }

    /// Adds `amount` threat toward `source` in `owner`'s table.
    pub fn provoke(&mut self, owner: EntityId, source: EntityId, amount: f32) {
        if let Some(table) = self.threat.get_mut(&owner) {
            table.add_aggro(source, amount);
        }
    }

    /// Seeds every actor's table with `amount` toward each hostile actor.
    pub fn engage(&mut self, amount: f32) {
        let ids = self.world.ids();
        for &owner in &ids {
            for &source in &ids {
                if self.world.is_hostile(owner, source) {
                    self.provoke(owner, source, amount);
                }
            }
        }
    }

    /// Decays every threat table by `elapsed` seconds.
    ///
    /// Returns how many entries were dropped in total.
    pub fn decay_threat(&mut self, elapsed: f32) -> std::result::Result<usize, OracleError> {
        let env = self.world.env();
        let positions = env.positions()?;
        let sight = env.sight()?;

        let mut removed = 0;
        for (&owner, table) in &mut self.threat {
            let dropped = table.tick(owner, elapsed, positions, sight);
            if dropped > 0 {
                trace!(%owner, dropped, "threat entries expired");
            }
            removed += dropped;
        }
        Ok(removed)
    }
}
