//! Actors taking part in an encounter.
use std::collections::HashMap;
use std::fmt;

use combat_core::{ItemRef, Position, StatId};

/// Side an actor fights for. Actors of different factions are hostile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Faction(pub u8);

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "faction {}", self.0)
    }
}

/// Live combatant.
#[derive(Clone, Debug)]
pub struct Actor {
    pub name: String,
    pub faction: Faction,
    pub position: Position,
    pub health: f32,
    pub max_health: f32,
    pub stats: HashMap<StatId, f32>,
    pub equipment: Vec<ItemRef>,
    /// Item whose stats form the weapon snapshot. Also listed in `equipment`.
    pub weapon: Option<ItemRef>,
}

impl Actor {
    pub const DEFAULT_HEALTH: f32 = 20.0;

    pub fn new(name: impl Into<String>, faction: Faction) -> Self {
        Self {
            name: name.into(),
            faction,
            position: Position::ZERO,
            health: Self::DEFAULT_HEALTH,
            max_health: Self::DEFAULT_HEALTH,
            stats: HashMap::new(),
            equipment: Vec::new(),
            weapon: None,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self.max_health = health;
        self
    }

    #[must_use]
    pub fn with_stat(mut self, stat: StatId, value: f32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    #[must_use]
    pub fn equip(mut self, item: ItemRef) -> Self {
        self.equipment.push(item);
        self
    }

    /// Equips `item` and uses it as the weapon.
    #[must_use]
    pub fn wield(mut self, item: ItemRef) -> Self {
        self.weapon = Some(item);
        self.equip(item)
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
