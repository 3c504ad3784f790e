//! Sample encounter layout.

use anyhow::{Result, anyhow};
use combat_content::AttackProfileRegistry;
use combat_core::{CombatConfig, EntityId, ItemRef, Position};
use runtime::world::stat;
use runtime::{Actor, DriverTree, Encounter, Faction, Occluder, presets};

const SWORD: ItemRef = ItemRef(1);
const BOW: ItemRef = ItemRef(2);
const MAUL: ItemRef = ItemRef(3);
const MAIL: ItemRef = ItemRef(10);
const CLOAK: ItemRef = ItemRef(11);

pub struct Staged {
    pub encounter: Encounter,
    pub drivers: Vec<(EntityId, DriverTree)>,
}

/// Two knights and an archer against a goblin pack, with a pillar between.
pub fn skirmish(combat: &CombatConfig, profiles: &AttackProfileRegistry) -> Result<Staged> {
    let profile = |name: &str| {
        profiles
            .get(name)
            .ok_or_else(|| anyhow!("attack profile '{}' not found", name))
    };
    let slash = profile("slash")?;
    let shoot = profile("shoot")?;
    let crush = profile("crush")?;

    let mut encounter = Encounter::from_config(combat)?;
    let world = &mut encounter.world;
    world.define_item(SWORD, &[(stat::EDGE, 4.0), (stat::ACCURACY, 2.0)]);
    world.define_item(BOW, &[(stat::EDGE, 3.0), (stat::ACCURACY, 4.0)]);
    world.define_item(MAUL, &[(stat::EDGE, 5.0)]);
    world.define_item(MAIL, &[(stat::ARMOR, 4.0), (stat::EVASION, -1.0)]);
    world.define_item(CLOAK, &[(stat::EVASION, 2.0)]);
    world.add_occluder(Occluder::new(Position::new(0.0, 0.0, 4.0), 1.0));

    let mut drivers: Vec<(EntityId, DriverTree)> = Vec::new();

    let knight = |name: &str, x: f32| {
        Actor::new(name, Faction(0))
            .with_health(30.0)
            .with_stat(stat::LEVEL, 4.0)
            .with_stat(stat::ACCURACY, 8.0)
            .with_stat(stat::EVASION, 3.0)
            .wield(SWORD)
            .equip(MAIL)
            .at(Position::new(x, 0.0, 0.0))
    };
    let id = encounter.spawn(knight("Aldric", -1.0));
    drivers.push((id, presets::skirmisher(slash, 0.2)));
    let id = encounter.spawn(knight("Brenna", 1.0));
    drivers.push((id, presets::brute(slash)));

    let archer = Actor::new("Cael", Faction(0))
        .with_health(18.0)
        .with_stat(stat::LEVEL, 3.0)
        .with_stat(stat::ACCURACY, 10.0)
        .with_stat(stat::EVASION, 5.0)
        .wield(BOW)
        .equip(CLOAK)
        .at(Position::new(0.0, 0.0, -3.0));
    let id = encounter.spawn(archer);
    drivers.push((id, presets::turret(shoot)));

    for (index, x) in [-2.0, 0.0, 2.0].into_iter().enumerate() {
        let goblin = Actor::new(format!("gob-{index}"), Faction(1))
            .with_health(12.0)
            .with_stat(stat::LEVEL, 1.0)
            .with_stat(stat::ACCURACY, 5.0)
            .with_stat(stat::EVASION, 6.0)
            .wield(SWORD)
            .at(Position::new(x, 0.0, 8.0));
        let id = encounter.spawn(goblin);
        drivers.push((id, presets::skirmisher(slash, 0.3)));
    }

    let chief = Actor::new("Grol", Faction(1))
        .with_health(40.0)
        .with_stat(stat::LEVEL, 5.0)
        .with_stat(stat::ACCURACY, 6.0)
        .with_stat(stat::EVASION, 1.0)
        .with_stat(stat::ARMOR, 2.0)
        .wield(MAUL)
        .equip(MAIL)
        .at(Position::new(0.0, 0.0, 11.0));
    let id = encounter.spawn(chief);
    drivers.push((id, presets::brute(crush)));

    Ok(Staged { encounter, drivers })
}
