//! End-to-end encounters: threat, decisions, resolution, and kills together.

use combat_content::{ConfigLoader, ProfileLoader};
use combat_core::{AttackProfile, FormulaSpec, ItemRef, Position, PositionOracle, ThreatDecay};
use runtime::world::stat;
use runtime::{Actor, Arena, Encounter, Faction, RuntimeConfig, RuntimeError, TurnRecord, presets};

fn certain(damage: f32) -> AttackProfile {
    AttackProfile {
        hit_chance: FormulaSpec::constant(1.0),
        damage_min: FormulaSpec::constant(damage),
        damage_max: FormulaSpec::constant(damage),
        reach: 1.5,
    }
}

/// Coin-flip hits for 1 to 4 damage.
fn scrappy() -> AttackProfile {
    AttackProfile {
        hit_chance: FormulaSpec::constant(0.5),
        damage_min: FormulaSpec::constant(1.0),
        damage_max: FormulaSpec::constant(4.0),
        reach: 1.5,
    }
}

fn duel(seed: u64, profile: &AttackProfile) -> (Arena, runtime::Result<runtime::ArenaOutcome>) {
    let mut encounter = Encounter::new(ThreatDecay::over_time(0.1));
    let hero = encounter.spawn(Actor::new("hero", Faction(0)).with_health(6.0));
    let ogre = encounter.spawn(Actor::new("ogre", Faction(1)).with_health(6.0).at(Position::X));

    let mut arena = Arena::new(encounter, RuntimeConfig::default().with_seed(seed));
    arena.assign(hero, presets::brute(profile)).expect("hero alive");
    arena.assign(ogre, presets::brute(profile)).expect("ogre alive");
    arena.engage();

    let outcome = arena.run();
    (arena, outcome)
}

#[test]
fn duel_finishes_with_first_mover_winning() {
    let (arena, outcome) = duel(7, &certain(3.0));
    let outcome = outcome.expect("duel runs");

    assert_eq!(outcome.winner, Some(Faction(0)));
    assert_eq!(outcome.rounds, 2);
    assert_eq!(arena.encounter().world.ids().len(), 1);
    assert_eq!(arena.round(), outcome.rounds);
}

#[test]
fn same_seed_replays_identically() {
    let (first_arena, first) = duel(99, &scrappy());
    let (second_arena, second) = duel(99, &scrappy());

    assert_eq!(first.expect("first"), second.expect("second"));
    let survivors = |arena: &Arena| -> Vec<(u32, f32)> {
        let world = &arena.encounter().world;
        world
            .ids()
            .into_iter()
            .filter_map(|id| world.actor(id).map(|actor| (id.index, actor.health)))
            .collect()
    };
    assert_eq!(survivors(&first_arena), survivors(&second_arena));
}

#[test]
fn victims_gain_threat_on_their_attacker() {
    let mut encounter = Encounter::new(ThreatDecay::default());
    let hero = encounter.spawn(Actor::new("hero", Faction(0)));
    let ogre = encounter.spawn(Actor::new("ogre", Faction(1)).at(Position::X));

    let config = RuntimeConfig::default();
    let initial = config.initial_threat;
    let mut arena = Arena::new(encounter, config);
    arena.assign(hero, presets::brute(&certain(2.0))).expect("hero");
    arena.assign(ogre, presets::turret(&certain(0.0))).expect("ogre");
    arena.engage();

    let round = arena.step().expect("round");
    assert_eq!(round.turns.len(), 2);
    assert!(matches!(
        round.turns[0].report.record,
        Some(TurnRecord::Attack { target, .. }) if target == ogre
    ));

    let ogre_threat = arena.encounter().threat(ogre).and_then(|t| t.aggro(hero));
    assert_eq!(ogre_threat, Some(initial + 2.0));
    let ogre_health = arena.encounter().world.actor(ogre).map(|a| a.health);
    assert_eq!(ogre_health, Some(Actor::DEFAULT_HEALTH - 2.0));
}

#[test]
fn kills_retire_the_handle_and_expire_threat() {
    let mut encounter = Encounter::new(ThreatDecay::default());
    let hero = encounter.spawn(Actor::new("hero", Faction(0)));
    let rat = encounter.spawn(Actor::new("rat", Faction(1)).with_health(1.0).at(Position::X));
    let bat = encounter.spawn(Actor::new("bat", Faction(1)).at(Position::new(30.0, 0.0, 0.0)));

    let mut arena = Arena::new(encounter, RuntimeConfig::default());
    let profile = certain(5.0);
    for id in [hero, rat, bat] {
        arena.assign(id, presets::turret(&profile)).expect("alive");
    }
    arena.engage();

    let round = arena.step().expect("round one");
    assert_eq!(round.kills, vec![rat]);
    assert!(!arena.encounter().world.is_valid(rat));
    // The rat died before its turn came up
    assert_eq!(round.turns.len(), 2);
    assert_eq!(arena.encounter().threat(hero).map(|t| t.len()), Some(2));

    let round = arena.step().expect("round two");
    assert_eq!(round.expired, 1);
    assert_eq!(arena.encounter().threat(hero).map(|t| t.len()), Some(1));
}

#[test]
fn assembly_mistakes_are_reported() {
    let mut encounter = Encounter::new(ThreatDecay::default());
    let hero = encounter.spawn(Actor::new("hero", Faction(0)));
    let ghost = encounter.spawn(Actor::new("ghost", Faction(1)));
    encounter.despawn(ghost);

    let mut arena = Arena::new(encounter, RuntimeConfig::default());
    assert!(matches!(
        arena.assign(ghost, presets::brute(&certain(1.0))),
        Err(RuntimeError::UnknownEntity(id)) if id == ghost
    ));
    assert!(matches!(arena.step(), Err(RuntimeError::MissingDriver(id)) if id == hero));
}

#[test]
fn fight_stops_at_the_round_limit() {
    let mut encounter = Encounter::new(ThreatDecay::default());
    let a = encounter.spawn(Actor::new("a", Faction(0)));
    let b = encounter.spawn(Actor::new("b", Faction(1)).at(Position::new(50.0, 0.0, 0.0)));

    let mut arena = Arena::new(encounter, RuntimeConfig::default().with_max_rounds(3));
    arena.assign(a, presets::turret(&certain(1.0))).expect("a");
    arena.assign(b, presets::turret(&certain(1.0))).expect("b");
    arena.engage();

    let outcome = arena.run().expect("run");
    assert_eq!(outcome.rounds, 3);
    assert_eq!(outcome.winner, None);
}

#[test]
fn shipped_content_drives_an_encounter() {
    let config = ConfigLoader::embedded().expect("combat config");
    let profiles = ProfileLoader::embedded().expect("profiles");
    let slash = profiles.get("slash").expect("slash profile").clone();

    let mut encounter = Encounter::from_config(&config).expect("valid config");
    encounter.world.define_item(ItemRef(1), &[(stat::EDGE, 4.0)]);
    encounter.world.define_item(ItemRef(2), &[(stat::ARMOR, 2.0), (stat::EVASION, 1.0)]);

    let knight = encounter.spawn(
        Actor::new("knight", Faction(0))
            .with_stat(stat::LEVEL, 3.0)
            .with_stat(stat::ACCURACY, 10.0)
            .wield(ItemRef(1))
            .equip(ItemRef(2)),
    );
    let goblin = encounter.spawn(
        Actor::new("goblin", Faction(1))
            .with_health(8.0)
            .with_stat(stat::ACCURACY, 4.0)
            .with_stat(stat::EVASION, 3.0)
            .wield(ItemRef(1))
            .at(Position::new(3.0, 0.0, 0.0)),
    );

    let mut arena = Arena::new(encounter, RuntimeConfig::default().with_seed(3));
    arena.assign(knight, presets::skirmisher(&slash, 0.25)).expect("knight");
    arena.assign(goblin, presets::skirmisher(&slash, 0.25)).expect("goblin");
    arena.engage();

    let outcome = arena.run().expect("run");
    assert!(outcome.rounds >= 1);
    assert!(outcome.rounds <= RuntimeConfig::default().max_rounds);
}
