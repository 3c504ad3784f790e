//! Attacks the most threatening hostile within reach.
use combat_core::{
    AggregationMode, AttackProfile, AttackRequest, AttackResolver, EntityId, GameEnv, ItemRef,
    OracleError, PositionOracle, StatId, StatSnapshot,
};
use turn_driver::{DISABLED, TurnDriver};

use super::top_hostile;
use crate::encounter::Encounter;
use crate::turn::{TurnRecord, TurnState};
use crate::world::stat;

/// Resolves an attack against the top-threat hostile in reach.
///
/// Priority is `base + threat * threat_weight`, so angrier actors prefer
/// attacking over their other options.
pub struct AttackDriver {
    resolver: AttackResolver,
    reach: f32,
    stats: Vec<StatId>,
    mode: AggregationMode,
    base_priority: f32,
    threat_weight: f32,
}

struct Snapshots {
    weapon: StatSnapshot,
    source: StatSnapshot,
    target: StatSnapshot,
}

impl AttackDriver {
    pub fn new(profile: &AttackProfile) -> Self {
        Self::with_resolver(profile.resolver(), profile.reach)
    }

    pub fn with_resolver(resolver: AttackResolver, reach: f32) -> Self {
        Self {
            resolver,
            reach,
            stats: stat::ALL.to_vec(),
            mode: AggregationMode::Add,
            base_priority: 0.0,
            threat_weight: 1.0,
        }
    }

    /// Stats captured into snapshots before resolving.
    #[must_use]
    pub fn with_stats(mut self, stats: impl Into<Vec<StatId>>) -> Self {
        self.stats = stats.into();
        self
    }

    /// How equipment contributions are combined.
    #[must_use]
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, base: f32, threat_weight: f32) -> Self {
        self.base_priority = base;
        self.threat_weight = threat_weight;
        self
    }

    fn target(&self, encounter: &mut Encounter, actor: EntityId) -> Option<(EntityId, f32)> {
        let origin = encounter.world.position(actor)?;
        let reach = self.reach;
        top_hostile(encounter, actor, |position| position.distance(origin) <= reach)
            .map(|(entry, _)| (entry.source, entry.score))
    }

    fn snapshots(
        &self,
        env: &GameEnv<'_>,
        actor: EntityId,
        weapon: Option<ItemRef>,
        target: EntityId,
    ) -> Result<Snapshots, OracleError> {
        let stats = env.stats()?;
        let weapon = weapon
            .map(|item| StatSnapshot::capture_item(stats, item, &self.stats))
            .unwrap_or_default();

        Ok(Snapshots {
            weapon,
            source: StatSnapshot::capture_equipped(stats, actor, &self.stats, self.mode),
            target: StatSnapshot::capture_equipped(stats, target, &self.stats, self.mode),
        })
    }
}

impl TurnDriver<Encounter, TurnState> for AttackDriver {
    fn is_enabled(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        self.target(encounter, state.actor).is_some()
    }

    fn priority(&self, encounter: &mut Encounter, state: &mut TurnState) -> f32 {
        match self.target(encounter, state.actor) {
            Some((_, score)) => self.base_priority + score * self.threat_weight,
            None => DISABLED,
        }
    }

    fn execute(&self, encounter: &mut Encounter, state: &mut TurnState) -> bool {
        let Some((target, _)) = self.target(encounter, state.actor) else {
            return false;
        };
        let weapon = encounter.world.actor(state.actor).and_then(|actor| actor.weapon);
        let env = encounter.env();
        let (Ok(positions), Ok(snapshots)) = (
            env.positions(),
            self.snapshots(&env, state.actor, weapon, target),
        ) else {
            return false;
        };
        let Some(origin) = positions.position(state.actor) else {
            return false;
        };

        let request = AttackRequest {
            weapon: &snapshots.weapon,
            source: &snapshots.source,
            target: &snapshots.target,
            origin,
            destination: positions.position(target),
        };
        let outcome = self.resolver.resolve(&request, &mut state.rng);
        state.record = Some(TurnRecord::Attack { target, outcome });
        true
    }
}
