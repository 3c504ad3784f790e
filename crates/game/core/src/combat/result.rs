//! Attack resolution.

use crate::env::RandomSource;
use crate::stats::StatSnapshot;
use crate::types::Position;

use super::damage::{DamageModel, DamageRange};
use super::formula::FormulaInput;
use super::hit::{HitChanceModel, check_hit};

/// Result of one attack attempt. Produced per call, never stored by the core.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub hit: bool,
    /// Damage dealt. Always `0` on a miss.
    pub damage: f32,
}

impl AttackOutcome {
    pub const MISS: Self = Self {
        hit: false,
        damage: 0.0,
    };

    pub const fn hit(damage: f32) -> Self {
        Self { hit: true, damage }
    }
}

/// Arguments of a single resolution call.
#[derive(Clone, Copy, Debug)]
pub struct AttackRequest<'a> {
    pub weapon: &'a StatSnapshot,
    pub source: &'a StatSnapshot,
    pub target: &'a StatSnapshot,
    /// Attacker position.
    pub origin: Position,
    /// Point being attacked, if the attack is aimed at a location.
    pub destination: Option<Position>,
}

impl<'a> AttackRequest<'a> {
    pub fn distance(&self) -> Option<f32> {
        self.destination
            .map(|destination| self.origin.distance(destination))
    }

    pub fn input(&self) -> FormulaInput<'a> {
        FormulaInput {
            weapon: self.weapon,
            source: self.source,
            target: self.target,
            distance: self.distance(),
        }
    }
}

/// Combines a hit chance model and a damage model.
///
/// Resolution is stateless: it reads snapshots, draws exactly one sample,
/// and leaves applying the outcome to the caller.
pub struct AttackResolver {
    hit: HitChanceModel,
    damage: DamageModel,
}

impl AttackResolver {
    pub fn new(hit: HitChanceModel, damage: DamageModel) -> Self {
        Self { hit, damage }
    }

    pub fn hit_chance(&self, request: &AttackRequest<'_>) -> f32 {
        self.hit.chance(&request.input())
    }

    pub fn damage_range(&self, request: &AttackRequest<'_>) -> DamageRange {
        self.damage.range(&request.input())
    }

    /// Resolve one attack attempt.
    ///
    /// The roll `u` hits iff `u < chance`. On a hit, `u / chance` is itself
    /// uniform in `[0, 1)` and picks the damage within the range, so no
    /// second draw is taken.
    pub fn resolve<R>(&self, request: &AttackRequest<'_>, rng: &mut R) -> AttackOutcome
    where
        R: RandomSource + ?Sized,
    {
        let input = request.input();
        let chance = self.hit.chance(&input);
        let roll = rng.next_uniform();

        if !check_hit(chance, roll) {
            return AttackOutcome::MISS;
        }

        let range = self.damage.range(&input);
        AttackOutcome::hit(range.sample(roll / chance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::formula::{Constant, DistanceFalloff};
    use crate::env::PcgRng;

    /// Replays a fixed sequence of rolls.
    struct Rolls(Vec<f32>);

    impl RandomSource for Rolls {
        fn next_uniform(&mut self) -> f32 {
            if self.0.is_empty() {
                0.0
            } else {
                self.0.remove(0)
            }
        }
    }

    fn resolver(chance: f32) -> AttackResolver {
        AttackResolver::new(
            HitChanceModel::new(Constant(chance)),
            DamageModel::new(Constant(4.0), Constant(8.0)),
        )
    }

    fn request(snapshot: &StatSnapshot) -> AttackRequest<'_> {
        AttackRequest {
            weapon: snapshot,
            source: snapshot,
            target: snapshot,
            origin: Position::ZERO,
            destination: None,
        }
    }

    #[test]
    fn certain_hit_with_zero_roll() {
        let empty = StatSnapshot::new();
        let outcome = resolver(1.0).resolve(&request(&empty), &mut Rolls(vec![0.0]));

        assert!(outcome.hit);
        assert_eq!(outcome.damage, 4.0);
    }

    #[test]
    fn impossible_hit_misses_with_no_damage() {
        let empty = StatSnapshot::new();

        for _ in 0..3 {
            let outcome = resolver(0.0).resolve(&request(&empty), &mut Rolls(vec![0.0]));
            assert_eq!(outcome, AttackOutcome::MISS);
        }
    }

    #[test]
    fn roll_is_reused_for_damage() {
        let empty = StatSnapshot::new();
        let mut rolls = Rolls(vec![0.25, 0.9]);

        // 0.25 / 0.5 = 0.5 of the way through 4..8
        let outcome = resolver(0.5).resolve(&request(&empty), &mut rolls);
        assert_eq!(outcome, AttackOutcome::hit(6.0));
        assert_eq!(rolls.0, vec![0.9]);

        let outcome = resolver(0.5).resolve(&request(&empty), &mut rolls);
        assert_eq!(outcome, AttackOutcome::MISS);
    }

    #[test]
    fn same_seed_same_outcomes() {
        let empty = StatSnapshot::new();
        let resolver = resolver(0.6);
        let mut a = PcgRng::new(1234);
        let mut b = PcgRng::new(1234);

        for _ in 0..50 {
            let left = resolver.resolve(&request(&empty), &mut a);
            let right = resolver.resolve(&request(&empty), &mut b);
            assert_eq!(left, right);
            assert!(!left.hit || (4.0..=8.0).contains(&left.damage));
        }
    }

    #[test]
    fn destination_feeds_distance() {
        let empty = StatSnapshot::new();
        let falloff = DistanceFalloff {
            inner: Constant(1.0),
            range: 10.0,
        };
        let resolver = AttackResolver::new(
            HitChanceModel::new(falloff),
            DamageModel::fixed(Constant(1.0)),
        );
        let mut request = request(&empty);
        request.destination = Some(Position::new(3.0, 0.0, 4.0));

        assert_eq!(request.distance(), Some(5.0));
        assert_eq!(resolver.hit_chance(&request), 0.5);
        assert_eq!(resolver.damage_range(&request), DamageRange::fixed(1.0));
    }
}
