//! Round loop over an encounter.
use std::collections::BTreeMap;

use combat_core::{EntityId, apply_damage};
use tracing::{debug, info, warn};
use turn_driver::TurnDriver;

use crate::config::RuntimeConfig;
use crate::drivers::DriverTree;
use crate::encounter::Encounter;
use crate::error::{Result, RuntimeError};
use crate::runner::{TurnReport, TurnRunner};
use crate::turn::{TurnRecord, TurnState};
use crate::world::Faction;

/// One actor's turn within a round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnSummary {
    pub actor: EntityId,
    pub report: TurnReport,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundReport {
    pub round: u64,
    pub turns: Vec<TurnSummary>,
    pub kills: Vec<EntityId>,
    /// Threat entries that expired during decay.
    pub expired: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaOutcome {
    pub rounds: u64,
    /// Last faction standing, if the fight finished.
    pub winner: Option<Faction>,
}

/// Drives every actor's tree, round after round, and applies the results.
pub struct Arena {
    encounter: Encounter,
    drivers: BTreeMap<EntityId, DriverTree>,
    runner: TurnRunner,
    config: RuntimeConfig,
    round: u64,
}

impl Arena {
    pub fn new(encounter: Encounter, config: RuntimeConfig) -> Self {
        Self {
            encounter,
            drivers: BTreeMap::new(),
            runner: TurnRunner::new(config.seed),
            config,
            round: 0,
        }
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn encounter_mut(&mut self) -> &mut Encounter {
        &mut self.encounter
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    /// Gives `actor` a driver tree.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownEntity`] if the actor is not alive.
    pub fn assign(&mut self, actor: EntityId, driver: DriverTree) -> Result<()> {
        if self.encounter.world.actor(actor).is_none() {
            return Err(RuntimeError::UnknownEntity(actor));
        }
        self.drivers.insert(actor, driver);
        Ok(())
    }

    /// Seeds initial threat between all hostile actors.
    pub fn engage(&mut self) {
        self.encounter.engage(self.config.initial_threat);
    }

    pub fn is_finished(&self) -> bool {
        self.encounter.world.factions().len() <= 1
    }

    /// Runs one round: decays threat, then gives every living actor a turn in
    /// slot order.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::MissingDriver`] if a living actor has no tree.
    pub fn step(&mut self) -> Result<RoundReport> {
        self.round += 1;
        let round = self.round;

        let expired = self.encounter.decay_threat(self.config.turn_seconds)?;
        let mut report = RoundReport {
            round,
            expired,
            ..RoundReport::default()
        };

        for actor in self.encounter.world.ids() {
            // Killed earlier this round
            if self.encounter.world.actor(actor).is_none() {
                continue;
            }
            let driver = self
                .drivers
                .get(&actor)
                .ok_or(RuntimeError::MissingDriver(actor))?;

            let turn = self.runner.run_turn(driver, &mut self.encounter, actor, round);
            if let Some(killed) = turn.record.and_then(|record| self.apply(actor, record)) {
                report.kills.push(killed);
            }
            report.turns.push(TurnSummary {
                actor,
                report: turn,
            });
        }

        for killed in &report.kills {
            self.drivers.remove(killed);
        }

        debug!(
            round,
            turns = report.turns.len(),
            kills = report.kills.len(),
            expired,
            "round complete"
        );
        Ok(report)
    }

    /// Steps until one faction remains or `max_rounds` is reached.
    pub fn run(&mut self) -> Result<ArenaOutcome> {
        while !self.is_finished() && self.round < self.config.max_rounds {
            self.step()?;
        }

        let factions = self.encounter.world.factions();
        let winner = match factions.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        match winner {
            Some(faction) => info!(rounds = self.round, %faction, "encounter won"),
            None => warn!(
                rounds = self.round,
                remaining = factions.len(),
                "encounter unresolved"
            ),
        }

        Ok(ArenaOutcome {
            rounds: self.round,
            winner,
        })
    }

    /// Applies a recorded decision. Returns the victim if it died.
    fn apply(&mut self, actor: EntityId, record: TurnRecord) -> Option<EntityId> {
        match record {
            TurnRecord::Wait => None,
            TurnRecord::Move { to } => {
                if let Some(actor) = self.encounter.world.actor_mut(actor) {
                    actor.position = to;
                }
                None
            }
            TurnRecord::Attack { target, outcome } => {
                let threat = if outcome.hit {
                    outcome.damage * self.config.threat_per_damage
                } else {
                    self.config.threat_on_miss
                };
                self.encounter.provoke(target, actor, threat);

                let victim = self.encounter.world.actor_mut(target)?;
                if !outcome.hit {
                    return None;
                }
                victim.health = apply_damage(victim.health, outcome.damage);
                debug!(%actor, %target, damage = outcome.damage, health = victim.health, "hit");
                if victim.is_alive() {
                    return None;
                }

                let name = victim.name.clone();
                self.encounter.despawn(target);
                info!(%actor, %target, name = %name, "killed");
                Some(target)
            }
        }
    }

    /// Runs a single turn for `actor` without advancing the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is unknown or has no driver.
    pub fn preview(&mut self, actor: EntityId) -> Result<TurnReport> {
        if self.encounter.world.actor(actor).is_none() {
            return Err(RuntimeError::UnknownEntity(actor));
        }
        let driver = self
            .drivers
            .get(&actor)
            .ok_or(RuntimeError::MissingDriver(actor))?;
        Ok(self.runner.run_turn(driver, &mut self.encounter, actor, self.round + 1))
    }
}

/// Runs a standalone driver once against an encounter.
pub fn decide<D>(driver: &D, encounter: &mut Encounter, actor: EntityId, seed: u64) -> TurnReport
where
    D: TurnDriver<Encounter, TurnState> + ?Sized,
{
    TurnRunner::new(seed).run_turn(driver, encounter, actor, 1)
}
