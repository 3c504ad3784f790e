//! Per-entity threat registry.

use crate::env::{PositionOracle, SightOracle};
use crate::types::EntityId;

use super::decay::ThreatDecay;

/// Hostility score toward one source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatEntry {
    pub source: EntityId,
    pub score: f32,
}

/// Tracks, decays, and ranks threat toward potential targets.
///
/// Scores never persist below zero: any mutation that leaves an entry
/// negative removes it. Ranking is a stable descending sort that only runs
/// after a mutation that can reorder entries, so repeated queries on an
/// unchanged table reuse the previous order and ties keep their prior
/// relative order.
///
/// Entries live in a flat vector. Lookups by source and removals are linear
/// in the number of tracked sources, which stays in the tens for one actor.
#[derive(Clone, Debug, Default)]
pub struct ThreatTable {
    decay: ThreatDecay,
    entries: Vec<ThreatEntry>,
    dirty: bool,
}

impl ThreatTable {
    pub fn new(decay: ThreatDecay) -> Self {
        Self {
            decay,
            entries: Vec::new(),
            dirty: false,
        }
    }

    pub fn decay(&self) -> &ThreatDecay {
        &self.decay
    }

    pub fn set_decay(&mut self, decay: ThreatDecay) {
        self.decay = decay;
    }

    /// Index of `source` in the entry list. O(n) scan.
    fn position_of(&self, source: EntityId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.source == source)
    }

    /// Adds `delta` to the score for `source`, tracking it if absent.
    ///
    /// A zero delta does nothing. An entry pushed below zero is removed.
    pub fn add_aggro(&mut self, source: EntityId, delta: f32) {
        if delta == 0.0 {
            return;
        }

        match self.position_of(source) {
            Some(index) => {
                let score = self.entries[index].score + delta;
                if score < 0.0 {
                    self.entries.remove(index);
                    return;
                }
                self.entries[index].score = score;
            }
            None if delta < 0.0 => return,
            None => self.entries.push(ThreatEntry {
                source,
                score: delta,
            }),
        }
        self.dirty = true;
    }

    /// Overwrites the score for `source`, tracking it if absent.
    ///
    /// A negative value removes the entry.
    pub fn set_aggro(&mut self, source: EntityId, value: f32) {
        if value < 0.0 {
            self.remove(source);
            return;
        }

        match self.position_of(source) {
            Some(index) => self.entries[index].score = value,
            None => self.entries.push(ThreatEntry {
                source,
                score: value,
            }),
        }
        self.dirty = true;
    }

    /// Current score for `source`, or `None` if it is not tracked.
    pub fn aggro(&self, source: EntityId) -> Option<f32> {
        self.position_of(source).map(|index| self.entries[index].score)
    }

    /// Stops tracking `source`. O(n): the tail shifts down, which keeps the
    /// remaining order and the sort valid.
    pub fn remove(&mut self, source: EntityId) -> Option<f32> {
        self.position_of(source)
            .map(|index| self.entries.remove(index).score)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = false;
    }

    pub fn contains(&self, source: EntityId) -> bool {
        self.position_of(source).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decays every entry by `elapsed` seconds as seen from `owner`.
    ///
    /// Entries whose source is no longer valid, or whose score drops below
    /// zero, are removed. Returns how many entries were removed.
    pub fn tick<P, L>(
        &mut self,
        owner: EntityId,
        elapsed: f32,
        positions: &P,
        sight: &L,
    ) -> usize
    where
        P: PositionOracle + ?Sized,
        L: SightOracle + ?Sized,
    {
        let before = self.entries.len();
        let decay = self.decay;
        let owner_position = positions.position(owner);
        let mut changed = false;

        self.entries.retain_mut(|entry| {
            let Some(source_position) = positions.position(entry.source) else {
                return false;
            };

            let factor = owner_position.map(|owner_position| {
                let clear_line =
                    !decay.sight_gated || sight.has_clear_line(owner_position, source_position);
                let distance = decay.distance(owner_position, source_position);
                decay.distance_factor(distance, clear_line)
            });

            let amount = decay.amount(elapsed, factor);
            if amount != 0.0 {
                entry.score -= amount;
                changed = true;
            }
            entry.score >= 0.0
        });

        self.dirty |= changed;
        before - self.entries.len()
    }

    fn sort(&mut self) {
        if self.dirty {
            self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
            self.dirty = false;
        }
    }

    /// All entries, highest score first.
    pub fn ranked(&mut self) -> &[ThreatEntry] {
        self.sort();
        &self.entries
    }

    /// Highest-ranked entry whose source is still valid.
    pub fn top<P>(&mut self, positions: &P) -> Option<ThreatEntry>
    where
        P: PositionOracle + ?Sized,
    {
        self.top_where(positions, |_, _| true)
    }

    /// Highest-ranked valid entry accepted by `filter(source, score)`.
    pub fn top_where<P, F>(&mut self, positions: &P, mut filter: F) -> Option<ThreatEntry>
    where
        P: PositionOracle + ?Sized,
        F: FnMut(EntityId, f32) -> bool,
    {
        self.sort();
        self.entries
            .iter()
            .find(|entry| positions.is_valid(entry.source) && filter(entry.source, entry.score))
            .copied()
    }
}
