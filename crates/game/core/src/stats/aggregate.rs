//! Combining per-item stat contributions into one value.

/// Combination rule used to merge several items' contributions to one stat.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AggregationMode {
    /// Sum of contributions.
    #[default]
    Add,
    /// Product of contributions.
    Multiply,
    /// Mean over contributing items only.
    Average,
    /// Largest contribution.
    Highest,
    /// Smallest contribution.
    Lowest,
}

impl AggregationMode {
    /// Value produced when nothing contributes.
    ///
    /// `Average` yields `0` while `Highest`/`Lowest` yield their infinite
    /// seeds. Callers that care must check for an empty contribution set
    /// themselves (see [`Aggregator::count`]).
    pub const fn seed(self) -> f32 {
        match self {
            Self::Add | Self::Average => 0.0,
            Self::Multiply => 1.0,
            Self::Highest => f32::NEG_INFINITY,
            Self::Lowest => f32::INFINITY,
        }
    }

    /// Aggregates `values` under this mode.
    pub fn aggregate(self, values: impl IntoIterator<Item = f32>) -> f32 {
        let mut aggregator = Aggregator::new(self);
        aggregator.extend(values);
        aggregator.finish()
    }
}

/// Aggregates `values` under `mode`. Pure and total.
///
/// ```
/// # use combat_core::stats::{AggregationMode, aggregate};
/// assert_eq!(aggregate([2.0, 4.0, 6.0], AggregationMode::Average), 4.0);
/// assert_eq!(aggregate([], AggregationMode::Average), 0.0);
/// ```
#[inline]
pub fn aggregate(values: impl IntoIterator<Item = f32>, mode: AggregationMode) -> f32 {
    mode.aggregate(values)
}

/// Incremental accumulator, for callers that produce contributions one at a
/// time and do not want to collect them first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aggregator {
    mode: AggregationMode,
    acc: f32,
    count: usize,
}

impl Aggregator {
    pub const fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            acc: mode.seed(),
            count: 0,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.acc = match self.mode {
            AggregationMode::Add | AggregationMode::Average => self.acc + value,
            AggregationMode::Multiply => self.acc * value,
            AggregationMode::Highest => self.acc.max(value),
            AggregationMode::Lowest => self.acc.min(value),
        };
        self.count += 1;
    }

    /// Number of contributions pushed so far.
    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn mode(&self) -> AggregationMode {
        self.mode
    }

    pub fn finish(&self) -> f32 {
        match self.mode {
            AggregationMode::Average if self.count == 0 => 0.0,
            AggregationMode::Average => self.acc / self.count as f32,
            _ => self.acc,
        }
    }
}

impl Extend<f32> for Aggregator {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}
