//! Randomness collaborator for attack resolution.
//!
//! Resolution never touches OS entropy. Callers inject a [`RandomSource`],
//! so outcomes are reproducible from a seed and trivially stubbed in tests.

use crate::types::EntityId;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draws the next sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f32 {
        (**self).next_uniform()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// 2^-24, maps the top 24 bits of a sample onto `[0, 1)`.
    const UNIT: f32 = 1.0 / (1u32 << 24) as f32;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl RandomSource for PcgRng {
    fn next_uniform(&mut self) -> f32 {
        // 24 bits fit an f32 mantissa exactly, so the result is strictly below 1.0
        (self.next_u32() >> 8) as f32 * Self::UNIT
    }
}

/// Compute a deterministic seed for one actor's turn.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at encounter start (for replay/determinism)
/// * `round` - Round counter
/// * `actor` - Entity taking the turn
/// * `context` - Distinguishes independent streams within the same turn
pub fn compute_seed(game_seed: u64, round: u64, actor: EntityId, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor.index as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (actor.generation as u64).wrapping_mul(0xc2b2ae3d27d4eb4f);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
