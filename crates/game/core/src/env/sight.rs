use crate::types::Position;

/// Line-of-sight oracle, consulted only when sight-gated threat decay is enabled.
pub trait SightOracle: Send + Sync {
    /// Returns `true` if nothing blocks the segment `from -> to`.
    fn has_clear_line(&self, from: Position, to: Position) -> bool;
}

/// Sight oracle for open arenas: every line is clear.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenSight;

impl SightOracle for OpenSight {
    fn has_clear_line(&self, _from: Position, _to: Position) -> bool {
        true
    }
}
