//! Line-of-sight blockers.
use combat_core::Position;

/// Spherical obstacle (pillar, boulder) that blocks sight lines through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Occluder {
    pub center: Position,
    pub radius: f32,
}

impl Occluder {
    pub fn new(center: Position, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether the segment `from -> to` passes through this obstacle.
    pub fn blocks(&self, from: Position, to: Position) -> bool {
        let segment = to - from;
        let length_sq = segment.length_squared();
        let t = if length_sq > 0.0 {
            ((self.center - from).dot(segment) / length_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let closest = from + segment * t;
        closest.distance_squared(self.center) < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_only_segments_through_it() {
        let pillar = Occluder::new(Position::new(5.0, 0.0, 0.0), 1.0);

        assert!(pillar.blocks(Position::ZERO, Position::new(10.0, 0.0, 0.0)));
        assert!(!pillar.blocks(Position::ZERO, Position::new(3.0, 0.0, 0.0)));
        assert!(!pillar.blocks(Position::new(0.0, 0.0, 3.0), Position::new(10.0, 0.0, 3.0)));
    }
}
