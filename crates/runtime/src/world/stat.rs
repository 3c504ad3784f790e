//! Stat ids used by the reference world and its data files.
use combat_core::StatId;

pub const LEVEL: StatId = StatId::LEVEL;
pub const ACCURACY: StatId = StatId(1);
pub const EVASION: StatId = StatId(2);
/// Weapon sharpness; defined on weapons, read through the weapon snapshot.
pub const EDGE: StatId = StatId(3);
pub const ARMOR: StatId = StatId(4);

pub const ALL: [StatId; 5] = [LEVEL, ACCURACY, EVASION, EDGE, ARMOR];
