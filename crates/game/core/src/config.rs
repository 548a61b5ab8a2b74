/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// How ships react when they step onto a wave.
    pub wave_policy: WavePolicy,

    /// Sides of the die rolled against a ship's stability to resist a wave push.
    pub wave_resist_die: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of actors sharing a single cell.
    pub const MAX_OCCUPANTS_PER_CELL: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WAVE_RESIST_DIE: u32 = 10;

    pub fn new() -> Self {
        Self {
            wave_policy: WavePolicy::Roll,
            wave_resist_die: Self::DEFAULT_WAVE_RESIST_DIE,
        }
    }

    pub fn with_wave_policy(wave_policy: WavePolicy) -> Self {
        Self {
            wave_policy,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolution mode for wave pushes.
///
/// `AlwaysHit` and `AlwaysResist` exist for playtesting and deterministic tests.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WavePolicy {
    /// Roll `1..=wave_resist_die` against the ship's stability.
    #[default]
    Roll,
    /// Ships never resist.
    AlwaysHit,
    /// Ships always resist.
    AlwaysResist,
}
