use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChimeraRule {
    pub per_card: i64,
    pub per_set: i64,
}

impl Default for ChimeraRule {
    fn default() -> Self {
        Self {
            per_card: 2,
            per_set: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CyclopsRule {
    pub solo_bonus: i64,
    pub per_card: i64,
}

impl Default for CyclopsRule {
    fn default() -> Self {
        Self {
            solo_bonus: 6,
            per_card: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieRule {
    /// Points indexed by card count; counts past the end saturate at the
    /// last entry.
    pub table: Vec<i64>,
}

impl Default for ZombieRule {
    fn default() -> Self {
        Self {
            table: vec![0, 1, 4, 9, 12, 18, 24],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WarriorRule {
    pub set_bonus: i64,
}

impl Default for WarriorRule {
    fn default() -> Self {
        Self { set_bonus: 6 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameRule {
    /// Picks in a full game.
    pub rounds: u8,
    /// Cards in the random offer dealt at game start.
    pub offer_size: u8,
}

impl Default for GameRule {
    fn default() -> Self {
        Self {
            rounds: 7,
            offer_size: 7,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub chimera: ChimeraRule,
    #[serde(default)]
    pub cyclops: CyclopsRule,
    #[serde(default)]
    pub zombie: ZombieRule,
    #[serde(default)]
    pub warrior: WarriorRule,
    #[serde(default)]
    pub game: GameRule,
}
