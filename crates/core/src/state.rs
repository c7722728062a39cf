use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Pick,
    Over,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// One-based round about to be played; stays at `rounds_max` once the
    /// game is over.
    pub round: u8,
    pub rounds_max: u8,
    pub phase: Phase,
    pub last_total: i64,
}

impl GameState {
    pub fn new(rounds: u8) -> Self {
        Self {
            round: 1,
            rounds_max: rounds,
            phase: Phase::Setup,
            last_total: 0,
        }
    }
}
