use serde::{Deserialize, Serialize};

/// Face value carried by an undead warrior card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WarriorValue {
    One,
    Two,
    Three,
}

impl WarriorValue {
    pub const ALL: [WarriorValue; 3] = [WarriorValue::One, WarriorValue::Two, WarriorValue::Three];

    pub fn points(self) -> i64 {
        match self {
            WarriorValue::One => 1,
            WarriorValue::Two => 2,
            WarriorValue::Three => 3,
        }
    }
}

/// The closed set of cards in the game. Partitioning and scoring match on
/// this exhaustively, so adding a variant forces every scorer to say what
/// it is worth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Zombie,
    Cyclops,
    Chimera,
    UndeadWarrior(WarriorValue),
}

impl Card {
    pub const ALL: [Card; 6] = [
        Card::Zombie,
        Card::Cyclops,
        Card::Chimera,
        Card::UndeadWarrior(WarriorValue::One),
        Card::UndeadWarrior(WarriorValue::Two),
        Card::UndeadWarrior(WarriorValue::Three),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Card::Zombie => "zombie",
            Card::Cyclops => "cyclops",
            Card::Chimera => "chimera",
            Card::UndeadWarrior(WarriorValue::One) => "undead-warrior-1",
            Card::UndeadWarrior(WarriorValue::Two) => "undead-warrior-2",
            Card::UndeadWarrior(WarriorValue::Three) => "undead-warrior-3",
        }
    }

    pub fn from_id(id: &str) -> Option<Card> {
        Card::ALL.into_iter().find(|card| card.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Card::Zombie => "Zombie",
            Card::Cyclops => "Cyclops",
            Card::Chimera => "Chimera",
            Card::UndeadWarrior(_) => "Undead Warrior",
        }
    }
}
