use crate::{Card, WarriorValue};
use serde::{Deserialize, Serialize};

/// The cards a player has collected so far. Append-only: the game never
/// removes a card once picked.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Per-family partition of a card slice. Only the multiset composition
/// matters, so a single pass is enough.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PileCounts {
    pub zombies: i64,
    pub cyclopes: i64,
    pub chimeras: i64,
    pub warriors: Vec<WarriorValue>,
}

impl PileCounts {
    pub fn tally(cards: &[Card]) -> Self {
        let mut counts = PileCounts::default();
        for card in cards {
            match card {
                Card::Zombie => counts.zombies += 1,
                Card::Cyclops => counts.cyclopes += 1,
                Card::Chimera => counts.chimeras += 1,
                Card::UndeadWarrior(value) => counts.warriors.push(*value),
            }
        }
        counts
    }
}
