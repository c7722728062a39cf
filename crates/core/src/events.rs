use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted {
        seed: u64,
        rounds: u8,
        offer_size: usize,
    },
    CardPicked { round: u8, card: Card },
    PileScored {
        zombies: i64,
        cyclopes: i64,
        chimeras: i64,
        warriors: i64,
        total: i64,
    },
    GameOver { total: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
