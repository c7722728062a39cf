use crate::{Card, RngState};

/// Deals the card offer for a game: independent uniform draws from the full
/// card set. The offer is dealt once and never depletes; picking a card
/// copies it into the pile.
pub fn deal_offer(rng: &mut RngState, size: usize) -> Vec<Card> {
    (0..size)
        .filter_map(|_| rng.choose(&Card::ALL).copied())
        .collect()
}
