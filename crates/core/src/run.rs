use crate::{
    deal_offer, score_pile, Card, Event, EventBus, GameConfig, GameState, Phase, Pile, RngState,
    ScoreBreakdown, ScoreTables,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("invalid offer index {index} (offer has {offer_len} cards)")]
    InvalidChoice { index: usize, offer_len: usize },
    #[error("game is over")]
    GameOver,
    #[error("offer is empty")]
    EmptyOffer,
}

/// One game session: the offer, the growing pile, and the scoring tables.
/// The score is never stored; it is recomputed from the pile on demand.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub rng: RngState,
    pub offer: Vec<Card>,
    pub pile: Pile,
    pub state: GameState,
}

impl RunState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let tables = ScoreTables::from_config(&config);
        let state = GameState::new(config.game.rounds);
        Self {
            config,
            tables,
            rng: RngState::from_seed(seed),
            offer: Vec::new(),
            pile: Pile::new(),
            state,
        }
    }

    /// Deals the offer and opens the first round.
    pub fn start(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.phase != Phase::Setup {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        self.offer = deal_offer(&mut self.rng, self.config.game.offer_size as usize);
        if self.offer.is_empty() {
            return Err(RunError::EmptyOffer);
        }
        self.state.phase = Phase::Pick;
        events.push(Event::GameStarted {
            seed: self.rng.seed(),
            rounds: self.state.rounds_max,
            offer_size: self.offer.len(),
        });
        Ok(())
    }

    /// Picks a card from the offer into the pile and rescores the whole
    /// pile. Returns the running total.
    pub fn pick(&mut self, index: usize, events: &mut EventBus) -> Result<i64, RunError> {
        match self.state.phase {
            Phase::Pick => {}
            Phase::Over => return Err(RunError::GameOver),
            phase => return Err(RunError::InvalidPhase(phase)),
        }
        let card = *self.offer.get(index).ok_or(RunError::InvalidChoice {
            index,
            offer_len: self.offer.len(),
        })?;

        self.pile.push(card);
        events.push(Event::CardPicked {
            round: self.state.round,
            card,
        });

        let breakdown = self.score();
        self.state.last_total = breakdown.total;
        events.push(Event::PileScored {
            zombies: breakdown.zombies,
            cyclopes: breakdown.cyclopes,
            chimeras: breakdown.chimeras,
            warriors: breakdown.warriors,
            total: breakdown.total,
        });

        if self.state.round >= self.state.rounds_max {
            self.state.phase = Phase::Over;
            events.push(Event::GameOver {
                total: breakdown.total,
            });
        } else {
            self.state.round += 1;
        }
        Ok(breakdown.total)
    }

    pub fn score(&self) -> ScoreBreakdown {
        score_pile(self.pile.cards(), &self.tables)
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Over
    }
}
