use anyhow::Result;
use overlords_core::{Event, EventBus, GameConfig, RngState, RunError, RunState};
use std::collections::VecDeque;

pub const DEFAULT_ROUNDS: u8 = 7;
const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub seed: u64,
    pub rounds: u8,
    pub run: RunState,
    pub events: EventBus,
    pub offer_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

fn build_run(seed: u64, rounds: u8) -> (RunState, EventBus) {
    let mut config = GameConfig::default();
    config.game.rounds = rounds;
    (RunState::new(config, seed), EventBus::default())
}

impl App {
    pub fn bootstrap(seed: Option<u64>, rounds: Option<u8>) -> Result<Self> {
        let seed = seed.unwrap_or_else(|| RngState::from_entropy().seed());
        let rounds = rounds.unwrap_or(DEFAULT_ROUNDS).max(1);
        let (run, events) = build_run(seed, rounds);

        let mut app = Self {
            seed,
            rounds,
            run,
            events,
            offer_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "pick a card".to_string(),
            show_help: false,
            should_quit: false,
        };
        app.run
            .start(&mut app.events)
            .map_err(|err| anyhow::anyhow!(err.to_string()))?;
        app.flush_events();
        Ok(app)
    }

    pub fn new_game(&mut self) {
        // Bump the seed so `n` deals a fresh offer.
        self.seed = self.seed.wrapping_add(1);
        let (run, events) = build_run(self.seed, self.rounds);
        self.run = run;
        self.events = events;
        self.offer_cursor = 0;
        if let Err(err) = self.run.start(&mut self.events) {
            self.status_line = err.to_string();
        } else {
            self.status_line = "pick a card".to_string();
        }
        self.flush_events();
    }

    pub fn move_cursor(&mut self, right: bool) {
        let len = self.run.offer.len();
        if len == 0 {
            return;
        }
        if right {
            self.offer_cursor = (self.offer_cursor + 1) % len;
        } else {
            self.offer_cursor = (self.offer_cursor + len - 1) % len;
        }
    }

    pub fn pick_selected(&mut self) {
        match self.run.pick(self.offer_cursor, &mut self.events) {
            Ok(total) => {
                self.status_line = if self.run.is_over() {
                    format!("game over, final score {total}")
                } else {
                    format!("score {total}")
                };
            }
            Err(err) => self.status_line = err.to_string(),
        }
        self.flush_events();
    }

    pub fn apply_scripted_picks(&mut self, picks: &[usize]) -> Result<(), RunError> {
        for &index in picks {
            self.run.pick(index, &mut self.events)?;
        }
        self.flush_events();
        Ok(())
    }

    fn flush_events(&mut self) {
        let lines: Vec<String> = self.events.drain().map(format_event).collect();
        for line in lines {
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn format_event(event: Event) -> String {
    match event {
        Event::GameStarted {
            seed,
            rounds,
            offer_size,
        } => format!("game started: seed {seed}, {rounds} rounds, {offer_size} cards on offer"),
        Event::CardPicked { round, card } => {
            format!("round {round}: picked {}", card.id())
        }
        Event::PileScored {
            zombies,
            cyclopes,
            chimeras,
            warriors,
            total,
        } => format!(
            "pile scored {total} (zombies {zombies}, cyclopes {cyclopes}, chimeras {chimeras}, warriors {warriors})"
        ),
        Event::GameOver { total } => format!("game over: final score {total}"),
    }
}
