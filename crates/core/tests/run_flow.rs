use overlords_core::{
    Event, EventBus, GameConfig, GameRule, Phase, RunError, RunState, ScoreTables,
};

fn start_run(seed: u64) -> (RunState, EventBus) {
    let mut events = EventBus::default();
    let mut run = RunState::new(GameConfig::default(), seed);
    run.start(&mut events).expect("start");
    (run, events)
}

#[test]
fn start_deals_offer_and_emits_game_started() {
    let (run, mut events) = start_run(7);
    assert_eq!(run.state.phase, Phase::Pick);
    assert_eq!(run.offer.len(), 7);
    assert_eq!(run.state.round, 1);

    let drained: Vec<Event> = events.drain().collect();
    assert_eq!(
        drained,
        vec![Event::GameStarted {
            seed: 7,
            rounds: 7,
            offer_size: 7,
        }]
    );
}

#[test]
fn same_seed_deals_same_offer() {
    let (a, _) = start_run(42);
    let (b, _) = start_run(42);
    assert_eq!(a.offer, b.offer);
}

#[test]
fn full_game_plays_seven_rounds_then_finishes() {
    let (mut run, mut events) = start_run(3);
    events.drain().count();

    for round in 1..=7u8 {
        assert_eq!(run.state.round, round);
        let total = run.pick(0, &mut events).expect("pick");
        assert_eq!(total, run.score().total);
        assert!(total >= 0);
    }
    assert!(run.is_over());
    assert_eq!(run.pile.len(), 7);

    let drained: Vec<Event> = events.drain().collect();
    // Two events per pick, plus the game-over marker.
    assert_eq!(drained.len(), 15);
    assert!(matches!(drained.last(), Some(Event::GameOver { .. })));
}

#[test]
fn pick_after_game_over_is_rejected() {
    let mut config = GameConfig::default();
    config.game = GameRule {
        rounds: 1,
        offer_size: 3,
    };
    let mut events = EventBus::default();
    let mut run = RunState::new(config, 1);
    run.start(&mut events).expect("start");
    run.pick(0, &mut events).expect("only round");

    assert!(matches!(run.pick(0, &mut events), Err(RunError::GameOver)));
}

#[test]
fn pick_out_of_range_is_rejected() {
    let (mut run, mut events) = start_run(9);
    let err = run.pick(99, &mut events).unwrap_err();
    assert!(matches!(
        err,
        RunError::InvalidChoice {
            index: 99,
            offer_len: 7,
        }
    ));
    // Nothing was added.
    assert!(run.pile.is_empty());
    assert_eq!(run.state.round, 1);
}

#[test]
fn pick_before_start_is_rejected() {
    let mut events = EventBus::default();
    let mut run = RunState::new(GameConfig::default(), 5);
    assert!(matches!(
        run.pick(0, &mut events),
        Err(RunError::InvalidPhase(Phase::Setup))
    ));
}

#[test]
fn start_twice_is_rejected() {
    let (mut run, mut events) = start_run(5);
    assert!(matches!(
        run.start(&mut events),
        Err(RunError::InvalidPhase(Phase::Pick))
    ));
}

#[test]
fn running_total_matches_recomputed_breakdown() {
    let (mut run, mut events) = start_run(11);
    let mut last = 0;
    for _ in 0..3 {
        last = run.pick(1, &mut events).expect("pick");
    }
    let tables = ScoreTables::from_config(&run.config);
    let recomputed = overlords_core::score_pile(run.pile.cards(), &tables);
    assert_eq!(last, recomputed.total);
    assert_eq!(run.state.last_total, recomputed.total);
}
