use anyhow::{Context, Result};
use overlords_core::{
    Card, Event, EventBus, GameConfig, RngState, RunState, ScoreBreakdown,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
struct CliOptions {
    seed: Option<u64>,
    rounds: Option<u8>,
    auto: bool,
    json: bool,
    help: bool,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    seed: u64,
    rounds: u8,
    picks: Vec<&'static str>,
    zombies: i64,
    cyclopes: i64,
    chimeras: i64,
    warriors: i64,
    total: i64,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--rounds" => {
                if let Some(value) = args.get(idx + 1) {
                    options.rounds = value.parse::<u8>().ok();
                    idx += 1;
                }
            }
            "--auto" | "-a" => options.auto = true,
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            _ => {}
        }
        idx += 1;
    }
    options
}

fn print_usage() {
    println!("overlords-cli [--seed N] [--rounds N] [--auto] [--json]");
    println!("  --seed N    fixed RNG seed (default: random)");
    println!("  --rounds N  picks per game (default: 7)");
    println!("  --auto      play a full game with random picks");
    println!("  --json      print a JSON summary when the game ends");
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_options(&args);
    if options.help {
        print_usage();
        return Ok(());
    }

    let seed = options.seed.unwrap_or_else(|| RngState::from_entropy().seed());
    let mut config = GameConfig::default();
    if let Some(rounds) = options.rounds {
        config.game.rounds = rounds.max(1);
    }

    let mut events = EventBus::default();
    let mut run = RunState::new(config, seed);
    run.start(&mut events)
        .map_err(|err| anyhow::anyhow!(err.to_string()))
        .context("start game")?;
    flush_events(&mut events, options.json);

    if options.auto {
        play_auto(&mut run, &mut events, options.json)?;
    } else {
        play_interactive(&mut run, &mut events, options.json)?;
    }

    if options.json && run.is_over() {
        print_summary(&run)?;
    }
    Ok(())
}

fn play_auto(run: &mut RunState, events: &mut EventBus, quiet: bool) -> Result<()> {
    let mut picker = RngState::from_seed(run.rng.seed() ^ 0x5EED);
    while !run.is_over() {
        let index = picker.gen_range(run.offer.len());
        run.pick(index, events)
            .map_err(|err| anyhow::anyhow!(err.to_string()))
            .context("auto pick")?;
        flush_events(events, quiet);
    }
    Ok(())
}

fn play_interactive(run: &mut RunState, events: &mut EventBus, quiet: bool) -> Result<()> {
    if !quiet {
        print_offer(run);
        println!("commands: pick <n|id>, offer, pile, score, help, quit");
    }
    let stdin = io::stdin();
    loop {
        if run.is_over() {
            if !quiet {
                println!("game over: final score {}", run.score().total);
            }
            return Ok(());
        }
        if !quiet {
            print!("round {}> ", run.state.round);
            io::stdout().flush().context("flush prompt")?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read command")? == 0 {
            return Ok(());
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(word) => word,
            None => continue,
        };
        let argument = parts.next();
        match command {
            "q" | "quit" | "exit" => return Ok(()),
            "h" | "help" | "?" => {
                println!("pick <n|id>  add offer card n (1-based) or by id, e.g. pick zombie");
                println!("offer | o    show the card offer");
                println!("pile         show the pile so far");
                println!("score | s    show the score breakdown");
                println!("quit | q     leave the game");
            }
            "o" | "offer" => print_offer(run),
            "pile" => {
                for card in run.pile.iter() {
                    println!("  {}", card.id());
                }
            }
            "s" | "score" => print_breakdown(&run.score()),
            "p" | "pick" => match argument {
                Some(value) => do_pick(run, events, value, quiet),
                None => println!("pick needs an offer number or card id"),
            },
            other => {
                // A bare number is shorthand for pick.
                if other.parse::<usize>().is_ok() {
                    do_pick(run, events, other, quiet);
                } else {
                    println!("unknown command: {other} (try help)");
                }
            }
        }
    }
}

fn do_pick(run: &mut RunState, events: &mut EventBus, value: &str, quiet: bool) {
    let index = match value.parse::<usize>() {
        Ok(number) if number >= 1 => Some(number - 1),
        Ok(_) => None,
        Err(_) => match Card::from_id(value) {
            Some(card) => run.offer.iter().position(|offered| *offered == card),
            None => {
                println!("unknown card id: {value}");
                return;
            }
        },
    };
    let Some(index) = index else {
        println!("no such card on offer: {value}");
        return;
    };
    match run.pick(index, events) {
        Ok(_) => flush_events(events, quiet),
        Err(err) => println!("{err}"),
    }
}

fn print_offer(run: &RunState) {
    println!("offer:");
    for (idx, card) in run.offer.iter().enumerate() {
        println!("  {} {}", idx + 1, card.id());
    }
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!(
        "score {} (zombies {}, cyclopes {}, chimeras {}, warriors {})",
        breakdown.total,
        breakdown.zombies,
        breakdown.cyclopes,
        breakdown.chimeras,
        breakdown.warriors
    );
}

fn flush_events(events: &mut EventBus, quiet: bool) {
    for event in events.drain() {
        if quiet {
            continue;
        }
        match event {
            Event::GameStarted {
                seed,
                rounds,
                offer_size,
            } => println!("game started: seed {seed}, {rounds} rounds, {offer_size} cards on offer"),
            Event::CardPicked { round, card } => {
                println!("round {round}: picked {}", card.id())
            }
            Event::PileScored { total, .. } => println!("pile score: {total}"),
            Event::GameOver { total } => println!("game over: final score {total}"),
        }
    }
}

fn print_summary(run: &RunState) -> Result<()> {
    let breakdown = run.score();
    let summary = GameSummary {
        seed: run.rng.seed(),
        rounds: run.state.rounds_max,
        picks: run.pile.iter().map(|card| card.id()).collect(),
        zombies: breakdown.zombies,
        cyclopes: breakdown.cyclopes,
        chimeras: breakdown.chimeras,
        warriors: breakdown.warriors,
        total: breakdown.total,
    };
    let rendered = serde_json::to_string_pretty(&summary).context("render summary")?;
    println!("{rendered}");
    Ok(())
}
