use gen3_battle::battle::action_stack::BattleAction;
use gen3_battle::battle::ai::{Behavior, RandomMoveAI};
use gen3_battle::battle::engine::BattleEngine;
use gen3_battle::battle::rng::{BattleRng, StdBattleRng};
use gen3_battle::battle::state::BattleEvent;
use gen3_battle::config::BattleConfig;
use gen3_battle::pokemon::PartyPokemon;
use gen3_battle::BattleResult;
use clap::Parser;
use schema::{Move, Species};
use std::path::PathBuf;
use std::process::ExitCode;

/// Plays a demo battle with both sides driven by the random AI.
#[derive(Parser, Debug)]
#[command(name = "gen3-battle")]
struct Cli {
    /// Seed both random sources for a reproducible battle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many turns if nobody has won
    #[arg(short, long, default_value_t = 50)]
    turns: u32,

    /// Battle config in RON; defaults to a wild encounter
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full event list as JSON instead of the messages
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_core::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> BattleResult<Vec<BattleEvent>> {
    let config = match &cli.config {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::wild(),
    };
    let player = PartyPokemon::new(
        Species::Treecko,
        12,
        &[Move::Pound, Move::Leer, Move::Absorb, Move::QuickAttack],
    )?;
    let enemy = PartyPokemon::new(
        Species::Poochyena,
        12,
        &[Move::Tackle, Move::Growl, Move::SandAttack, Move::Bite],
    )?;

    let rng: Box<dyn BattleRng> = match cli.seed {
        Some(seed) => Box::new(StdBattleRng::from_seed_u64(seed)),
        None => Box::new(StdBattleRng::from_os_rng()),
    };
    // The player side is driven by its own AI so the demo needs no input.
    let mut player_rng = match cli.seed {
        Some(seed) => StdBattleRng::from_seed_u64(seed.wrapping_add(1)),
        None => StdBattleRng::from_os_rng(),
    };
    let mut engine = BattleEngine::new(config, &player, &enemy, rng);
    let player_ai = RandomMoveAI::new();

    let mut events = Vec::new();
    for _ in 0..cli.turns {
        let action: BattleAction = player_ai.decide_action(engine.player(), &mut player_rng);
        let result = engine.execute_turn(action);
        events.extend(result.events);
        if result.outcome.is_some() {
            break;
        }
    }
    log::info!("battle finished with outcome {:?}", engine.outcome());
    Ok(events)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(events) if cli.json => match serde_json::to_string_pretty(&events) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("failed to encode events: {}", error);
                ExitCode::FAILURE
            }
        },
        Ok(events) => {
            for event in events.iter().filter(|event| event.message.is_some()) {
                println!("{}", event);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["gen3-battle"]).expect("no flags should parse");
        assert_eq!(cli.seed, None);
        assert_eq!(cli.turns, 50);
        assert_eq!(cli.config, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "gen3-battle",
            "--seed",
            "42",
            "-t",
            "10",
            "--config",
            "trainer.ron",
            "--json",
        ])
        .expect("flags should parse");
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.turns, 10);
        assert_eq!(cli.config, Some(PathBuf::from("trainer.ron")));
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_a_bad_seed() {
        assert!(Cli::try_parse_from(["gen3-battle", "--seed", "soon"]).is_err());
        assert!(Cli::try_parse_from(["gen3-battle", "--verbose"]).is_err());
    }
}
