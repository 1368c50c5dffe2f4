mod narration;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use pig::player::create_player;
use pig::simulation::{die::Die, Game};
use pig::{PlayerKind, Seat};
use pig_drivers::resolve_config;
use tracing_subscriber::EnvFilter;

use self::narration::Narrator;

#[derive(Debug, Parser)]
#[command(author, about = "Play Pig, the dice game", long_about = None)]
struct CommandLineArgs {
    /// Who plays first
    #[arg(long, default_value = "human", value_parser = player_kind_parser())]
    player1: PlayerKind,

    /// Who plays second
    #[arg(long, default_value = "computer", value_parser = player_kind_parser())]
    player2: PlayerKind,

    /// Stop the match when the time budget is used up
    #[arg(short, long)]
    timed: bool,

    /// The path of the config file (default: ~/.pig.yml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed of the die, overrides the config file
    #[arg(long)]
    seed: Option<u64>,
}

fn player_kind_parser() -> impl TypedValueParser<Value = PlayerKind> {
    PossibleValuesParser::new(["human", "computer"]).try_map(|kind| kind.parse::<PlayerKind>())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CommandLineArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn error_message(err: &dyn Error) -> String {
    format!("Error: {}", err)
}

fn run(args: &CommandLineArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args.config.as_deref())?;

    let mut rule: pig::Rule = config.rule.clone().try_into()?;
    if args.timed {
        rule.time_budget = Some(config.rule.get_time_budget());
    }
    let seed = args.seed.unwrap_or(config.pig_console.seed);
    tracing::info!(?rule, seed, player1 = %args.player1, player2 = %args.player2, "starting match");

    let mut player1 = create_player(args.player1, Seat::Player1);
    let mut player2 = create_player(args.player2, Seat::Player2);
    let mut game = Game::new(&rule, Die::new(rule.sides, seed));
    let mut narrator = Narrator::default();
    game.play(player1.as_mut(), player2.as_mut(), &mut narrator)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn can_parse_player_kinds() {
        let args = CommandLineArgs::try_parse_from(["pig"]).unwrap();
        assert_eq!(args.player1, PlayerKind::Human);
        assert_eq!(args.player2, PlayerKind::Computer);
        assert!(!args.timed);

        let args =
            CommandLineArgs::try_parse_from(["pig", "--player1", "computer", "-t", "--seed", "7"])
                .unwrap();
        assert_eq!(args.player1, PlayerKind::Computer);
        assert!(args.timed);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn should_reject_unknown_player_kind() {
        let err = CommandLineArgs::try_parse_from(["pig", "--player1", "robot"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        let message = err.to_string();
        assert!(message.contains("human"));
        assert!(message.contains("computer"));
        assert!(!message.contains("untagged"));
    }

    #[test]
    fn closed_input_is_reported_by_message() {
        let err = pig::PigError::InputClosed;
        assert_eq!(
            error_message(&err),
            "Error: Input closed while waiting for a decision"
        );
    }
}
