#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use battle_command::{
    init_logging, ui, GameEngine, JsonScoreStore, ScoreStore, WinHistory,
};
#[cfg(feature = "std")]
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player hotseat game.
    Play {
        #[arg(long, default_value = "battle_command_wins.json")]
        scores: PathBuf,
    },
    /// Show the stored win history.
    History {
        #[arg(long, default_value = "battle_command_wins.json")]
        scores: PathBuf,
    },
}

#[cfg(feature = "std")]
fn print_history(history: &WinHistory) {
    println!(
        "Win history: Player 1: {}  Player 2: {}",
        history.player1_wins, history.player2_wins
    );
}

#[cfg(feature = "std")]
fn play(mut store: impl ScoreStore) -> anyhow::Result<()> {
    let history = store.load()?;
    print_history(&history);
    println!("Enter a coordinate like B3 to attack, or: fortify, new, quit.");

    let mut engine = GameEngine::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        ui::print_turn_banner(&engine);
        ui::print_player_view(&engine);
        if !engine.status_message().is_empty() {
            println!("{}", engine.status_message());
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match line.trim().to_ascii_lowercase().as_str() {
            "quit" | "q" => break,
            "new" => {
                engine.reset();
                log::info!("game reset");
                continue;
            }
            "fortify" | "f" => {
                if let Err(e) = engine.toggle_fortify() {
                    println!("Cannot toggle fortify: {}", e);
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        let Some((row, col)) = ui::parse_coord(&line) else {
            println!("Enter a coordinate like B3, or: fortify, new, quit.");
            continue;
        };

        if engine.fortify_mode() {
            match engine.fortify_click(row, col) {
                Ok(event) => log::debug!("fortify at ({}, {}): {:?}", row, col, event),
                Err(e) => println!("Cannot fortify: {}", e),
            }
        } else {
            match engine.attack(row, col) {
                Ok(report) => {
                    log::info!(
                        "{} attacked {}: {:?}",
                        report.attacker,
                        ui::coord_to_string(row, col),
                        report.outcome
                    );
                    if let Some(winner) = report.winner {
                        let history = store.record_win(winner)?;
                        ui::print_game_over(winner);
                        print_history(&history);
                        println!("Type new for a rematch or quit to exit.");
                    }
                }
                Err(e) => println!("Invalid attack: {}", e),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { scores } => play(JsonScoreStore::new(scores)),
        Commands::History { scores } => {
            let history = JsonScoreStore::new(scores).load()?;
            print_history(&history);
            Ok(())
        }
    }
}
