use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{schedule::TurnScheduler, *};

mod cli;
use cli::Cli;

mod display;
use display::*;

fn main() -> Result<()> {
    // diagnostics go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    let palette = Palette::from_config(&config)?;
    let mut session = GameSession::new(config).context("failed to start a game")?;
    let mut scheduler = TurnScheduler::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    if session.computer_pending() {
        scheduler.post_computer_turn();
    }

    // game loop
    loop {
        let last_move = session.history().last().map(|&(last, _)| last);
        display(session.board(), &palette, last_move).context("Failed to draw board!")?;

        // the previous move is on screen, so the search can block now
        if scheduler.is_pending() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
            spinner.set_message("Computer is thinking...");
            spinner.enable_steady_tick(100);

            let played = scheduler.run_pending(&mut session)?;
            spinner.finish_and_clear();

            if let Some((computer_move, _)) = played {
                println!(
                    "Computer plays column {} ({} positions searched)",
                    computer_move.col + 1,
                    session.last_search_nodes()
                );
            }
            continue;
        }

        match session.state() {
            GameState::Playing => {
                print!("Move input > ");
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    println!();
                    break;
                }

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 => column - 1,
                    _ => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                };

                match session.drop_in_column(column) {
                    Ok(transition) => {
                        scheduler.observe(transition);
                    }
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            GameState::HumanWin => {
                println!("You win!");
                break;
            }
            GameState::ComputerWin => {
                println!("The computer wins!");
                break;
            }
            GameState::Tie => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
