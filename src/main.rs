//! Tic-tac-toe terminal driver.
//!
//! Reads commands from stdin, forwards them to the engine and prints what
//! comes back. The AI "thinking" pause lives here, not in the engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, HELP, Input};
use tictactoe_engine::{EngineConfig, GameEngine, HeuristicAi, MoveStatus, Rejection, Snapshot};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.mode, cli.seed, cli.ai_delay_ms);
    info!(?config, "Starting tictactoe");

    run(config, View { json: cli.json }).await
}

/// Runs the read-dispatch-render loop until `q` or end of input.
#[instrument(skip_all)]
async fn run(config: EngineConfig, view: View) -> Result<()> {
    let ai = match config.ai().seed() {
        Some(seed) => HeuristicAi::with_seed(*seed),
        None => HeuristicAi::from_entropy(),
    };
    let mut engine = GameEngine::with_ai(ai);
    let delay = Duration::from_millis(*config.ai().delay_ms());

    let snapshot = match config.game().mode() {
        Some(mode) => engine.select_mode(*mode),
        None => engine.snapshot(),
    };
    view.render(&snapshot)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ai_timer = tokio::time::sleep(delay);
    tokio::pin!(ai_timer);

    loop {
        tokio::select! {
            () = &mut ai_timer, if engine.is_ai_thinking() => {
                debug!("AI delay elapsed");
                let status = engine.play_ai_turn();
                view.show(&status)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    debug!("End of input");
                    break;
                };
                let Some(input) = Input::parse(&line) else {
                    view.message("Unknown command, type h for help");
                    continue;
                };
                let was_thinking = engine.is_ai_thinking();
                match input {
                    Input::Quit => break,
                    Input::Help => view.message(HELP),
                    Input::Mode(mode) => view.render(&engine.select_mode(mode))?,
                    Input::Restart => view.render(&engine.restart())?,
                    Input::ChangeMode => view.render(&engine.change_mode())?,
                    Input::Cell(index) => view.show(&engine.cell_clicked(index))?,
                }
                if engine.is_ai_thinking() && !was_thinking {
                    ai_timer.as_mut().reset(Instant::now() + delay);
                }
            }
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Prints engine output for a human or, with `--json`, for a program.
struct View {
    json: bool,
}

impl View {
    fn render(&self, snapshot: &Snapshot) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(snapshot)?);
        } else {
            println!("\n{}\n{}", snapshot.board().display(), snapshot.status_line());
        }
        Ok(())
    }

    fn show(&self, status: &MoveStatus) -> Result<()> {
        match status {
            _ if self.json => println!("{}", serde_json::to_string(status)?),
            MoveStatus::Accepted(snapshot) => self.render(snapshot)?,
            MoveStatus::Rejected(Rejection::InvalidIndex(_)) => {
                self.message("Pick a cell from 1 to 9")
            }
            MoveStatus::Rejected(Rejection::CellOccupied(index)) => {
                self.message(&format!("Cell {} is already taken", index + 1))
            }
            MoveStatus::Rejected(reason) => self.message(&reason.to_string()),
        }
        Ok(())
    }

    fn message(&self, text: &str) {
        if self.json {
            println!("{}", serde_json::json!({ "message": text }));
        } else {
            println!("{}", text);
        }
    }
}
