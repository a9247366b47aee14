use anyhow::Context;
use chess_engine::Color;
use clap::{Parser, ValueEnum};
use knightchess::core::{load_settings, save_settings, settings_path};
use knightchess::game::{parse_command, MoveCue, Outcome, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Play chess in the terminal against a one-ply opponent
#[derive(Parser, Debug)]
#[command(name = "knightchess", version)]
struct Args {
    /// Settings file to read (and write with --save-settings)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Side the computer plays
    #[arg(long, value_enum)]
    computer: Option<ComputerSide>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Log filter, e.g. "debug" or "chess_engine=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ComputerSide {
    White,
    Black,
    None,
}

impl ComputerSide {
    fn color(self) -> Option<Color> {
        match self {
            ComputerSide::White => Some(Color::White),
            ComputerSide::Black => Some(Color::Black),
            ComputerSide::None => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = args.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    if let Some(side) = args.computer {
        settings.computer_color = side.color();
    }
    if let Some(delay) = args.delay_ms {
        settings.reply_delay_ms = delay;
    }
    if args.save_settings {
        save_settings(&path, &settings).context("failed to save settings")?;
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let delay = Duration::from_millis(settings.reply_delay_ms);
    let mut session = Session::new(settings, rng);
    info!("[SESSION] Starting, computer plays {:?}", session.settings().computer_color);

    println!("{}", session.render()?);
    println!("Type 'help' for commands.");

    if session.computer_should_move() {
        computer_turn(&mut session, delay).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let outcome = match session.execute(command) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("[SESSION] Command failed: {}", e);
                println!("{}", e);
                continue;
            }
        };
        show(&outcome);
        if outcome.quit {
            break;
        }
        if outcome.computer_to_move {
            computer_turn(&mut session, delay).await?;
        }
    }

    Ok(())
}

async fn computer_turn(session: &mut Session<StdRng>, delay: Duration) -> anyhow::Result<()> {
    tokio::time::sleep(delay).await;
    let outcome = session.play_computer()?;
    show(&outcome);
    Ok(())
}

fn show(outcome: &Outcome) {
    for line in &outcome.lines {
        println!("{}", line);
    }
    if outcome.cue == Some(MoveCue::GameEnd) {
        print!("\x07");
    }
}
