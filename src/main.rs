use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use ratatui::{backend::CrosstermBackend, Terminal};
use roshambo::app::{App, AppOptions, Pacing};
use roshambo::build_info;
use roshambo::input::TerminalKeys;
use roshambo::ui::leaderboard_lines;
use roshambo::{logging, Difficulty};
use std::io;
use std::path::PathBuf;

/// Exit status used when the player quits with Ctrl+C
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(about = "Rock, Paper, Scissors in the terminal", version = build_info::VERSION_STRING)]
struct Args {
    /// Player name (skips the name prompt)
    #[arg(short, long)]
    name: Option<String>,

    /// Computer difficulty: easy, moderate or hard (skips the selection screen)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's moves
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write debug logs to this file (filter via RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        logging::init_file_logging(path)?;
    }

    let options = AppOptions {
        name: args.name,
        difficulty: args.difficulty,
        seed: args.seed,
        pacing: Pacing::default(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(EnterAlternateScreen) {
        restore_terminal();
        return Err(e);
    }
    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e);
        }
    };

    let mut app = App::new(terminal, TerminalKeys::new(), options);
    let result = app.run();

    restore_terminal();

    match result {
        Ok(()) => {
            for line in leaderboard_lines(app.leaderboard()) {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::info!("interrupted by user");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        Err(e) => {
            tracing::error!(error = %e, "terminal input failed");
            Err(e)
        }
    }
}

/// Leave raw mode and the alternate screen. Best effort: errors are ignored
/// so the original failure, if any, is what gets reported.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(cursor::Show);
}
