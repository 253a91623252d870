use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use gemsweep_core::{Difficulty, RoundEngine};
use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use command::Command;
use session::{Flow, Session};

mod command;
mod render;
mod session;

/// Pick tiles, avoid mines, cash out.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Difficulty of the first round
    #[arg(short, long, default_value_t = Difficulty::default())]
    difficulty: Difficulty,

    /// Seed for mine placement, taken from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON snapshot after each command instead of the board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Mine placement seed: {seed}");

    let mut session = Session::new(RoundEngine::seeded(args.difficulty, seed), args.json);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    session.print(&session.engine().snapshot(), &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match Command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                // help and usage errors are rendered by clap itself
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        if session.execute(command, &mut stdout)? == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }

    Ok(())
}
