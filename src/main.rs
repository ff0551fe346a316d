//! Tetris Stack console runner (default binary).
//!
//! Shows the queue and the reserve pile, reads one menu selection per line
//! and dispatches it to the session. The loop never aborts on a rejected
//! action; it reports the error and asks again.

use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use tetris_stack::core::session::ActionOutcome;
use tetris_stack::core::GameSession;
use tetris_stack::term::{view, ConsoleRenderer};
use tetris_stack::types::Challenge;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let challenge = match args.first() {
        Some(s) => Challenge::from_str(s).ok_or_else(|| {
            anyhow!("unknown challenge '{s}' (expected novice, adventurer or master)")
        })?,
        None => Challenge::Master,
    };
    let seed = match args.get(1) {
        Some(s) => s
            .parse::<u32>()
            .with_context(|| format!("invalid seed '{s}'"))?,
        None => clock_seed(),
    };

    let mut session = GameSession::new(challenge, seed);
    let mut renderer = ConsoleRenderer::new();
    renderer.print_line(&view::title(challenge))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        renderer.print_state(&session.snapshot())?;
        renderer.print_menu(challenge)?;
        renderer.print_prompt()?;

        // EOF ends the session like a quit.
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Ok(choice) = line.trim().parse::<u32>() else {
            renderer.print_line(view::invalid_option())?;
            continue;
        };
        let Some(action) = challenge.select(choice) else {
            renderer.print_line(view::invalid_option())?;
            continue;
        };

        match session.apply(action) {
            Ok(ActionOutcome::Quit) => {
                renderer.print_outcome(&ActionOutcome::Quit)?;
                break;
            }
            Ok(outcome) => renderer.print_outcome(&outcome)?,
            Err(err) => renderer.print_error(&err)?,
        }
    }

    Ok(())
}

/// Seed for interactive runs; tests and the optional CLI seed stay
/// deterministic instead
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
