//! Pure console view - assembles every line the program prints
//!
//! No I/O here. The renderer decides how the lines reach the terminal,
//! which keeps all of the wording unit-testable as plain strings.

use tetris_stack_core::session::ActionOutcome;
use tetris_stack_core::SessionSnapshot;
use tetris_stack_types::{ActionError, Challenge, Piece};

/// Program banner with the active challenge tier
pub fn title(challenge: Challenge) -> String {
    format!("=== TETRIS STACK - {} ===", challenge.as_str().to_uppercase())
}

/// Join pieces into space-separated bracketed tokens
fn tokens<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let joined: Vec<String> = pieces.map(|p| p.to_string()).collect();
    if joined.is_empty() {
        "(empty)".to_string()
    } else {
        joined.join(" ")
    }
}

/// Queue contents, front to back
pub fn queue_line(snapshot: &SessionSnapshot) -> String {
    format!("Piece queue       {}", tokens(snapshot.queue.iter()))
}

/// Pile contents, top to base
pub fn pile_line(snapshot: &SessionSnapshot) -> String {
    format!(
        "Reserve pile      (top -> base): {}",
        tokens(snapshot.pile.iter())
    )
}

/// The full state block shown before every menu
pub fn state_lines(snapshot: &SessionSnapshot) -> Vec<String> {
    let mut lines = vec!["=== Current state ===".to_string(), queue_line(snapshot)];
    // The novice tier plays with the queue alone.
    if snapshot.challenge != Challenge::Novice {
        lines.push(pile_line(snapshot));
    }
    lines
}

/// Numbered menu for the active tier, ending with the quit entry
pub fn menu_lines(challenge: Challenge) -> Vec<String> {
    let mut lines = vec!["Available actions:".to_string()];
    for (i, action) in challenge.menu().iter().enumerate() {
        lines.push(format!("{} - {}", i + 1, action.label()));
    }
    lines.push("0 - Quit".to_string());
    lines
}

/// Input prompt, printed without a trailing newline
pub fn prompt() -> &'static str {
    "Choose an option: "
}

/// One-line report of what a successful action did
pub fn outcome_message(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Played { piece, .. } => {
            format!("Action: piece {piece} was played!")
        }
        ActionOutcome::Inserted(piece) => {
            format!("Action: new piece {piece} added to the queue!")
        }
        ActionOutcome::Reserved(piece) => {
            format!("Action: piece {piece} sent to the reserve pile!")
        }
        ActionOutcome::Used(piece) => {
            format!("Action: reserved piece {piece} was used!")
        }
        ActionOutcome::Swapped { front, top } => format!(
            "Action: queue front and pile top swapped! Front is now {front}, top is now {top}"
        ),
        ActionOutcome::BulkSwapped => {
            "Action: swapped the first 3 queue pieces with the 3 pile pieces!".to_string()
        }
        ActionOutcome::Quit => "Leaving the program...".to_string(),
    }
}

/// One-line report of a rejected action
pub fn error_message(error: &ActionError) -> String {
    format!("Error: {error}!")
}

/// Shown when the typed selection is not on the menu
pub fn invalid_option() -> &'static str {
    "Invalid option! Try again."
}
