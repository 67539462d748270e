//! Simple interactive CLI mode
//!
//! Text-based game without TUI: whole words are typed per line.

use crate::game::{Input, InputOutcome, Session};
use crate::output::{print_board, print_message, print_status};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;
use tracing::debug;

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Restart,
    Guess(Vec<Input>),
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "restart" => Command::Restart,
        word => {
            let letters: Option<Vec<Input>> = word.chars().map(Input::letter).collect();
            match letters {
                Some(letters) if !letters.is_empty() => Command::Guess(letters),
                _ => Command::Invalid(format!("'{word}' is not a word. Letters only, please.")),
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     PHIRLDLE - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess each word within {} attempts.", session.config().max_attempts);
    println!("Every wrong guess costs a life. Lose them all and it's over.");
    println!("Commands: 'quit' to exit, 'restart' to start over\n");

    loop {
        if session.is_game_over() {
            print_message(session);
            match get_user_input("I've told Alma, I want to try again (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.restart();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_status(session);
        print_board(session);

        let letters = match parse_command(&get_user_input("Guess")?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Restart => {
                session.restart();
                println!("\n🔄 New game started!");
                continue;
            }
            Command::Invalid(reason) => {
                println!("{}", reason.yellow());
                continue;
            }
            Command::Guess(letters) => letters,
        };

        let outcome = submit_word(session, &letters);
        debug!(?outcome, "line submitted");

        match outcome {
            InputOutcome::Won | InputOutcome::Lost => {
                print_board(session);
                print_message(session);
                wait_for_next_round(session);
            }
            InputOutcome::Rejected { .. } => print_message(session),
            _ => {}
        }
    }
}

/// Type a whole word into the session and submit it
///
/// The in-progress guess is cleared first. A word longer than the secret is
/// rejected rather than truncated to fit.
fn submit_word<R: Rng>(session: &mut Session<R>, letters: &[Input]) -> InputOutcome {
    while session.handle_input(Input::Delete) == InputOutcome::Edited {}

    let expected = session.secret().map_or(0, crate::core::SecretWord::len);
    if letters.len() > expected {
        // Too long: nothing typed, so the submit reports the expected length
        return session.handle_input(Input::Submit);
    }

    for &letter in letters {
        session.handle_input(letter);
    }
    session.handle_input(Input::Submit)
}

/// Block until the pending round transition fires
fn wait_for_next_round<R: Rng>(session: &mut Session<R>) {
    let Some(ticket) = session.pending_round() else {
        return;
    };

    let remaining = ticket.due().saturating_duration_since(Instant::now());
    thread::sleep(remaining);
    session.on_tick(Instant::now());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like typing quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
