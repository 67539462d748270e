//! Display functions for the line-oriented game

use super::formatters::{feedback_row, guess_slots, round_counter};
use crate::game::{Phase, RoundOutcome, Session};
use colored::Colorize;

/// Print the lives row, round counter and played words
pub fn print_status<R>(session: &Session<R>) {
    println!("\n{}", "─".repeat(60).cyan());

    let lives = session.lives().to_string();
    if session.is_low_on_lives() {
        println!("{}", lives.on_red());
    } else {
        println!("{lives}");
    }

    println!(
        "{}",
        round_counter(session.round_index(), session.word_count()).bright_black()
    );

    if !session.round_records().is_empty() {
        let chips: Vec<String> = session
            .round_records()
            .iter()
            .map(|record| match record.outcome {
                RoundOutcome::Won => record.word.text().green().bold().to_string(),
                RoundOutcome::Lost => record.word.text().red().to_string(),
            })
            .collect();
        println!("Played: {}", chips.join(" "));
    }

    println!("{}", "─".repeat(60).cyan());
}

/// Print every guess of the round so far and the empty slots for the next
pub fn print_board<R>(session: &Session<R>) {
    for (guess, feedback) in session.evaluated_history() {
        println!("  {}", feedback_row(guess, &feedback));
    }

    if let Some(secret) = session.secret()
        && session.attempts_left() > 0
    {
        println!(
            "  {}   ({} attempts left)",
            guess_slots(session.current_guess(), secret.len()),
            session.attempts_left()
        );
    }
}

/// Print the status message, if any, styled by the session phase
pub fn print_message<R>(session: &Session<R>) {
    let message = session.message();
    if message.is_empty() {
        return;
    }

    match session.phase() {
        Phase::GameOver(_) => println!("\n{}", message.bright_red().bold()),
        Phase::RoundResolved(RoundOutcome::Won) => println!("\n{}", message.bright_green().bold()),
        Phase::RoundResolved(RoundOutcome::Lost) => println!("\n{}", message.red()),
        Phase::Playing => println!("\n{}", message.yellow()),
    }
}
