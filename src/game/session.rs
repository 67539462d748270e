//! Session controller
//!
//! Owns the round, life and session state and drives every transition:
//!
//! ```text
//!            submit (win / loss)            ticket fires
//! Playing ───────────────────────▶ RoundResolved ─────────▶ Playing (next word)
//!    │                                   │
//!    │ last life spent                   │ last life spent / no words left
//!    ▼                                   ▼
//! GameOver ◀─────────────────────────────┘
//!    │
//!    └── restart ──▶ Playing (first word)
//! ```
//!
//! Round transitions are delayed. Instead of owning a timer, the session hands
//! out a [`ScheduledRound`] ticket that the front-end fires through
//! [`Session::on_tick`] or [`Session::resume`]. Tickets carry the session
//! generation, which restart bumps, so a ticket issued before a restart can
//! never advance the fresh session.

use super::config::{ConfigError, GameConfig};
use super::flavor::{OUT_OF_LIVES_MESSAGE, all_words_played_message};
use super::lives::LivesPool;
use crate::core::{Classification, Feedback, SecretWord, evaluate, letter_statuses};
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, info};

/// One action from the input alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Delete,
    Submit,
}

impl Input {
    /// Letter action for `c`, or `None` if `c` is not an ASCII letter
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then_some(Self::Letter(c.to_ascii_uppercase()))
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    LivesExhausted,
    WordsExhausted,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A round is active and accepting input
    Playing,
    /// The round is over and the next one is scheduled
    RoundResolved(RoundOutcome),
    /// Terminal until restart
    GameOver(GameOverReason),
}

/// Result of a single [`Session::handle_input`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// The in-progress guess changed
    Edited,
    /// Submission had the wrong length
    Rejected { expected_len: usize },
    /// Wrong guess with attempts remaining; a life was spent
    Wrong { attempts_left: usize },
    Won,
    Lost,
    /// The submission spent the last life
    GameOver,
}

/// Delayed continuation that starts the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledRound {
    generation: u64,
    due: Instant,
}

impl ScheduledRound {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn due(self) -> Instant {
        self.due
    }

    #[must_use]
    pub fn is_due(self, now: Instant) -> bool {
        now >= self.due
    }
}

/// A played round, in play order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub word: SecretWord,
    pub outcome: RoundOutcome,
    pub attempts: usize,
}

/// A game session
pub struct Session<R = StdRng> {
    config: GameConfig,
    rng: R,
    secret: Option<SecretWord>,
    current_guess: String,
    history: Vec<String>,
    lives: LivesPool,
    round_index: usize,
    played_words: Vec<SecretWord>,
    records: Vec<RoundRecord>,
    message: String,
    phase: Phase,
    generation: u64,
    pending: Option<ScheduledRound>,
}

impl<R: Rng> Session<R> {
    /// Create a session and start its first round
    ///
    /// `rng` drives flavor text and which life is lost; seed it for reproducible sessions.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut session = Self {
            lives: LivesPool::new(config.lives),
            config,
            rng,
            secret: None,
            current_guess: String::new(),
            history: Vec::new(),
            round_index: 0,
            played_words: Vec::new(),
            records: Vec::new(),
            message: String::new(),
            phase: Phase::Playing,
            generation: 0,
            pending: None,
        };
        session.start_new_round();
        Ok(session)
    }

    /// Start the round for the current round index, or end the game
    pub fn start_new_round(&mut self) {
        if self.lives.is_exhausted() {
            self.end_game(GameOverReason::LivesExhausted);
            return;
        }

        let Some(secret) = self.config.words().get(self.round_index).cloned() else {
            self.end_game(GameOverReason::WordsExhausted);
            return;
        };

        info!(
            round = self.round_index + 1,
            of = self.config.words().len(),
            letters = secret.len(),
            "round started"
        );

        self.secret = Some(secret);
        self.history.clear();
        self.current_guess.clear();
        self.message.clear();
        self.phase = Phase::Playing;
        self.pending = None;
    }

    /// Apply one input action
    ///
    /// Input is ignored unless a round is being played.
    pub fn handle_input(&mut self, input: Input) -> InputOutcome {
        if self.phase != Phase::Playing {
            return InputOutcome::Ignored;
        }
        let Some(secret_len) = self.secret.as_ref().map(SecretWord::len) else {
            return InputOutcome::Ignored;
        };

        match input {
            Input::Letter(c) => {
                if !c.is_ascii_alphabetic() || self.current_guess.len() >= secret_len {
                    return InputOutcome::Ignored;
                }
                self.current_guess.push(c.to_ascii_uppercase());
                InputOutcome::Edited
            }
            Input::Delete => {
                if self.current_guess.pop().is_some() {
                    InputOutcome::Edited
                } else {
                    InputOutcome::Ignored
                }
            }
            Input::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> InputOutcome {
        let Some(secret) = self.secret.clone() else {
            return InputOutcome::Ignored;
        };

        if self.current_guess.len() != secret.len() {
            self.message = format!("The word must be {} letters long.", secret.len());
            return InputOutcome::Rejected {
                expected_len: secret.len(),
            };
        }

        let guess = std::mem::take(&mut self.current_guess);
        let correct = guess == secret.text();
        self.history.push(guess);
        self.message.clear();
        debug!(attempt = self.history.len(), correct, "guess submitted");

        if correct {
            self.win(secret);
            InputOutcome::Won
        } else if self.history.len() >= self.config.max_attempts {
            self.lose(secret)
        } else {
            self.reduce_life();
            if self.is_game_over() {
                InputOutcome::GameOver
            } else {
                InputOutcome::Wrong {
                    attempts_left: self.attempts_left(),
                }
            }
        }
    }

    fn win(&mut self, secret: SecretWord) {
        self.message = self.config.flavor.win_message(&mut self.rng);
        info!(word = %secret, attempts = self.history.len(), "round won");

        self.record_round(secret, RoundOutcome::Won);
        self.round_index += 1;
        self.phase = Phase::RoundResolved(RoundOutcome::Won);
        self.schedule_next_round();
    }

    fn lose(&mut self, secret: SecretWord) -> InputOutcome {
        self.message = self
            .config
            .flavor
            .loss_message(secret.text(), &mut self.rng);
        info!(word = %secret, "round lost");

        self.record_round(secret, RoundOutcome::Lost);
        self.round_index += 1;
        self.reduce_life();

        if self.is_game_over() {
            return InputOutcome::GameOver;
        }
        self.phase = Phase::RoundResolved(RoundOutcome::Lost);
        self.schedule_next_round();
        InputOutcome::Lost
    }

    // The played-words log takes every round's word, won or lost.
    fn record_round(&mut self, word: SecretWord, outcome: RoundOutcome) {
        self.played_words.push(word.clone());
        self.records.push(RoundRecord {
            word,
            outcome,
            attempts: self.history.len(),
        });
    }

    /// Spend one random life; ends the game if it was the last
    fn reduce_life(&mut self) {
        if let Some(slot) = self.lives.spend_random(&mut self.rng) {
            info!(slot, alive = self.lives.alive(), "life spent");
        }
        if self.lives.is_exhausted() {
            self.end_game(GameOverReason::LivesExhausted);
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.secret = None;
        self.pending = None;
        self.phase = Phase::GameOver(reason);
        self.message = match reason {
            GameOverReason::LivesExhausted => OUT_OF_LIVES_MESSAGE.to_string(),
            GameOverReason::WordsExhausted => {
                all_words_played_message(self.config.words().len())
            }
        };
        info!(?reason, rounds = self.round_index, "game over");
    }

    fn schedule_next_round(&mut self) {
        let ticket = ScheduledRound {
            generation: self.generation,
            due: Instant::now() + self.config.round_delay,
        };
        debug!(generation = ticket.generation, "next round scheduled");
        self.pending = Some(ticket);
    }

    /// Fire the pending round transition if it is due at `now`
    ///
    /// Returns true if a new round was started.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(ticket) if ticket.is_due(now) => self.resume(ticket),
            _ => false,
        }
    }

    /// Run a scheduled round transition regardless of its due time
    ///
    /// Tickets from an earlier generation, or that are no longer pending, are ignored.
    /// Returns true if a new round was started.
    pub fn resume(&mut self, ticket: ScheduledRound) -> bool {
        if ticket.generation != self.generation || self.pending != Some(ticket) {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale round ticket"
            );
            return false;
        }

        self.pending = None;
        self.start_new_round();
        true
    }

    /// Reset lives, log and round counter and start again from the first word
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.lives.reset();
        self.played_words.clear();
        self.records.clear();
        self.round_index = 0;
        self.phase = Phase::Playing;
        info!(generation = self.generation, "session restarted");

        self.start_new_round();
    }
}

impl<R> Session<R> {
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The active secret, `None` once the game is over
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Option<&SecretWord> {
        self.secret.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Submitted guesses of the current round
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submitted guesses paired with freshly computed feedback
    #[must_use]
    pub fn evaluated_history(&self) -> Vec<(&str, Feedback)> {
        let Some(secret) = &self.secret else {
            return Vec::new();
        };
        self.history
            .iter()
            .map(|guess| (guess.as_str(), evaluate(guess, secret)))
            .collect()
    }

    /// Best status per guessed letter in the current round
    #[must_use]
    pub fn letter_statuses(&self) -> FxHashMap<u8, Classification> {
        self.secret
            .as_ref()
            .map(|secret| letter_statuses(self.history.as_slice(), secret))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> &LivesPool {
        &self.lives
    }

    #[must_use]
    pub fn is_low_on_lives(&self) -> bool {
        self.lives.is_low()
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of completed rounds, which is also the index of the next word
    #[inline]
    #[must_use]
    pub const fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.config.words().len()
    }

    /// Every played word, won or lost, in play order
    #[inline]
    #[must_use]
    pub fn played_words(&self) -> &[SecretWord] {
        &self.played_words
    }

    #[inline]
    #[must_use]
    pub fn round_records(&self) -> &[RoundRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    #[must_use]
    pub const fn pending_round(&self) -> Option<ScheduledRound> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::flavor::FlavorText;
    use rand::SeedableRng;
    use std::time::Duration;

    fn config(words: &[&str]) -> GameConfig {
        let words = words.iter().map(|w| SecretWord::new(*w).unwrap()).collect();
        GameConfig::new(words).unwrap().with_flavor(FlavorText {
            win_adjectives: &["lovely"],
            win_animals: &["goose"],
            loss_adjectives: &["silly"],
            loss_animals: &["frog"],
        })
    }

    fn session(words: &[&str]) -> Session {
        Session::new(config(words), StdRng::seed_from_u64(17)).unwrap()
    }

    fn type_word(session: &mut Session, word: &str) -> InputOutcome {
        for c in word.chars() {
            session.handle_input(Input::Letter(c));
        }
        session.handle_input(Input::Submit)
    }

    #[test]
    fn input_letter_accepts_only_ascii_letters() {
        assert_eq!(Input::letter('q'), Some(Input::Letter('Q')));
        assert_eq!(Input::letter('Z'), Some(Input::Letter('Z')));
        assert_eq!(Input::letter('1'), None);
        assert_eq!(Input::letter('é'), None);
    }

    #[test]
    fn new_session_starts_first_round() {
        let session = session(&["fall", "town"]);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.secret().unwrap().text(), "FALL");
        assert_eq!(session.round_index(), 0);
        assert_eq!(session.lives().alive(), 15);
        assert!(session.message().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let result = Session::new(config(&["fall"]).with_lives(0), StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(ConfigError::ZeroLives)));
    }

    #[test]
    fn letters_bounded_by_secret_length() {
        let mut session = session(&["all"]);
        for c in ['a', 'b', 'c'] {
            assert_eq!(session.handle_input(Input::Letter(c)), InputOutcome::Edited);
        }
        assert_eq!(session.handle_input(Input::Letter('d')), InputOutcome::Ignored);
        assert_eq!(session.current_guess(), "ABC");
    }

    #[test]
    fn delete_trims_last_letter() {
        let mut session = session(&["all"]);
        assert_eq!(session.handle_input(Input::Delete), InputOutcome::Ignored);
        session.handle_input(Input::Letter('a'));
        session.handle_input(Input::Letter('b'));
        assert_eq!(session.handle_input(Input::Delete), InputOutcome::Edited);
        assert_eq!(session.current_guess(), "A");
    }

    #[test]
    fn wrong_guess_spends_a_life() {
        let mut session = session(&["fall"]);
        let outcome = type_word(&mut session, "fold");

        assert_eq!(outcome, InputOutcome::Wrong { attempts_left: 5 });
        assert_eq!(session.lives().spent(), 1);
        assert_eq!(session.history(), &["FOLD".to_string()]);
        assert_eq!(session.current_guess(), "");
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn valid_submission_clears_validation_message() {
        let mut session = session(&["fall"]);
        session.handle_input(Input::Submit);
        assert_eq!(session.message(), "The word must be 4 letters long.");

        type_word(&mut session, "fold");
        assert!(session.message().is_empty());
    }

    #[test]
    fn win_schedules_next_round() {
        let mut session = session(&["fall", "town"]);
        assert_eq!(type_word(&mut session, "fall"), InputOutcome::Won);

        assert_eq!(session.phase(), Phase::RoundResolved(RoundOutcome::Won));
        assert_eq!(session.message(), "Correct! You lovely goose!");
        assert_eq!(session.lives().spent(), 0);

        let ticket = session.pending_round().unwrap();
        assert_eq!(ticket.generation(), 0);
        assert!(ticket.due() > Instant::now() + Duration::from_millis(2000));

        // Not yet due
        assert!(!session.on_tick(Instant::now()));
        assert_eq!(session.phase(), Phase::RoundResolved(RoundOutcome::Won));

        assert!(session.on_tick(ticket.due()));
        assert_eq!(session.secret().unwrap().text(), "TOWN");
        assert!(session.history().is_empty());
        assert!(session.message().is_empty());
        assert_eq!(session.pending_round(), None);
    }

    #[test]
    fn input_ignored_while_round_resolved() {
        let mut session = session(&["fall", "town"]);
        type_word(&mut session, "fall");

        assert_eq!(session.handle_input(Input::Letter('t')), InputOutcome::Ignored);
        assert_eq!(session.handle_input(Input::Submit), InputOutcome::Ignored);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn ticket_fires_once() {
        let mut session = session(&["fall", "town", "fest"]);
        type_word(&mut session, "fall");
        let ticket = session.pending_round().unwrap();

        assert!(session.resume(ticket));
        assert!(!session.resume(ticket));
        assert_eq!(session.secret().unwrap().text(), "TOWN");
        assert_eq!(session.round_index(), 1);
    }

    #[test]
    fn stale_ticket_ignored_after_restart() {
        let mut session = session(&["fall", "town"]);
        type_word(&mut session, "fall");
        let stale = session.pending_round().unwrap();

        session.restart();
        assert_eq!(session.generation(), 1);
        assert_eq!(session.pending_round(), None);

        assert!(!session.resume(stale));
        assert!(!session.on_tick(stale.due() + Duration::from_secs(60)));
        assert_eq!(session.secret().unwrap().text(), "FALL");
        assert_eq!(session.round_index(), 0);
        assert!(session.played_words().is_empty());
    }

    #[test]
    fn loss_reveals_word_and_spends_life() {
        let mut session = session(&["town", "fest"]);
        for _ in 0..5 {
            assert!(matches!(
                type_word(&mut session, "fall"),
                InputOutcome::Wrong { .. }
            ));
        }
        let spent_before = session.lives().spent();
        assert_eq!(type_word(&mut session, "fall"), InputOutcome::Lost);

        assert_eq!(session.lives().spent(), spent_before + 1);
        assert_eq!(session.message(), "You silly frog! The word was TOWN.");
        assert_eq!(session.played_words()[0].text(), "TOWN");
        assert_eq!(session.round_records()[0].outcome, RoundOutcome::Lost);
        assert_eq!(session.round_records()[0].attempts, 6);
        assert_eq!(session.round_index(), 1);
        assert!(session.pending_round().is_some());
    }

    #[test]
    fn last_life_ends_game_mid_round() {
        let mut session =
            Session::new(config(&["fall"]).with_lives(2), StdRng::seed_from_u64(4)).unwrap();

        assert_eq!(
            type_word(&mut session, "fold"),
            InputOutcome::Wrong { attempts_left: 5 }
        );
        assert!(session.is_low_on_lives());
        assert_eq!(type_word(&mut session, "fold"), InputOutcome::GameOver);

        assert_eq!(
            session.phase(),
            Phase::GameOver(GameOverReason::LivesExhausted)
        );
        assert_eq!(session.secret(), None);
        assert_eq!(session.pending_round(), None);
        assert_eq!(session.message(), OUT_OF_LIVES_MESSAGE);
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn final_loss_on_last_life_counts_the_round() {
        let config = config(&["fall", "town"]).with_lives(1).with_max_attempts(1);
        let mut session = Session::new(config, StdRng::seed_from_u64(4)).unwrap();

        assert_eq!(type_word(&mut session, "fold"), InputOutcome::GameOver);
        assert_eq!(
            session.phase(),
            Phase::GameOver(GameOverReason::LivesExhausted)
        );
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.round_records().len(), session.round_index());
        assert_eq!(session.round_records()[0].outcome, RoundOutcome::Lost);
    }

    #[test]
    fn game_over_ignores_input() {
        let mut session =
            Session::new(config(&["fall"]).with_lives(1), StdRng::seed_from_u64(4)).unwrap();
        type_word(&mut session, "fold");
        assert!(session.is_game_over());

        assert_eq!(session.handle_input(Input::Letter('a')), InputOutcome::Ignored);
        assert_eq!(session.current_guess(), "");
    }

    #[test]
    fn word_list_exhaustion_ends_game() {
        let mut session = session(&["all"]);
        type_word(&mut session, "all");
        let ticket = session.pending_round().unwrap();
        assert!(session.resume(ticket));

        assert_eq!(
            session.phase(),
            Phase::GameOver(GameOverReason::WordsExhausted)
        );
        assert_eq!(session.message(), all_words_played_message(1));
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.round_index(), session.word_count());
    }

    #[test]
    fn evaluated_history_recomputes_feedback() {
        let mut session = session(&["fall"]);
        type_word(&mut session, "fold");
        type_word(&mut session, "loft");

        let evaluated = session.evaluated_history();
        assert_eq!(evaluated.len(), 2);
        assert_eq!(evaluated[0].0, "FOLD");
        assert_eq!(evaluated[0].1.to_emoji(), "🟩⬜🟩⬜");
        assert_eq!(session.letter_statuses().get(&b'F'), Some(&Classification::Correct));
    }

    #[test]
    fn spent_lives_never_decrease_until_restart() {
        let mut session = session(&["fall", "town"]);
        let mut spent = 0;
        for guess in ["fold", "loft", "fist", "lift", "tall", "ball"] {
            type_word(&mut session, guess);
            assert!(session.lives().spent() >= spent);
            spent = session.lives().spent();
        }
        assert_eq!(spent, 6);

        session.restart();
        assert_eq!(session.lives().spent(), 0);
    }
}
