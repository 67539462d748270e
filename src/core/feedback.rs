//! Guess evaluation against a secret word
//!
//! Each position of a submitted guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the word, elsewhere)
//! - Absent (letter is not in the word, or every occurrence is already accounted for)

use super::SecretWord;
use rustc_hash::FxHashMap;

/// Classification of a single guessed letter
///
/// Ordered by strength so that `max` picks the most informative status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-letter feedback for one guess, one entry per secret letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// The classifications, in guess order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Correct)
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Correct)
            .count()
    }

    /// Count the number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// The guess must have the same length as the secret; callers check this
/// before submitting. Letters are compared case-insensitively.
///
/// # Algorithm
/// 1. First pass: mark exact matches as correct and remove them from the available pool
/// 2. Second pass: mark present letters from what remains in the pool, consuming one each
///
/// # Examples
/// ```
/// use phirldle::core::{Classification, SecretWord, evaluate};
///
/// let secret = SecretWord::new("FALL").unwrap();
/// let feedback = evaluate("FOLD", &secret);
///
/// assert_eq!(
///     feedback.classifications(),
///     &[
///         Classification::Correct,
///         Classification::Absent,
///         Classification::Correct,
///         Classification::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, secret: &SecretWord) -> Feedback {
    debug_assert_eq!(
        guess.len(),
        secret.len(),
        "guess and secret must have the same length"
    );

    let guess = guess.as_bytes();
    let secret_bytes = secret.bytes();
    let mut result = vec![Classification::Absent; secret_bytes.len()];
    let mut available = secret.char_counts();
    let mut matched = vec![false; secret_bytes.len()];

    // First pass: exact position matches
    for (i, &answer) in secret_bytes.iter().enumerate() {
        if guess.get(i).map(u8::to_ascii_uppercase) == Some(answer) {
            result[i] = Classification::Correct;
            matched[i] = true;
            if let Some(count) = available.get_mut(&answer) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from the unconsumed pool
    for (i, slot) in result.iter_mut().enumerate() {
        if matched[i] {
            continue;
        }
        let Some(letter) = guess.get(i).map(u8::to_ascii_uppercase) else {
            continue;
        };
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            *slot = Classification::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

/// Best classification each letter has received across `history`
///
/// A letter keeps its strongest status (correct over present over absent),
/// which is what an on-screen keyboard shows. Letters never guessed are absent
/// from the map.
#[must_use]
pub fn letter_statuses<S: AsRef<str>>(
    history: &[S],
    secret: &SecretWord,
) -> FxHashMap<u8, Classification> {
    let mut statuses: FxHashMap<u8, Classification> = FxHashMap::default();

    for guess in history {
        let guess = guess.as_ref();
        let feedback = evaluate(guess, secret);
        for (&letter, &class) in guess.as_bytes().iter().zip(feedback.classifications()) {
            let entry = statuses
                .entry(letter.to_ascii_uppercase())
                .or_insert(class);
            *entry = (*entry).max(class);
        }
    }

    statuses
}
