//! Flavor text for round outcomes
//!
//! Messages are built from an adjective and an animal, each drawn
//! independently and uniformly from its pool.

use rand::Rng;
use rand::prelude::IndexedRandom;

const WIN_ADJECTIVES: &[&str] = &[
    "beautiful", "gorgeous", "stunning", "lovely", "charming", "elegant", "graceful", "radiant",
    "dazzling", "exquisite",
];

const WIN_ANIMALS: &[&str] = &[
    "goose", "duck", "swan", "flamingo", "penguin", "pelican", "heron", "stork", "crane",
    "albatross",
];

const LOSS_ADJECTIVES: &[&str] = &[
    "silly", "goofy", "foolish", "absurd", "ridiculous", "ludicrous", "comical", "hilarious",
    "wacky", "zany",
];

const LOSS_ANIMALS: &[&str] = &[
    "frog", "mouse", "hamster", "gerbil", "squirrel", "chipmunk", "hedgehog", "ferret", "rabbit",
    "guinea pig",
];

/// Message shown when the last life is spent
pub const OUT_OF_LIVES_MESSAGE: &str = "You tragic monkey! You've lost! Tell Alma immediately!";

/// Phrase pools used for outcome messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorText {
    pub win_adjectives: &'static [&'static str],
    pub win_animals: &'static [&'static str],
    pub loss_adjectives: &'static [&'static str],
    pub loss_animals: &'static [&'static str],
}

impl Default for FlavorText {
    fn default() -> Self {
        Self {
            win_adjectives: WIN_ADJECTIVES,
            win_animals: WIN_ANIMALS,
            loss_adjectives: LOSS_ADJECTIVES,
            loss_animals: LOSS_ANIMALS,
        }
    }
}

impl FlavorText {
    /// Congratulation for a solved round
    pub fn win_message<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = pick(self.win_adjectives, rng);
        let animal = pick(self.win_animals, rng);
        format!("Correct! You {adjective} {animal}!")
    }

    /// Commiseration for a round that ran out of attempts, revealing the word
    pub fn loss_message<R: Rng + ?Sized>(&self, secret: &str, rng: &mut R) -> String {
        let adjective = pick(self.loss_adjectives, rng);
        let animal = pick(self.loss_animals, rng);
        format!("You {adjective} {animal}! The word was {secret}.")
    }
}

/// Message shown when every word in the list has been played
#[must_use]
pub fn all_words_played_message(count: usize) -> String {
    format!("That's all {count} words played! Tell Alma how it went.")
}

// An empty pool yields an empty phrase rather than failing.
fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn win_message_uses_win_pools() {
        let flavor = FlavorText::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..20 {
            let message = flavor.win_message(&mut rng);
            let rest = message.strip_prefix("Correct! You ").unwrap();
            assert!(WIN_ADJECTIVES.iter().any(|a| rest.starts_with(a)), "{message}");
            assert!(WIN_ANIMALS.iter().any(|a| rest.ends_with(&format!("{a}!"))), "{message}");
        }
    }

    #[test]
    fn loss_message_reveals_secret() {
        let flavor = FlavorText::default();
        let mut rng = StdRng::seed_from_u64(5);
        let message = flavor.loss_message("TOWN", &mut rng);

        assert!(message.starts_with("You "));
        assert!(message.ends_with("The word was TOWN."));
        assert!(LOSS_ADJECTIVES.iter().any(|a| message.contains(a)));
    }

    #[test]
    fn single_entry_pools_are_deterministic() {
        let flavor = FlavorText {
            win_adjectives: &["lovely"],
            win_animals: &["goose"],
            loss_adjectives: &["silly"],
            loss_animals: &["frog"],
        };
        let mut rng = StdRng::seed_from_u64(99);

        assert_eq!(flavor.win_message(&mut rng), "Correct! You lovely goose!");
        assert_eq!(
            flavor.loss_message("FEST", &mut rng),
            "You silly frog! The word was FEST."
        );
    }

    #[test]
    fn same_seed_same_message() {
        let flavor = FlavorText::default();
        let a = flavor.win_message(&mut StdRng::seed_from_u64(42));
        let b = flavor.win_message(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_pool_yields_empty_phrase() {
        let flavor = FlavorText {
            win_adjectives: &[],
            ..FlavorText::default()
        };
        let message = flavor.win_message(&mut StdRng::seed_from_u64(0));
        assert!(message.starts_with("Correct! You  "));
    }
}
