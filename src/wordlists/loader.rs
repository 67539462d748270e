//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load an ordered word list from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped, as
/// are lines that are not a valid word (those are logged).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use phirldle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse an ordered word list from text, one word per line
#[must_use]
pub fn parse_words(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match SecretWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = number + 1, word = trimmed, "skipping word: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use phirldle::wordlists::loader::words_from_slice;
/// use phirldle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["fall", "arbor", "plotsie"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "FALL");
        assert_eq!(words[1].text(), "ARBOR");
        assert_eq!(words[2].text(), "PLOTSIE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["fall", "t0wn", "", "fest"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "FALL");
        assert_eq!(words[1].text(), "FEST");
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let words = parse_words("# rounds\nfall\n\n  town  \nno way\ncheer\n");
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, ["FALL", "TOWN", "CHEER"]);
    }

    #[test]
    fn load_from_file_reads_ordered_list() {
        let path = std::env::temp_dir().join(format!("phirldle-words-{}.txt", std::process::id()));
        fs::write(&path, "the\nbest\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "BEST");
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/phirldle/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
