//! Word list loading utilities
//!
//! Loads word pools from files or from the embedded constants. Malformed
//! entries (wrong length, non-letter characters) are filtered during load so
//! nothing ill-formed ever reaches scoring.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Blank lines and entries that fail `Word` validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a `Word` vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["robot", "crane", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "robot");
        assert_eq!(words[1].text(), "crane");
        assert_eq!(words[2].text(), "slate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["robot", "toolong", "abc", "cr4ne", "slate"];
        let words = words_from_slice(input);

        // Only "robot" and "slate" survive validation
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "robot");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["ROBOT"]);
        assert_eq!(words[0].text(), "robot");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
