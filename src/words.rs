//! Candidate words and word-list loading.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::Deref,
    path::Path,
};

use log::debug;

use crate::{AssistError, Result, WORD_LENGTH};

/// A single candidate word.
///
/// Words are case-normalized to uppercase on construction and immutable
/// afterwards. Construction succeeds only when the normalized line is
/// exactly [`WORD_LENGTH`] bytes long; nothing else about the contents is
/// checked, so a line like `ca'nt` loads as a word.
///
/// # Examples
///
/// ```rust
/// # use std::ops::Deref;
/// # use wordle_assist::words::Word;
/// #
/// let crane = Word::parse("crane").unwrap();
/// assert_eq!(crane.deref(), "CRANE");
///
/// assert!(Word::parse("tea").is_none());
/// assert!(Word::parse("grande").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    inner: Box<str>,
}

impl Word {
    /// Normalizes `line` to uppercase and returns a [`Word`] if the result
    /// has the right length.
    pub fn parse(line: &str) -> Option<Self> {
        let normalized = line.to_uppercase();
        if normalized.len() == WORD_LENGTH {
            Some(Word {
                inner: normalized.into_boxed_str(),
            })
        } else {
            None
        }
    }

    /// Returns true if any position of this word holds `letter`.
    pub(crate) fn contains_letter(&self, letter: u8) -> bool {
        self.inner.as_bytes().contains(&letter)
    }

    /// Returns the letter at `position`.
    pub(crate) fn letter(&self, position: usize) -> u8 {
        self.inner.as_bytes()[position]
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deref())
    }
}

/// Reads candidate words from the file at `path`.
///
/// Every line is passed through [`Word::parse()`]; lines that do not
/// normalize to exactly [`WORD_LENGTH`] bytes are discarded silently. File
/// order is preserved, and the file handle is released before this function
/// returns.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let open_error = |source| AssistError::WordList {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_error)?;

    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(open_error)?;
        if let Some(word) = Word::parse(&line) {
            words.push(word);
        }
    }

    debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

#[cfg(test)]
mod test {
    use std::{env, fs, ops::Deref};

    use super::*;

    #[test]
    fn parse_normalizes_case() {
        assert_eq!(Word::parse("cRaNe").unwrap().deref(), "CRANE");
    }

    #[test]
    fn parse_keeps_non_letters() {
        assert_eq!(Word::parse("ca'nt").unwrap().deref(), "CA'NT");
    }

    #[test]
    fn parse_rejects_wrong_lengths() {
        assert!(Word::parse("").is_none());
        assert!(Word::parse("tea").is_none());
        assert!(Word::parse("grande").is_none());
    }

    #[test]
    fn load_discards_and_preserves_order() -> Result<()> {
        let path = env::temp_dir().join(format!("wordle_assist-{}.txt", std::process::id()));
        fs::write(&path, "crane\nirrelevant\nslate\nno\ncrate\n")
            .map_err(AssistError::Printing)?;

        let words = load_words(&path)?;
        fs::remove_file(&path).map_err(AssistError::Printing)?;

        let loaded: Vec<&str> = words.iter().map(|w| w.deref()).collect();
        assert_eq!(loaded, vec!["CRANE", "SLATE", "CRATE"]);

        Ok(())
    }

    #[test]
    fn load_fails_on_missing_file() {
        let missing = env::temp_dir().join("wordle_assist-does-not-exist.txt");
        assert!(matches!(
            load_words(&missing),
            Err(AssistError::WordList { .. })
        ));
    }
}
