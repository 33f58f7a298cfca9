#![doc = include_str!("../README.md")]

use std::path::PathBuf;

use thiserror::Error;

pub mod feedback;
pub use feedback::{Feedback, Grade};

pub mod filter;
pub use filter::{filter_candidates, matches_feedback};

pub mod session;
pub use session::{Outcome, Session};

pub mod strategy;
pub use strategy::Strategy;

pub mod words;
pub use words::Word;

/// The number of letters in every word, guess, and round of feedback.
pub const WORD_LENGTH: usize = 5;

/// The number of guesses a session allows by default.
pub const MAX_ATTEMPTS: usize = 6;

/// The errors that `wordle_assist` can produce.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("could not read word list {path:?}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filtering removed every candidate, so there is nothing left to guess.
    /// Some earlier round of feedback must have been entered wrong.
    #[error("no candidates remain after filtering")]
    NoCandidates,

    #[error("general IO error")]
    Printing(#[from] std::io::Error),
}

pub type Result<T, E = AssistError> = std::result::Result<T, E>;
