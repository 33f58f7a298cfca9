//! Picking the next guess from the remaining candidates.

use std::fmt::{Debug, Display};

use crate::words::Word;

pub mod first;

/// Trait defining a guess-selection strategy.
///
/// The session asks its strategy for one guess per round and never inspects
/// the candidate list on its own. Implementations see the full remaining
/// candidates, in order, and return a reference to the word to guess, or
/// `None` when nothing remains.
///
/// The trait exists so that a smarter selection rule can replace
/// [`first::First`] without touching the filter or the session.
///
/// # Examples
///
/// ```rust
/// use wordle_assist::{
///     strategy::{first::First, Strategy},
///     words::Word,
/// };
///
/// let candidates = vec![
///     Word::parse("slate").unwrap(),
///     Word::parse("crate").unwrap(),
/// ];
///
/// assert_eq!(First.pick(&candidates), Some(&candidates[0]));
/// assert_eq!(First.pick(&[]), None);
/// ```
pub trait Strategy: Display + Debug {
    /// Chooses the next guess out of `candidates`.
    fn pick<'a>(&self, candidates: &'a [Word]) -> Option<&'a Word>;
}
