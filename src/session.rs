//! The attempt loop that drives a whole game.

use std::io::Write;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    feedback::Feedback, filter::filter_candidates, strategy::Strategy, words::Word, AssistError,
    Result, MAX_ATTEMPTS,
};

/// The terminal state of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// The feedback came back all-correct on the `attempts`-th guess.
    Solved { attempts: usize },

    /// Every allowed guess was used without an all-correct round.
    Exhausted,
}

/// A single assisted game: the remaining candidates, a strategy, and an
/// attempt budget.
///
/// The candidate list is owned by the session and replaced wholesale after
/// each round; it only ever shrinks. Configuration methods consume the
/// session and return a new one.
///
/// # Examples
///
/// ```rust
/// use wordle_assist::{
///     session::{Outcome, Session},
///     strategy::first::First,
///     words::Word,
///     Feedback,
/// };
///
/// let candidates = vec![
///     Word::parse("crane").unwrap(),
///     Word::parse("slate").unwrap(),
/// ];
/// let session = Session::new(candidates, First);
///
/// let mut transcript = Vec::new();
/// let outcome = session
///     .run(&mut transcript, |_guess| Ok(Feedback::parse("ggggg")))
///     .unwrap();
/// assert_eq!(outcome, Outcome::Solved { attempts: 1 });
/// ```
#[derive(Debug)]
pub struct Session<S> {
    strategy: S,
    candidates: Vec<Word>,
    max_attempts: usize,
}

impl<S: Strategy> Session<S> {
    /// Creates a session over `candidates` with the standard budget of
    /// [`MAX_ATTEMPTS`] guesses.
    pub fn new(candidates: Vec<Word>, strategy: S) -> Self {
        Session {
            strategy,
            candidates,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Sets the number of guesses the session allows.
    pub fn max_attempts(self, n: usize) -> Self {
        Session {
            max_attempts: n,
            ..self
        }
    }

    /// The candidates still consistent with every round of feedback so far.
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Runs the loop to completion.
    ///
    /// Each round picks a guess, writes `Guess #n: WORD` to `out`, and hands
    /// the guess to `feedback_source`, which owns prompting and reading. An
    /// all-correct round ends the session as [`Outcome::Solved`]; spending
    /// every guess ends it as [`Outcome::Exhausted`]. Running out of
    /// candidates is an [`AssistError::NoCandidates`] error instead, since
    /// it means some earlier feedback was entered wrong.
    pub fn run<W, F>(mut self, out: &mut W, mut feedback_source: F) -> Result<Outcome>
    where
        W: Write,
        F: FnMut(&Word) -> Result<Feedback>,
    {
        for attempt in 1..=self.max_attempts {
            let guess = self
                .strategy
                .pick(&self.candidates)
                .ok_or(AssistError::NoCandidates)?
                .clone();

            writeln!(out, "Guess #{}: {}", attempt, guess)?;

            let feedback = feedback_source(&guess)?;
            if feedback.is_win() {
                writeln!(out, "Solved!")?;
                return Ok(Outcome::Solved { attempts: attempt });
            }

            let remaining = filter_candidates(&self.candidates, &guess, &feedback);
            debug!(
                "attempt {}: {} eliminated {} of {} candidates",
                attempt,
                guess,
                self.candidates.len() - remaining.len(),
                self.candidates.len(),
            );
            trace!("remaining: {}", remaining.iter().join(", "));
            self.candidates = remaining;
        }

        writeln!(out, "Failed to solve within {} attempts.", self.max_attempts)?;
        Ok(Outcome::Exhausted)
    }
}
