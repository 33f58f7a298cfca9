//! Per-letter feedback marks and feedback-line parsing.

use crate::WORD_LENGTH;

/// The grade a single letter of a guess received.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Grade {
    /// The letter is in the word, at this position.
    Correct,

    /// The letter is in the word, but not at this position.
    Almost,

    /// The letter is not in the word.
    Incorrect,
}

/// One round of feedback, as entered at the prompt.
///
/// Each character of the feedback line maps to one mark: `g` to
/// [`Grade::Correct`], `y` to [`Grade::Almost`], and `b` to
/// [`Grade::Incorrect`], all lowercase. Any other character parses to no
/// mark at all and constrains nothing during filtering. The line length is
/// preserved rather than validated; the filter treats a word compared
/// against feedback of the wrong length as a mismatch, never as an error.
///
/// # Examples
///
/// ```rust
/// use wordle_assist::feedback::{Feedback, Grade};
///
/// let feedback = Feedback::parse("gy?bb");
/// assert_eq!(feedback.marks()[0], Some(Grade::Correct));
/// assert_eq!(feedback.marks()[2], None);
/// assert!(!feedback.is_win());
///
/// assert!(Feedback::parse("ggggg").is_win());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Option<Grade>>,
}

impl Feedback {
    /// Parses a feedback line, one mark per character.
    pub fn parse(line: &str) -> Self {
        let marks = line
            .chars()
            .map(|c| match c {
                'g' => Some(Grade::Correct),
                'y' => Some(Grade::Almost),
                'b' => Some(Grade::Incorrect),
                _ => None,
            })
            .collect();

        Feedback { marks }
    }

    /// Returns the marks, one per character of the feedback line.
    pub fn marks(&self) -> &[Option<Grade>] {
        &self.marks
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns true if the feedback line was empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns true for a winning round: exactly [`WORD_LENGTH`] marks, all
    /// [`Grade::Correct`].
    pub fn is_win(&self) -> bool {
        self.marks.len() == WORD_LENGTH && self.marks.iter().all(|m| *m == Some(Grade::Correct))
    }
}
