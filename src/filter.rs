//! Narrowing the candidate list from one round of feedback.
//!
//! Every mark constrains candidates on its own, position by position. A
//! consequence worth knowing about: when a guess repeats a letter and the
//! game grades one copy `y` and the other `b`, the `b` mark still eliminates
//! every word containing that letter. The per-letter-count rules the real
//! game applies to doubled letters are not modeled here.

use log::trace;

use crate::{
    feedback::{Feedback, Grade},
    words::Word,
};

/// Returns true if `word` is consistent with one round of feedback.
///
/// A word, guess, and feedback of unequal lengths never match. Otherwise,
/// for each position of the guess:
///
/// - [`Grade::Correct`]: the word must hold the guessed letter at that
///   position.
/// - [`Grade::Almost`]: the word must contain the guessed letter somewhere,
///   but not at that position.
/// - [`Grade::Incorrect`]: the word must not contain the guessed letter at
///   all.
/// - No mark (an unrecognized feedback character): no constraint.
pub fn matches_feedback(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    if word.len() != guess.len() || guess.len() != feedback.len() {
        return false;
    }

    for (i, mark) in feedback.marks().iter().enumerate() {
        let letter = guess.letter(i);
        match mark {
            Some(Grade::Correct) => {
                if word.letter(i) != letter {
                    return false;
                }
            }
            Some(Grade::Almost) => {
                if !word.contains_letter(letter) || word.letter(i) == letter {
                    return false;
                }
            }
            Some(Grade::Incorrect) => {
                if word.contains_letter(letter) {
                    return false;
                }
            }
            None => {}
        }
    }

    true
}

/// Keeps the candidates consistent with `feedback`, in their original order.
///
/// # Examples
///
/// ```rust
/// use wordle_assist::{feedback::Feedback, filter::filter_candidates, words::Word};
///
/// let candidates: Vec<Word> = ["CRATE", "TRACE", "STARE"]
///     .iter()
///     .map(|w| Word::parse(w).unwrap())
///     .collect();
/// let guess = Word::parse("CRATE").unwrap();
///
/// let kept = filter_candidates(&candidates, &guess, &Feedback::parse("ggggg"));
/// assert_eq!(kept, vec![guess]);
/// ```
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let kept: Vec<Word> = candidates
        .iter()
        .filter(|word| matches_feedback(word, guess, feedback))
        .cloned()
        .collect();

    trace!(
        "{} of {} candidates survive {}",
        kept.len(),
        candidates.len(),
        guess
    );

    kept
}

#[cfg(test)]
mod test {
    use std::ops::Deref;

    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn kept(candidates: &[&str], guess: &str, feedback: &str) -> Vec<String> {
        filter_candidates(
            &words(candidates),
            &Word::parse(guess).unwrap(),
            &Feedback::parse(feedback),
        )
        .iter()
        .map(|w| w.deref().to_string())
        .collect()
    }

    #[test]
    fn all_absent_rejects_words_sharing_any_letter() {
        // SLATE and PLATE both contain A, T, and E, all marked absent.
        assert!(kept(&["CRATE", "SLATE", "PLATE"], "CRATE", "bbbbb").is_empty());
    }

    #[test]
    fn all_absent_keeps_disjoint_words() {
        assert_eq!(
            kept(&["CRATE", "SLATE", "PLATE"], "SOUND", "bbbbb"),
            vec!["CRATE", "PLATE"]
        );
    }

    #[test]
    fn all_correct_keeps_only_the_guess() {
        assert_eq!(
            kept(&["CRATE", "TRACE", "STARE"], "CRATE", "ggggg"),
            vec!["CRATE"]
        );
        assert!(kept(&["TRACE", "STARE"], "CRATE", "ggggg").is_empty());
    }

    #[test]
    fn robot_round_applies_each_mark_literally() {
        // ABOUT has no R, ROBOT holds R at the almost-marked position, and
        // TABOO has no R either, so nothing survives.
        assert!(kept(&["ABOUT", "ROBOT", "TABOO"], "ROBOT", "ybgyb").is_empty());
    }

    #[test]
    fn almost_requires_the_letter_elsewhere() {
        // R must appear away from position 0; O, A, S, and T must not appear.
        assert_eq!(
            kept(&["WRECK", "RUPEE", "CHOIR", "CRUMB"], "ROAST", "ybbbb"),
            vec!["WRECK", "CRUMB"]
        );
    }

    #[test]
    fn unrecognized_marks_constrain_nothing() {
        assert_eq!(
            kept(&["CRATE", "SLATE", "PLATE"], "CRATE", "x1?.z"),
            vec!["CRATE", "SLATE", "PLATE"]
        );
    }

    #[test]
    fn wrong_length_feedback_rejects_everything() {
        assert!(kept(&["CRATE", "SLATE"], "CRATE", "gggg").is_empty());
        assert!(kept(&["CRATE", "SLATE"], "CRATE", "gggggg").is_empty());
        assert!(kept(&["CRATE", "SLATE"], "CRATE", "").is_empty());
    }

    #[test]
    fn doubled_letter_marks_stay_independent() {
        // Position 2 wants an O somewhere; position 3 bans O outright. No
        // word can satisfy both, whether or not it contains an O.
        assert!(kept(&["SOBER", "SPOOL", "BLIMP"], "SPOOL", "bbybb").is_empty());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn word() -> impl Strategy<Value = Word> {
            "[A-Z]{5}".prop_map(|s| Word::parse(&s).unwrap())
        }

        fn feedback() -> impl Strategy<Value = Feedback> {
            "[gyb?]{5}".prop_map(|s| Feedback::parse(&s))
        }

        proptest! {
            #[test]
            fn survivors_survive_alone(
                candidates in prop::collection::vec(word(), 0..40),
                guess in word(),
                feedback in feedback(),
            ) {
                for survivor in filter_candidates(&candidates, &guess, &feedback) {
                    prop_assert_eq!(
                        filter_candidates(&[survivor.clone()], &guess, &feedback),
                        vec![survivor]
                    );
                }
            }

            #[test]
            fn output_is_a_subsequence_of_input(
                candidates in prop::collection::vec(word(), 0..40),
                guess in word(),
                feedback in feedback(),
            ) {
                let kept = filter_candidates(&candidates, &guess, &feedback);
                let mut rest = candidates.iter();
                for word in &kept {
                    prop_assert!(rest.any(|c| c == word));
                }
            }

            #[test]
            fn all_absent_never_keeps_a_shared_letter(
                candidates in prop::collection::vec(word(), 0..40),
                guess in word(),
            ) {
                let feedback = Feedback::parse("bbbbb");
                for survivor in filter_candidates(&candidates, &guess, &feedback) {
                    for position in 0..guess.len() {
                        prop_assert!(!survivor.contains(guess.letter(position) as char));
                    }
                }
            }
        }
    }
}
