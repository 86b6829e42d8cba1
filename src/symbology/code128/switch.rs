//! Charset transition policy.
//!
//! [`transition`] is the whole state machine: given the active charset,
//! the character at the scan position and the length of the digit run
//! starting there, it names the charset to use and the switch symbol to
//! emit (if any). The encoder loop owns everything else.

use super::charset::Charset;

/// Characters inspected when measuring a digit run.
pub const LOOKAHEAD_WINDOW: usize = 10;

/// A digit run longer than this moves the encoder into charset C.
pub const DIGIT_RUN_THRESHOLD: usize = 3;

/// Outcome of one transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Charset active after this step
    pub state: Charset,
    /// Switch symbol emitted before the character, if the charset changed
    pub switch: Option<u8>,
}

impl Transition {
    fn stay(state: Charset) -> Self {
        Self {
            state,
            switch: None,
        }
    }

    fn to(state: Charset) -> Self {
        Self {
            state,
            switch: Some(state.switch_code()),
        }
    }
}

/// Count consecutive digits at the start of `rest`, looking at most
/// [`LOOKAHEAD_WINDOW`] characters ahead.
pub fn digit_run(rest: &[char]) -> usize {
    rest.iter()
        .take(LOOKAHEAD_WINDOW)
        .take_while(|c| c.is_ascii_digit())
        .count()
}

/// Decide the charset for character `c`.
///
/// - Leaving C: a non-digit moves to B if B has it, otherwise A.
/// - In A or B: a digit run above the threshold moves to C.
/// - In A or B: a character the charset lacks moves to the other one.
pub fn transition(state: Charset, c: char, digit_run: usize) -> Transition {
    match state {
        Charset::C if c.is_ascii_digit() => Transition::stay(state),
        Charset::C => {
            if Charset::B.contains(c) {
                Transition::to(Charset::B)
            } else if Charset::A.contains(c) {
                Transition::to(Charset::A)
            } else {
                Transition::stay(state)
            }
        }
        Charset::A | Charset::B => {
            let other = if state == Charset::A {
                Charset::B
            } else {
                Charset::A
            };
            if digit_run > DIGIT_RUN_THRESHOLD {
                Transition::to(Charset::C)
            } else if !state.contains(c) && other.contains(c) {
                Transition::to(other)
            } else {
                Transition::stay(state)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbology::code128::charset::{CODE_A, CODE_B, CODE_C};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_digit_run() {
        assert_eq!(digit_run(&chars("123a45")), 3);
        assert_eq!(digit_run(&chars("a123")), 0);
        assert_eq!(digit_run(&chars("")), 0);
    }

    #[test]
    fn test_digit_run_is_capped_by_window() {
        assert_eq!(digit_run(&chars("123456789012345")), LOOKAHEAD_WINDOW);
    }

    #[test]
    fn test_short_run_stays() {
        let t = transition(Charset::B, '1', 3);
        assert_eq!(t, Transition::stay(Charset::B));
    }

    #[test]
    fn test_long_run_enters_c() {
        for state in [Charset::A, Charset::B] {
            let t = transition(state, '1', 4);
            assert_eq!(t.state, Charset::C);
            assert_eq!(t.switch, Some(CODE_C));
        }
    }

    #[test]
    fn test_c_keeps_digits() {
        assert_eq!(transition(Charset::C, '7', 1), Transition::stay(Charset::C));
    }

    #[test]
    fn test_leaving_c_prefers_b() {
        let t = transition(Charset::C, 'x', 0);
        assert_eq!(t.state, Charset::B);
        assert_eq!(t.switch, Some(CODE_B));
        let t = transition(Charset::C, 'X', 0);
        assert_eq!(t.state, Charset::B);
    }

    #[test]
    fn test_leaving_c_for_control_goes_to_a() {
        let t = transition(Charset::C, '\t', 0);
        assert_eq!(t.state, Charset::A);
        assert_eq!(t.switch, Some(CODE_A));
    }

    #[test]
    fn test_a_b_swaps() {
        assert_eq!(transition(Charset::B, '\r', 0).state, Charset::A);
        assert_eq!(transition(Charset::A, 'q', 0).state, Charset::B);
        assert_eq!(transition(Charset::A, 'Q', 0), Transition::stay(Charset::A));
        assert_eq!(transition(Charset::B, 'Q', 0), Transition::stay(Charset::B));
    }
}
