//! The built-in eight state automaton over the alphabet `{a, b}`.
//!
//! State 0 is the start state and states `{0, 1, 3, 4, 7}` accept. The table
//! is plain data; `AUTOMATON` freezes it once and shares it read-only.

use lazy_static::lazy_static;

use crate::nfa::{NFABuilder, StateNumber, Symbol, NFA};

pub const NUM_STATES: usize = 8;

pub const ACCEPTING: [StateNumber; 5] = [0, 1, 3, 4, 7];

/// `(from, on, to)` rows. Pairs that are not listed have no transition.
pub const TRANSITIONS: [(StateNumber, Symbol, &[StateNumber]); 8] = [
    (0, b'a', &[2, 5]),
    (1, b'a', &[2]),
    (2, b'b', &[3]),
    (3, b'a', &[2]),
    (4, b'a', &[5]),
    (5, b'b', &[6]),
    (6, b'a', &[7]),
    (7, b'a', &[5]),
];

/// Inputs the driver runs when it is given none.
pub const DEMO_INPUTS: [&str; 12] = [
    "aba", "", "a", "ab", "aba", "ababab", "abababa", "abaabaaba", "b", "bb", "ababab", "abaab",
];

lazy_static! {
    pub static ref AUTOMATON: NFA = automaton();
}

pub fn builder() -> NFABuilder {
    let mut builder = NFABuilder::with_states(NUM_STATES);
    for &(from, on, to) in TRANSITIONS.iter() {
        builder.new_edges(from, to.iter().cloned(), on);
    }
    for &state in ACCEPTING.iter() {
        builder.mark_final(state);
    }
    builder
}

/// A fresh copy of the built-in automaton.
pub fn automaton() -> NFA {
    builder()
        .freeze()
        .unwrap_or_else(|err| unreachable!("built-in table is malformed: {}", err))
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::automaton::{Automaton, Verdict};
    use crate::nfa::StateSet;

    fn members(states: &StateSet) -> Vec<StateNumber> {
        states.iter().collect()
    }

    fn trace(input: &str) -> Vec<Vec<StateNumber>> {
        AUTOMATON
            .steps(input.as_bytes())
            .map(|(_, states)| members(&states))
            .collect()
    }

    #[test]
    fn table_shape() {
        assert_eq!(AUTOMATON.num_states(), NUM_STATES);
        assert_eq!(AUTOMATON.alphabet(), b"ab");
        for state in 0..NUM_STATES {
            assert_eq!(AUTOMATON.is_accepting(state), ACCEPTING.contains(&state));
        }
    }

    #[test]
    fn empty_input_accepts() {
        assert!(AUTOMATON.is_accepting(0));
        assert_eq!(AUTOMATON.simulate(""), Verdict::Accept);
        assert_eq!(AUTOMATON.run(b""), Verdict::Accept);
        assert!(trace("").is_empty());
    }

    #[test]
    fn a_branches_to_two_and_five() {
        let start = AUTOMATON.start_state();
        assert_eq!(members(&AUTOMATON.step(&start, b'a')), vec![2, 5]);
        assert_eq!(AUTOMATON.simulate("a"), Verdict::Reject);
    }

    #[test]
    fn ab_and_aba_accept() {
        assert_eq!(trace("ab"), vec![vec![2, 5], vec![3, 6]]);
        assert_eq!(AUTOMATON.simulate("ab"), Verdict::Accept);
        assert_eq!(trace("aba"), vec![vec![2, 5], vec![3, 6], vec![2, 7]]);
        assert_eq!(AUTOMATON.simulate("aba"), Verdict::Accept);
    }

    #[test]
    fn leading_b_is_a_dead_end() {
        assert_eq!(AUTOMATON.simulate("b"), Verdict::Reject);
        assert_eq!(AUTOMATON.simulate("bb"), Verdict::Reject);
        assert_eq!(AUTOMATON.simulate("bab"), Verdict::Reject);
        // the trace stops at the first empty set
        assert_eq!(trace("bb"), vec![Vec::<StateNumber>::new()]);
    }

    #[test]
    fn ababab_traced() {
        assert_eq!(
            trace("ababab"),
            vec![vec![2, 5], vec![3, 6], vec![2, 7], vec![3], vec![2], vec![3]]
        );
        assert_eq!(AUTOMATON.simulate("ababab"), Verdict::Accept);
    }

    #[test]
    fn demo_inputs() {
        let verdicts: Vec<_> = DEMO_INPUTS
            .iter()
            .map(|input| AUTOMATON.simulate(input).to_string())
            .collect();
        assert_eq!(
            verdicts,
            vec![
                "accept", "accept", "reject", "accept", "accept", "accept", "reject", "accept",
                "reject", "reject", "accept", "reject",
            ]
        );
    }

    #[test]
    fn out_of_alphabet_symbols_reject() {
        assert_eq!(AUTOMATON.simulate("c"), Verdict::Reject);
        assert_eq!(AUTOMATON.simulate("abc"), Verdict::Reject);
        assert_eq!(AUTOMATON.simulate("ab "), Verdict::Reject);
    }

    #[test]
    fn independent_instances_agree() {
        let first = automaton();
        let second = automaton();
        for input in DEMO_INPUTS.iter() {
            assert_eq!(first.simulate(input), second.simulate(input));
            assert_eq!(first.simulate(input), first.simulate(input));
            assert_eq!(first.simulate(input), AUTOMATON.simulate(input));
        }
    }

    #[test]
    fn shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    DEMO_INPUTS
                        .iter()
                        .map(|input| AUTOMATON.simulate(input))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let expected: Vec<_> = DEMO_INPUTS.iter().map(|input| AUTOMATON.simulate(input)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn dump() {
        let dump = AUTOMATON.to_string();
        assert!(dump.starts_with("0 -> [\n  a -> {2, 5},\n] -- final state,\n"));
        assert!(dump.contains("2 -> [\n  b -> {3},\n],\n"));
        assert!(dump.ends_with("7 -> [\n  a -> {5},\n] -- final state,\n"));
    }
}
