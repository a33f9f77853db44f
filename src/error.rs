use thiserror::Error;

use crate::nfa::StateNumber;

/// Reasons an `NFABuilder` refuses to freeze into an `NFA`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("automaton has no states, so there is no start state")]
    NoStates,
    #[error("edge {from} -> {to} on {on:?} targets a state outside 0..{num_states}")]
    DanglingDestination {
        from: StateNumber,
        to: StateNumber,
        on: char,
        num_states: usize,
    },
    #[error("edge leaves from state {from}, outside 0..{num_states}")]
    UnknownSource { from: StateNumber, num_states: usize },
    #[error("state {state} is marked final but lies outside 0..{num_states}")]
    UnknownFinal { state: StateNumber, num_states: usize },
}
