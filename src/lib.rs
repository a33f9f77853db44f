pub mod automaton;
pub mod builtin;
pub mod error;
pub mod nfa;

pub use crate::automaton::{Automaton, Verdict};
pub use crate::builtin::AUTOMATON;
pub use crate::error::BuildError;
pub use crate::nfa::{NFABuilder, StateSet, NFA};
