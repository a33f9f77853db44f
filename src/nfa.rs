use std::collections::HashMap;
use std::fmt;
use std::mem;

use bit_set::BitSet;
use bit_vec::BitVec;
use log::{debug, trace};

use crate::automaton::{Automaton, Verdict, AUTO_START};
use crate::error::BuildError;

pub type StateNumber = usize;
pub type Symbol = u8;

/// The set of NFA states the simulation may currently be in.
pub type StateSet = BitSet;

pub const NFA_START: StateNumber = AUTO_START;

#[derive(Clone, Debug, Default)]
pub struct NFAState {
    /// Symbol -> destination states. A missing symbol means "no transition".
    pub transitions: HashMap<Symbol, StateSet>,
}

/// A frozen, read-only NFA. Build one with `NFABuilder`.
#[derive(Clone, Debug)]
pub struct NFA {
    states: Box<[NFAState]>,
    finals: BitVec,
    alphabet: Vec<Symbol>,
}

impl NFA {
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Symbols with at least one transition, in ascending order.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn transitions(&self, state: StateNumber) -> Option<&HashMap<Symbol, StateSet>> {
        self.states.get(state).map(|st| &st.transitions)
    }

    #[inline]
    pub fn is_accepting(&self, state: StateNumber) -> bool {
        self.finals.get(state).unwrap_or(false)
    }

    #[inline]
    pub fn accepts_any(&self, states: &StateSet) -> bool {
        states.iter().any(|state| self.is_accepting(state))
    }

    #[inline]
    fn _next_state(&self, states: &StateSet, symbol: Symbol, nxt_states: &mut StateSet) {
        for state in states.iter() {
            if let Some(to) = self.states[state].transitions.get(&symbol) {
                nxt_states.union_with(to);
            }
        }
    }

    /// The union of the transitions of every state in `states` on `symbol`.
    pub fn step(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        let mut nxt_states = StateSet::with_capacity(self.states.len());
        self._next_state(states, symbol, &mut nxt_states);
        nxt_states
    }

    /// Decides whether some run over `input` ends in an accepting state.
    pub fn simulate<I: AsRef<[Symbol]>>(&self, input: I) -> Verdict {
        let input = input.as_ref();

        // Decided on the start state alone, never through the loop below.
        if input.is_empty() {
            debug!("empty input, deciding on start state {}", NFA_START);
            return self.is_accepting(NFA_START).into();
        }

        let mut cur_states = StateSet::with_capacity(self.states.len());
        let mut nxt_states = StateSet::with_capacity(self.states.len());
        cur_states.insert(NFA_START);
        for (offset, &symbol) in input.iter().enumerate() {
            self._next_state(&cur_states, symbol, &mut nxt_states);
            // clear + swap: reuses memory.
            // Otherwise same effect as `cur_states = nxt_states; nxt_states = StateSet::new();`
            cur_states.clear();
            mem::swap(&mut cur_states, &mut nxt_states);
            trace!("{:?} at offset {} -> {:?}", symbol as char, offset, cur_states);

            // Return early if "in stuck state"
            if cur_states.is_empty() {
                debug!("stuck on {:?} at offset {} of {}", symbol as char, offset, input.len());
                return Verdict::Reject;
            }
        }
        self.accepts_any(&cur_states).into()
    }
}

impl Automaton<Symbol> for NFA {
    type State = StateSet;

    #[inline]
    fn start_state(&self) -> Self::State {
        let mut start = StateSet::with_capacity(self.states.len());
        start.insert(NFA_START);
        start
    }

    #[inline]
    fn next_state(&self, states: &Self::State, symbol: &Symbol) -> Self::State {
        self.step(states, *symbol)
    }

    #[inline]
    fn is_stuck(&self, states: &Self::State) -> bool {
        states.is_empty()
    }

    #[inline]
    fn is_final(&self, states: &Self::State) -> bool {
        self.accepts_any(states)
    }
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            let mut transitions: Vec<_> = state.transitions
                .iter()
                .filter(|&(_, to)| !to.is_empty())
                .collect();
            transitions.sort_by_key(|&(&c, _)| c);

            write!(f, "{} -> [", i)?;
            if !transitions.is_empty() {
                writeln!(f)?;
            }
            for (&c, to) in transitions {
                writeln!(f, "  {} -> {:?},", c as char, to)?;
            }
            write!(f, "]")?;
            if self.is_accepting(i) {
                write!(f, " -- final state")?;
            }
            writeln!(f, ",")?;
        }
        Ok(())
    }
}

/// Mutable description of an NFA, checked and turned into an `NFA` by `freeze`.
///
/// State 0 is always the start state.
#[derive(Clone, Debug, Default)]
pub struct NFABuilder {
    num_states: usize,
    edges: Vec<(StateNumber, StateNumber, Symbol)>,
    finals: Vec<StateNumber>,
}

impl NFABuilder {
    pub fn new() -> Self {
        NFABuilder::default()
    }

    pub fn with_states(num_states: usize) -> Self {
        NFABuilder {
            num_states: num_states,
            ..NFABuilder::default()
        }
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Adds a state without any edges and returns its number
    pub fn new_state(&mut self) -> StateNumber {
        self.num_states += 1;
        self.num_states - 1
    }

    pub fn new_edge(&mut self, from: StateNumber, to: StateNumber, on: Symbol) -> &mut Self {
        self.edges.push((from, to, on));
        self
    }

    /// Adds one edge per destination, all on the same symbol
    pub fn new_edges<I>(&mut self, from: StateNumber, to: I, on: Symbol) -> &mut Self
        where I: IntoIterator<Item = StateNumber>
    {
        self.edges.extend(to.into_iter().map(|to| (from, to, on)));
        self
    }

    pub fn mark_final(&mut self, state: StateNumber) -> &mut Self {
        self.finals.push(state);
        self
    }

    pub fn freeze(&self) -> Result<NFA, BuildError> {
        let num_states = self.num_states;
        if num_states == 0 {
            return Err(BuildError::NoStates);
        }

        let mut states = vec![NFAState::default(); num_states];
        let mut alphabet = Vec::new();
        for &(from, to, on) in &self.edges {
            if from >= num_states {
                return Err(BuildError::UnknownSource { from, num_states });
            }
            if to >= num_states {
                return Err(BuildError::DanglingDestination {
                    from,
                    to,
                    on: on as char,
                    num_states,
                });
            }
            states[from]
                .transitions
                .entry(on)
                .or_insert_with(|| StateSet::with_capacity(num_states))
                .insert(to);
            alphabet.push(on);
        }
        alphabet.sort();
        alphabet.dedup();

        let mut finals = BitVec::from_elem(num_states, false);
        for &state in &self.finals {
            if state >= num_states {
                return Err(BuildError::UnknownFinal { state, num_states });
            }
            finals.set(state, true);
        }

        Ok(NFA {
            states: states.into_boxed_slice(),
            finals: finals,
            alphabet: alphabet,
        })
    }
}
