use std::fmt;
use std::fmt::Debug;

pub const AUTO_START: usize = 0;

/// Outcome of running an automaton over a complete input.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        self == Verdict::Accept
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verdict::Accept => f.write_str("accept"),
            Verdict::Reject => f.write_str("reject"),
        }
    }
}

pub trait Automaton<Input> {
    type State: Clone + Debug;

    fn start_state(&self) -> Self::State;

    fn next_state(&self, state: &Self::State, input: &Input) -> Self::State;

    /// True when no further input can lead anywhere from `state`.
    fn is_stuck(&self, state: &Self::State) -> bool;

    fn is_final(&self, state: &Self::State) -> bool;

    fn steps<'i, 'a>(&'a self, s: &'i [Input]) -> Steps<'i, 'a, Input, Self>
        where Self: Sized
    {
        Steps {
            aut: self,
            input: s,
            offset: 0,
            state: Some(self.start_state()),
        }
    }

    /// Straightforward simulation on top of `next_state`.
    ///
    /// Empty input is decided on the start state alone, and a stuck state
    /// rejects without looking at the rest of the input.
    fn run(&self, s: &[Input]) -> Verdict
        where Self: Sized
    {
        let start = self.start_state();
        if s.is_empty() {
            return self.is_final(&start).into();
        }
        let mut last = start;
        for (_, state) in self.steps(s) {
            if self.is_stuck(&state) {
                return Verdict::Reject;
            }
            last = state;
        }
        self.is_final(&last).into()
    }
}

/// An iterator over the automaton state after every consumed input symbol.
///
/// This iterator yields `(offset, state)` pairs where `offset` is the number
/// of symbols consumed so far. It ends early after yielding the first stuck
/// state.
#[derive(Debug)]
pub struct Steps<'i, 'a, Input: 'i, A: 'a + Automaton<Input>> {
    aut: &'a A,
    input: &'i [Input],
    offset: usize,
    state: Option<A::State>,
}

impl<'i, 'a, Input, A: Automaton<Input>> Iterator for Steps<'i, 'a, Input, A> {
    type Item = (usize, A::State);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.input.len() {
            return None;
        }
        let state = self.state.take()?;
        let next = self.aut.next_state(&state, &self.input[self.offset]);
        self.offset += 1;
        if !self.aut.is_stuck(&next) {
            self.state = Some(next.clone());
        }
        Some((self.offset, next))
    }
}
