#![doc = include_str!("../README.md")]

use thiserror::Error;

mod compile;
mod construct;
mod deriv;
mod normal;
mod regex;

#[cfg(feature = "dot")]
mod dot;

pub use compile::{build_automaton, Automaton, AutomatonBuilder, StateSet, TransitionTable};
pub use construct::{alternate, concat, empty, epsilon, intersect, negate, star, symbol};
pub use deriv::{derivative, derivative_of_string, matches, nullable};
pub use normal::is_normal_form;
pub use regex::Regex;

/// Errors raised while building an [`Automaton`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// A second transition was recorded for the same state and symbol.
    ///
    /// During exploration this means the alphabet lists `symbol` more than once.
    #[error("a transition on {symbol:?} was already recorded for state {state}")]
    DuplicateTransition {
        /// the state the transition leaves from
        state: Regex,
        /// the symbol of the transition
        symbol: char,
    },
    /// Exploration discovered more states than the configured limit.
    #[error("more than {limit} states discovered")]
    StateLimitExceeded {
        /// the configured limit
        limit: usize,
    },
}
