use crate::{AutomatonError, Regex};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::{Display, Formatter};

/// A set of automaton states. Each state is a regular expression in normal form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet {
    states: HashSet<Regex>,
}

impl StateSet {
    /// Adds a state. Returns false if it was already present.
    pub fn insert(&mut self, state: Regex) -> bool {
        self.states.insert(state)
    }

    /// Returns true if this set contains `state`.
    pub fn contains(&self, state: &Regex) -> bool {
        self.states.contains(state)
    }

    /// The number of states in this set.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if this set has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over the states, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Regex> {
        self.states.iter()
    }
}

/// Transitions of the automaton: for every state, where each symbol leads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: HashMap<Regex, HashMap<char, Regex>>,
}

impl TransitionTable {
    /// Records that `symbol` leads from `state` to `target`.
    ///
    /// Every `(state, symbol)` pair can be recorded only once. A second attempt is
    /// reported as [`AutomatonError::DuplicateTransition`] and leaves the table unchanged.
    pub fn add_transition(
        &mut self,
        state: Regex,
        symbol: char,
        target: Regex,
    ) -> Result<(), AutomatonError> {
        if self.get(&state, symbol).is_some() {
            return Err(AutomatonError::DuplicateTransition { state, symbol });
        }

        self.transitions
            .entry(state)
            .or_default()
            .insert(symbol, target);
        Ok(())
    }

    /// Returns true if any transition out of `state` was recorded.
    pub fn contains_state(&self, state: &Regex) -> bool {
        self.transitions.contains_key(state)
    }

    /// Where `symbol` leads from `state`, if that transition was recorded.
    pub fn get(&self, state: &Regex, symbol: char) -> Option<&Regex> {
        self.transitions.get(state)?.get(&symbol)
    }

    /// All transitions out of `state`.
    pub fn transitions_from(&self, state: &Regex) -> impl Iterator<Item = (char, &Regex)> {
        self.transitions
            .get(state)
            .into_iter()
            .flatten()
            .map(|(symbol, target)| (*symbol, target))
    }

    /// The total number of transitions.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    /// Returns true if no transition was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all `(state, symbol, target)` triples, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Regex, char, &Regex)> {
        self.transitions.iter().flat_map(|(state, edges)| {
            edges
                .iter()
                .map(move |(symbol, target)| (state, *symbol, target))
        })
    }

    /// All transitions, sorted by source state and then by symbol.
    pub(crate) fn sorted(&self) -> Vec<(&Regex, char, &Regex)> {
        let mut edges: Vec<_> = self.iter().collect();
        edges.sort_by(|a, b| a.0.cmp(b.0).then(a.1.cmp(&b.1)));
        edges
    }
}

impl Display for TransitionTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut current = None;
        for (state, symbol, target) in self.sorted() {
            if current != Some(state) {
                writeln!(f, "** transitions from state {state}")?;
                current = Some(state);
            }
            writeln!(f, "  ---> on symbol {symbol} go to state {target}")?;
        }
        Ok(())
    }
}

/// A deterministic finite automaton whose states are the derivatives of a regular expression.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: StateSet,
    start: Regex,
    final_states: StateSet,
    transitions: TransitionTable,
    alphabet: Vec<char>,
}

impl Automaton {
    /// Every state reachable from the start state.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// The start state: the regular expression the automaton was built from.
    pub fn start(&self) -> &Regex {
        &self.start
    }

    /// The accepting states, i.e. the nullable ones.
    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// The symbols the automaton was explored over.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn is_final(&self, state: &Regex) -> bool {
        self.final_states.contains(state)
    }

    /// Looks up the transition for `symbol` out of `state`.
    ///
    /// `None` if `state` is not a state of this automaton or `symbol` is not in its alphabet.
    pub fn next(&self, state: &Regex, symbol: char) -> Option<&Regex> {
        self.transitions.get(state, symbol)
    }
}

/// Explores the derivatives of a regular expression over a fixed alphabet.
///
/// ```
/// # use regex_derivatives::*;
/// let r = symbol('a') ^ star(symbol('b'));
/// let automaton = AutomatonBuilder::new(r, "ab".chars())
///     .max_states(16)
///     .build()
///     .unwrap();
/// assert_eq!(automaton.states().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    regex: Regex,
    alphabet: Vec<char>,
    max_states: Option<usize>,
}

impl AutomatonBuilder {
    /// Prepares to build the automaton for `regex` over `alphabet`.
    ///
    /// The alphabet is used as given. Listing a symbol twice makes [`build`](Self::build)
    /// fail with [`AutomatonError::DuplicateTransition`].
    pub fn new(regex: Regex, alphabet: impl IntoIterator<Item = char>) -> Self {
        Self {
            regex,
            alphabet: alphabet.into_iter().collect(),
            max_states: None,
        }
    }

    /// Stops exploring with [`AutomatonError::StateLimitExceeded`] once more than
    /// `limit` states are discovered.
    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = Some(limit);
        self
    }

    fn check_limit(&self, discovered: usize) -> Result<(), AutomatonError> {
        match self.max_states {
            Some(limit) if discovered > limit => Err(AutomatonError::StateLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn create_transitions_step(
        &self,
        state: Regex,
        states: &mut StateSet,
        transitions: &mut TransitionTable,
        work_list: &mut VecDeque<Regex>,
    ) -> Result<(), AutomatonError> {
        for &symbol in &self.alphabet {
            let next_state = state.derivative(symbol);
            transitions.add_transition(state.clone(), symbol, next_state.clone())?;

            // only states seen for the first time still need their transitions
            if states.insert(next_state.clone()) {
                log::trace!("discovered state {next_state}");
                self.check_limit(states.len())?;
                work_list.push_back(next_state);
            }
        }
        Ok(())
    }

    /// Runs the exploration.
    pub fn build(self) -> Result<Automaton, AutomatonError> {
        log::debug!(
            "building automaton for {} over {:?}",
            self.regex,
            self.alphabet
        );

        let mut states = StateSet::default();
        let mut transitions = TransitionTable::default();
        let mut work_list = VecDeque::new();

        states.insert(self.regex.clone());
        self.check_limit(states.len())?;
        work_list.push_back(self.regex.clone());

        while let Some(state) = work_list.pop_front() {
            self.create_transitions_step(state, &mut states, &mut transitions, &mut work_list)?;
        }

        let mut final_states = StateSet::default();
        for state in states.iter().filter(|s| s.is_nullable()) {
            final_states.insert(state.clone());
        }

        log::debug!(
            "automaton has {} states ({} final) and {} transitions",
            states.len(),
            final_states.len(),
            transitions.len()
        );

        Ok(Automaton {
            states,
            start: self.regex,
            final_states,
            transitions,
            alphabet: self.alphabet,
        })
    }
}

/// Builds the automaton for `regex` over `alphabet`, without a state limit.
///
/// See [`AutomatonBuilder`].
pub fn build_automaton(
    regex: Regex,
    alphabet: impl IntoIterator<Item = char>,
) -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::new(regex, alphabet).build()
}
