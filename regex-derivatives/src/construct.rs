//! Smart constructors. Every composite expression is built through these, so that
//! the result is always in normal form (see [`is_normal_form`](crate::is_normal_form)).

use crate::Regex;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::sync::Arc;

/// The expression matching no string at all.
pub fn empty() -> Regex {
    Regex::Empty
}

/// The expression matching only the empty string.
pub fn epsilon() -> Regex {
    Regex::Epsilon
}

/// The expression matching exactly the one-character string `c`.
pub fn symbol(c: char) -> Regex {
    Regex::Symbol(c)
}

/// Kleene star.
pub fn star(r: Regex) -> Regex {
    match r {
        // a** => a*
        Regex::Star(_) => r,
        // e* => e
        // 0* => e
        Regex::Epsilon | Regex::Empty => Regex::Epsilon,
        _ => Regex::Star(Arc::new(r)),
    }
}

/// Complement.
pub fn negate(r: Regex) -> Regex {
    match r {
        // ~~a => a
        Regex::Negation(inner) => inner.as_ref().clone(),
        _ => Regex::Negation(Arc::new(r)),
    }
}

/// Concatenation. Nested concatenations are re-associated to the right.
pub fn concat(r: Regex, s: Regex) -> Regex {
    match (r, s) {
        // (a b) c => a (b c)
        (Regex::Concat(r1, r2), s) => concat(r1.as_ref().clone(), concat(r2.as_ref().clone(), s)),
        // 0 a => 0
        // a 0 => 0
        (Regex::Empty, _) | (_, Regex::Empty) => Regex::Empty,
        // e a => a
        (Regex::Epsilon, s) => s,
        // a e => a
        (r, Regex::Epsilon) => r,
        (r, s) => Regex::Concat(Arc::new(r), Arc::new(s)),
    }
}

/// Alternation. `phi` is the identity and `~phi` absorbs everything.
pub fn alternate(r: Regex, s: Regex) -> Regex {
    if r == s {
        return r;
    }

    match (r, s) {
        // 0 | a => a
        (Regex::Empty, other) | (other, Regex::Empty) => other,
        // ~0 | a => ~0
        (any, _) | (_, any) if any.is_any_string() => any,
        (Regex::Alternation(l), Regex::Alternation(r)) => {
            list_node(ListKind::Alternation, l.iter().chain(r.iter()).cloned().collect())
        }
        (Regex::Alternation(l), s) => {
            let mut items = l.to_vec();
            items.push(s);
            list_node(ListKind::Alternation, items)
        }
        (r, Regex::Alternation(l)) => {
            let mut items = vec![r];
            items.extend(l.iter().cloned());
            list_node(ListKind::Alternation, items)
        }
        (r, s) => list_node(ListKind::Alternation, vec![r, s]),
    }
}

/// Intersection. `~phi` is the identity and `phi` absorbs everything.
pub fn intersect(r: Regex, s: Regex) -> Regex {
    if r == s {
        return r;
    }

    match (r, s) {
        // 0 & a => 0
        (Regex::Empty, _) | (_, Regex::Empty) => Regex::Empty,
        // ~0 & a => a
        (any, other) | (other, any) if any.is_any_string() => other,
        (Regex::Intersection(l), Regex::Intersection(r)) => list_node(
            ListKind::Intersection,
            l.iter().chain(r.iter()).cloned().collect(),
        ),
        (Regex::Intersection(l), s) => {
            let mut items = l.to_vec();
            items.push(s);
            list_node(ListKind::Intersection, items)
        }
        (r, Regex::Intersection(l)) => {
            let mut items = vec![r];
            items.extend(l.iter().cloned());
            list_node(ListKind::Intersection, items)
        }
        (r, s) => list_node(ListKind::Intersection, vec![r, s]),
    }
}

#[derive(Clone, Copy)]
enum ListKind {
    Alternation,
    Intersection,
}

/// Sorts and removes duplicates from `items`, then builds the node.
/// A single remaining item stands for itself.
fn list_node(kind: ListKind, mut items: Vec<Regex>) -> Regex {
    items.sort();
    // sorting puts equal items next to each other
    items.dedup();

    if items.len() == 1 {
        return items.swap_remove(0);
    }

    match kind {
        ListKind::Alternation => Regex::Alternation(items.into()),
        ListKind::Intersection => Regex::Intersection(items.into()),
    }
}

impl Regex {
    /// See [`concat`].
    pub fn concat(self, other: Regex) -> Regex {
        concat(self, other)
    }

    /// See [`alternate`].
    pub fn alternate(self, other: Regex) -> Regex {
        alternate(self, other)
    }

    /// See [`intersect`].
    pub fn intersect(self, other: Regex) -> Regex {
        intersect(self, other)
    }

    /// See [`star`].
    pub fn star(self) -> Regex {
        star(self)
    }

    /// See [`negate`].
    pub fn negate(self) -> Regex {
        negate(self)
    }
}

/// `a ^ b` concatenates.
impl BitXor for Regex {
    type Output = Regex;

    fn bitxor(self, rhs: Regex) -> Regex {
        concat(self, rhs)
    }
}

impl BitOr for Regex {
    type Output = Regex;

    fn bitor(self, rhs: Regex) -> Regex {
        alternate(self, rhs)
    }
}

impl BitAnd for Regex {
    type Output = Regex;

    fn bitand(self, rhs: Regex) -> Regex {
        intersect(self, rhs)
    }
}

impl Not for Regex {
    type Output = Regex;

    fn not(self) -> Regex {
        negate(self)
    }
}
