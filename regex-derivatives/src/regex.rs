use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

const KEY_EMPTY: i64 = -1;
const KEY_EPSILON: i64 = -2;
const KEY_CONCAT: i64 = -3;
const KEY_ALTERNATION: i64 = -4;
const KEY_STAR: i64 = -5;
const KEY_INTERSECTION: i64 = -6;
const KEY_NEGATION: i64 = -7;

/// A regular expression over `char` symbols.
///
/// Only [`Regex::Empty`], [`Regex::Epsilon`] and [`Regex::Symbol`] should be built
/// directly. Composite nodes are produced by the smart constructors in this crate
/// ([`concat`](crate::concat), [`alternate`](crate::alternate), [`intersect`](crate::intersect),
/// [`star`](crate::star) and [`negate`](crate::negate)), which keep every expression in normal form.
/// Building a composite variant by hand is possible, but [`is_normal_form`](crate::is_normal_form)
/// will reject it if it breaks the normal form rules.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// Matches nothing.
    Empty,
    /// Matches only the empty string.
    Epsilon,
    /// Matches exactly this one character.
    Symbol(char),
    /// `left` followed by `right`.
    Concat(Arc<Regex>, Arc<Regex>),
    /// Any of the items. Sorted and free of duplicates in normal form.
    Alternation(Arc<[Regex]>),
    /// Zero or more repetitions.
    Star(Arc<Regex>),
    /// All of the items. Sorted and free of duplicates in normal form.
    Intersection(Arc<[Regex]>),
    /// Everything the inner expression does not match.
    Negation(Arc<Regex>),
}

impl Regex {
    /// The expression that matches every string, `~phi`.
    pub fn any_string() -> Regex {
        Regex::Negation(Arc::new(Regex::Empty))
    }

    /// Is this `~phi`?
    pub fn is_any_string(&self) -> bool {
        matches!(self, Regex::Negation(inner) if **inner == Regex::Empty)
    }

    /// Is this [`Regex::Empty`]?
    pub fn is_empty(&self) -> bool {
        matches!(self, Regex::Empty)
    }

    /// Is this [`Regex::Epsilon`]?
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Regex::Epsilon)
    }

    /// Encodes a boolean as an expression: [`Regex::Epsilon`] for true,
    /// [`Regex::Empty`] for false.
    pub fn from_bool(b: bool) -> Regex {
        if b {
            Regex::Epsilon
        } else {
            Regex::Empty
        }
    }

    /// Inverse of [`Regex::from_bool`]. Any other expression gives `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Regex::Epsilon => Some(true),
            Regex::Empty => Some(false),
            _ => None,
        }
    }

    /// The primary sorting key of this node.
    ///
    /// Every composite kind has its own negative constant, so composites sort before
    /// [`Regex::Empty`] and [`Regex::Epsilon`], which sort before all symbols.
    /// Symbols are keyed by their code point.
    pub fn sort_key(&self) -> i64 {
        match self {
            Regex::Empty => KEY_EMPTY,
            Regex::Epsilon => KEY_EPSILON,
            Regex::Symbol(c) => i64::from(u32::from(*c)),
            Regex::Concat(_, _) => KEY_CONCAT,
            Regex::Alternation(_) => KEY_ALTERNATION,
            Regex::Star(_) => KEY_STAR,
            Regex::Intersection(_) => KEY_INTERSECTION,
            Regex::Negation(_) => KEY_NEGATION,
        }
    }

    fn compare(&self, other: &Regex) -> Ordering {
        match (self, other) {
            (Regex::Concat(l1, r1), Regex::Concat(l2, r2)) => {
                l1.compare(l2).then_with(|| r1.compare(r2))
            }
            (Regex::Star(l), Regex::Star(r)) => l.compare(r),
            (Regex::Negation(l), Regex::Negation(r)) => l.compare(r),
            (Regex::Alternation(l), Regex::Alternation(r)) => compare_items(l, r),
            (Regex::Intersection(l), Regex::Intersection(r)) => compare_items(l, r),
            _ => self.sort_key().cmp(&other.sort_key()),
        }
    }
}

fn compare_items(l: &[Regex], r: &[Regex]) -> Ordering {
    for (a, b) in l.iter().zip(r) {
        match a.compare(b) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    l.len().cmp(&r.len())
}

// Nodes of the same kind are ordered structurally, so structurally equal
// expressions, and only those, compare as equal.
impl Ord for Regex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Regex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn write_items(f: &mut Formatter<'_>, items: &[Regex], sep: &str) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "({item})")?;
    }
    Ok(())
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Regex::Empty => write!(f, "phi"),
            Regex::Epsilon => write!(f, "epsilon"),
            Regex::Symbol(c) => write!(f, "{c}"),
            Regex::Concat(l, r) => write!(f, "({l})^({r})"),
            Regex::Alternation(items) => write_items(f, items, " | "),
            Regex::Star(r) => write!(f, "({r})*"),
            Regex::Intersection(items) => write_items(f, items, " & "),
            Regex::Negation(r) => write!(f, "~({r})"),
        }
    }
}

impl From<char> for Regex {
    fn from(value: char) -> Self {
        Regex::Symbol(value)
    }
}
