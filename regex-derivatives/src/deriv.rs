use crate::{alternate, concat, intersect, negate, star, Regex};

impl Regex {
    /// Returns true if this regular expression accepts the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Regex::Empty => false,
            Regex::Epsilon => true,
            Regex::Symbol(_) => false,
            Regex::Star(_) => true,
            Regex::Negation(i) => !i.is_nullable(),
            Regex::Concat(l, r) => l.is_nullable() && r.is_nullable(),
            Regex::Alternation(items) => items.iter().any(Regex::is_nullable),
            Regex::Intersection(items) => items.iter().all(Regex::is_nullable),
        }
    }

    /// Like [`Regex::is_nullable`], but encoded as an expression: [`Regex::Epsilon`]
    /// if the empty string is accepted, [`Regex::Empty`] otherwise.
    ///
    /// Since the result is an expression, it can be fed straight back into the
    /// combinators. `concat(r.nullable(), s)` is `s` when `r` is nullable and `phi` otherwise.
    pub fn nullable(&self) -> Regex {
        Regex::from_bool(self.is_nullable())
    }

    /// The Brzozowski derivative of this regular expression with respect to `symbol`.
    ///
    /// The result matches exactly those strings `w` for which `symbol w` is matched
    /// by `self`. It is built with the smart constructors, so the derivative of an
    /// expression in normal form is in normal form too.
    pub fn derivative(&self, symbol: char) -> Regex {
        match self {
            // a: 0 => 0
            // a: e => 0
            Regex::Empty | Regex::Epsilon => Regex::Empty,
            // a: a => e
            // a: b => 0
            Regex::Symbol(c) => Regex::from_bool(*c == symbol),
            // a: (ab)* => b(ab)*
            Regex::Star(r) => concat(r.derivative(symbol), star(r.as_ref().clone())),
            // a: ~(ab) => ~(b)
            Regex::Negation(r) => negate(r.derivative(symbol)),
            // a: ab => b
            // a: b*a => (b*)' a | a' (if b* is nullable)
            Regex::Concat(l, r) => alternate(
                concat(l.derivative(symbol), r.as_ref().clone()),
                concat(l.nullable(), r.derivative(symbol)),
            ),
            // a: (ab | ac) => b | c
            Regex::Alternation(items) => items
                .iter()
                .rev()
                .fold(Regex::Empty, |acc, i| alternate(acc, i.derivative(symbol))),
            // a: (ab & ac) => b & c
            Regex::Intersection(items) => items
                .iter()
                .rev()
                .fold(Regex::any_string(), |acc, i| intersect(acc, i.derivative(symbol))),
        }
    }

    /// Takes the derivative for every character in `input`, left to right.
    pub fn derivative_of_string(&self, input: &str) -> Regex {
        input
            .chars()
            .fold(self.clone(), |acc, symbol| acc.derivative(symbol))
    }

    /// Returns true if this regular expression matches all of `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.derivative_of_string(input).is_nullable()
    }
}

/// See [`Regex::nullable`].
pub fn nullable(r: &Regex) -> Regex {
    r.nullable()
}

/// See [`Regex::derivative`].
pub fn derivative(r: &Regex, symbol: char) -> Regex {
    r.derivative(symbol)
}

/// See [`Regex::derivative_of_string`].
pub fn derivative_of_string(r: &Regex, input: &str) -> Regex {
    r.derivative_of_string(input)
}

/// See [`Regex::matches`].
pub fn matches(r: &Regex, input: &str) -> bool {
    r.matches(input)
}
