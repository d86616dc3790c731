use crate::Regex;

/// Checks whether `r` is in normal form.
///
/// Every expression built through the smart constructors is. The rules are:
/// * the body of a star is not a star, epsilon or phi,
/// * the body of a negation is not a negation,
/// * the left side of a concatenation is not a concatenation, and neither side is epsilon or phi,
/// * alternations and intersections have at least two items, which are sorted, unique and
///   not themselves of the same kind,
/// * all children are in normal form.
pub fn is_normal_form(r: &Regex) -> bool {
    match r {
        Regex::Empty | Regex::Epsilon | Regex::Symbol(_) => true,
        Regex::Star(inner) => match inner.as_ref() {
            Regex::Star(_) | Regex::Epsilon | Regex::Empty => false,
            inner => is_normal_form(inner),
        },
        Regex::Negation(inner) => match inner.as_ref() {
            Regex::Negation(_) => false,
            inner => is_normal_form(inner),
        },
        Regex::Concat(l, r) => match (l.as_ref(), r.as_ref()) {
            (Regex::Concat(_, _), _) => false,
            (Regex::Empty | Regex::Epsilon, _) | (_, Regex::Empty | Regex::Epsilon) => false,
            (l, r) => is_normal_form(l) && is_normal_form(r),
        },
        Regex::Alternation(items) => {
            normal_items(items, |i| matches!(i, Regex::Alternation(_)))
        }
        Regex::Intersection(items) => {
            normal_items(items, |i| matches!(i, Regex::Intersection(_)))
        }
    }
}

fn normal_items(items: &[Regex], nested: impl Fn(&Regex) -> bool) -> bool {
    items.len() >= 2
        // sorted, without duplicates
        && items.windows(2).all(|w| w[0] < w[1])
        && !items.iter().any(nested)
        && items.iter().all(is_normal_form)
}
