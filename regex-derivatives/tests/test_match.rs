use regex_derivatives::{alternate, concat, intersect, matches, negate, star, symbol, Regex};

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn s(c: char) -> Regex {
    symbol(c)
}

#[test]
fn test_concat_star() {
    let r = concat(s('a'), star(s('b')));

    assert!(matches(&r, "abb"));
    assert!(!matches(&r, ""));
    assert!(!matches(&r, "aba"));
}

#[test]
fn test_alternations_in_sequence() {
    let r = concat(
        concat(alternate(s('a'), s('b')), alternate(s('c'), s('d'))),
        s('e'),
    );

    assert!(matches(&r, "ace"));
    assert!(matches(&r, "bde"));
    assert!(!matches(&r, "abe"));
    assert!(!matches(&r, "ac"));
}

#[test]
fn test_negation() {
    let r = alternate(
        negate(concat(s('a'), star(s('b')))),
        concat(s('a'), s('b')),
    );

    assert!(matches(&r, "ab"));
    assert!(!matches(&r, "abb"));
    assert!(matches(&r, "cde"));
    assert!(matches(&r, ""));
}

#[test]
fn test_intersection_of_negations() {
    let r = alternate(
        intersect(negate(s('a')), negate(concat(s('b'), s('c')))),
        star(concat(s('d'), s('e'))),
    );

    assert!(matches(&r, "dedea"));
    assert!(matches(&r, "dede"));
    assert!(matches(&r, ""));
    assert!(!matches(&r, "bc"));
    assert!(!matches(&r, "a"));
}

#[test]
fn test_operators_agree_with_functions() {
    let (a, b, c, d, e) = (s('a'), s('b'), s('c'), s('d'), s('e'));
    let r = (!a.clone() & !(b.clone() ^ c.clone())) | (d.clone() ^ e.clone()).star();
    let expected = alternate(
        intersect(negate(a), negate(concat(b, c))),
        star(concat(d, e)),
    );
    assert_eq!(r, expected);
}

#[test]
fn test_everything_and_nothing() {
    let phi = regex_derivatives::empty();
    let any = negate(phi.clone());

    for input in ["", "a", "hello world", "ünïcödé"] {
        assert!(!matches(&phi, input));
        assert!(matches(&any, input));
    }
    assert!(matches(&regex_derivatives::epsilon(), ""));
    assert!(!matches(&regex_derivatives::epsilon(), "x"));
}

#[test]
fn test_unicode_symbols() {
    let r = star(alternate(s('λ'), s('→')));
    assert!(matches(&r, "λ→λλ"));
    assert!(!matches(&r, "λx"));
}
