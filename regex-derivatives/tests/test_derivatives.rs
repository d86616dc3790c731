use regex_derivatives::{
    derivative, empty, epsilon, is_normal_form, nullable, star, symbol, Regex,
};

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn symbols() -> Vec<char> {
    vec!['a', 'b', 'c']
}

fn samples() -> Vec<Regex> {
    let (a, b, c) = (symbol('a'), symbol('b'), symbol('c'));
    let r1 = (a.clone() | b.clone()) ^ c.clone().star();
    let r2 = a.clone() | (b.clone() | a.clone());
    let r3 = !(a.clone() ^ b.clone()) & !(c.clone() ^ a.clone());

    vec![a, b, c, epsilon(), empty(), r1, r2, r3]
}

#[test]
fn test_samples_are_normal() {
    for r in samples() {
        assert!(is_normal_form(&r), "{r}");
    }
}

#[test]
fn test_basic_derivatives() {
    let (a, b) = (symbol('a'), symbol('b'));

    assert_eq!(derivative(&empty(), 'a'), empty());
    assert_eq!(derivative(&epsilon(), 'a'), empty());
    assert_eq!(derivative(&b, 'a'), empty());
    assert_eq!(derivative(&b, 'b'), epsilon());
    assert_eq!(derivative(&(a ^ b.clone()), 'a'), b);
}

#[test]
fn test_star_and_negate() {
    for r in samples() {
        for s in symbols() {
            assert_eq!(
                derivative(&star(r.clone()), s),
                derivative(&r, s) ^ star(r.clone())
            );
            assert_eq!(derivative(&!r.clone(), s), !derivative(&r, s));
        }
    }
}

#[test]
fn test_nullable_homomorphism() {
    for x in samples() {
        assert_eq!(nullable(&star(x.clone())), epsilon());
        assert_eq!(nullable(&!x.clone()).is_nullable(), !x.is_nullable());
        for y in samples() {
            assert_eq!(
                nullable(&(x.clone() | y.clone())),
                nullable(&x) | nullable(&y)
            );
            assert_eq!(
                nullable(&(x.clone() & y.clone())),
                nullable(&x) & nullable(&y)
            );
        }
    }
}

#[test]
fn test_combinators() {
    let samples = samples();
    for r1 in &samples {
        for r2 in &samples {
            for s in symbols() {
                if !matches!(r1, Regex::Concat(_, _)) {
                    assert_eq!(
                        derivative(&(r1.clone() ^ r2.clone()), s),
                        (derivative(r1, s) ^ r2.clone())
                            | (nullable(r1) ^ derivative(r2, s))
                    );
                }
                assert_eq!(
                    derivative(&(r1.clone() | r2.clone()), s),
                    derivative(r1, s) | derivative(r2, s)
                );
                assert_eq!(
                    derivative(&(r1.clone() & r2.clone()), s),
                    derivative(r1, s) & derivative(r2, s)
                );

                for r3 in &samples {
                    assert_eq!(
                        derivative(&(r1.clone() | r2.clone() | r3.clone()), s),
                        derivative(r3, s) | derivative(r2, s) | derivative(r1, s)
                    );
                    assert_eq!(
                        derivative(&(r1.clone() & r2.clone() & r3.clone()), s),
                        derivative(r3, s) & derivative(r2, s) & derivative(r1, s)
                    );
                }
            }
        }
    }
}

#[test]
fn test_derivatives_are_normal() {
    for r in samples() {
        for s in symbols() {
            let d = derivative(&r, s);
            assert!(is_normal_form(&d), "derivative of {r} by {s} is {d}");
        }
    }
}
