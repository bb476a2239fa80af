//! Small function-composition helpers.
//!
//! Plumbing used when wiring combinator pipelines: identity, argument
//! flipping, left-to-right composition, and currying for two- and
//! three-argument functions.

/// The identity function. Handy as a neutral `map` argument.
pub fn id<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
pub fn flip<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn(B, A) -> R {
    move |b, a| f(a, b)
}

/// Left-to-right composition: `compose(f, g)(x)` is `g(f(x))`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

/// Curries a binary function into a chain of unary ones.
///
/// The outer closure can be applied repeatedly; each application
/// captures its first argument by clone.
pub fn curry<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curries a ternary function into a chain of unary ones.
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + Clone + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| {
            let f = f.clone();
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}
