//! Iterator helpers: infinite repetition and a short-circuiting fold.

/// Endlessly repeats `value`.
///
/// Pairs with [`IteratorExt::fold_while`] or `take` to bound the work:
///
/// ```
/// use tailwalk::iter_ext::infinity;
///
/// let five: Vec<u8> = infinity(7).take(5).collect();
/// assert_eq!(five, vec![7, 7, 7, 7, 7]);
/// ```
pub fn infinity<T: Clone>(value: T) -> impl Iterator<Item = T> {
    std::iter::repeat(value)
}

/// Extra adaptors on every iterator.
pub trait IteratorExt: Iterator + Sized {
    /// Accumulating fold that can stop early. `f` returns the next
    /// accumulator and a continue flag; the fold returns the
    /// accumulator the first time the flag is false, without consuming
    /// the rest of the iterator.
    ///
    /// ```
    /// use tailwalk::iter_ext::IteratorExt;
    ///
    /// let sum_until_big = (1..).fold_while(0, |acc, n| {
    ///     let next = acc + n;
    ///     (next, next < 100)
    /// });
    /// assert_eq!(sum_until_big, 105);
    /// ```
    fn fold_while<Acc, F>(self, seed: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, Self::Item) -> (Acc, bool),
    {
        let mut acc = seed;
        for item in self {
            let (next, keep_going) = f(acc, item);
            if !keep_going {
                return next;
            }
            acc = next;
        }
        acc
    }
}

impl<I: Iterator> IteratorExt for I {}
