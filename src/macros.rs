//! Macros for composing stage chains.

/// Compose stages left to right.
///
/// `pipe![a, b, c]` applies `a` first, then `b`, then `c`. An empty pipe is
/// the identity stage.
///
/// # Example
///
/// ```
/// use beam::stages::{filter, map, take};
/// use beam::{from_iter, pipe};
///
/// let stage = pipe![
///     filter(|x: &u32| x % 2 == 1),
///     map(|x: u32| x * x),
///     take(3),
/// ];
/// let odd_squares = from_iter(0u32..).collect(stage).unwrap();
/// assert_eq!(odd_squares, vec![1, 9, 25]);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::core::identity()
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::core::Then::new($first, $crate::pipe!($($rest),+))
    };
}
