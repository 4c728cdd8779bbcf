//! Result containers a drive folds into.
//!
//! A [`Form`] describes how to start (`init`), grow (`fold`) and finish
//! (`finalize`) an accumulator. Forms are pure descriptors: they hold no
//! per-drive state and can be handed to any number of drives. The one
//! exception is [`ForEach`], whose whole point is its side effect.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Result container descriptor.
///
/// # Example
///
/// ```rust
/// use beam::form::{to_vec, Form};
///
/// let form = to_vec();
/// let acc = form.fold(form.init(), 'x');
/// assert_eq!(form.finalize(acc), vec!['x']);
/// ```
pub trait Form<Item> {
    /// Working accumulator.
    type Acc;
    /// Value produced once the drive is over.
    type Output;

    fn init(&self) -> Self::Acc;

    fn fold(&self, acc: Self::Acc, item: Item) -> Self::Acc;

    fn finalize(&self, acc: Self::Acc) -> Self::Output;
}

/// Collects items into a `Vec` in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;

pub fn to_vec() -> ToVec {
    ToVec
}

impl<T> Form<T> for ToVec {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn fold(&self, mut acc: Vec<T>, item: T) -> Vec<T> {
        acc.push(item);
        acc
    }

    fn finalize(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

/// Keeps only the last item seen, if any.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToLast;

pub fn to_last() -> ToLast {
    ToLast
}

impl<T> Form<T> for ToLast {
    type Acc = Option<T>;
    type Output = Option<T>;

    fn init(&self) -> Option<T> {
        None
    }

    fn fold(&self, _acc: Option<T>, item: T) -> Option<T> {
        Some(item)
    }

    fn finalize(&self, acc: Option<T>) -> Option<T> {
        acc
    }
}

/// Collects key/value pairs into a `HashMap`; later keys overwrite earlier ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToMap;

pub fn to_map() -> ToMap {
    ToMap
}

impl<K: Eq + Hash, V> Form<(K, V)> for ToMap {
    type Acc = HashMap<K, V>;
    type Output = HashMap<K, V>;

    fn init(&self) -> HashMap<K, V> {
        HashMap::new()
    }

    fn fold(&self, mut acc: HashMap<K, V>, (key, value): (K, V)) -> HashMap<K, V> {
        acc.insert(key, value);
        acc
    }

    fn finalize(&self, acc: HashMap<K, V>) -> HashMap<K, V> {
        acc
    }
}

/// Hands every item to a callback. Not pure: the callback is the output.
pub struct ForEach<F> {
    callback: F,
}

pub fn for_each<F>(callback: F) -> ForEach<F> {
    ForEach { callback }
}

impl<T, F> Form<T> for ForEach<F>
where
    F: Fn(T),
{
    type Acc = ();
    type Output = ();

    fn init(&self) {}

    fn fold(&self, _acc: (), item: T) {
        (self.callback)(item)
    }

    fn finalize(&self, _acc: ()) {}
}

/// Folds with an associative operation starting from its identity element.
#[derive(Clone, Debug)]
pub struct Group<T> {
    identity: T,
    op: fn(T, T) -> T,
}

impl<T: Clone> Group<T> {
    pub fn new(identity: T, op: fn(T, T) -> T) -> Self {
        Self { identity, op }
    }
}

impl<T: Clone> Form<T> for Group<T> {
    type Acc = T;
    type Output = T;

    fn init(&self) -> T {
        self.identity.clone()
    }

    fn fold(&self, acc: T, item: T) -> T {
        (self.op)(acc, item)
    }

    fn finalize(&self, acc: T) -> T {
        acc
    }
}

/// Integer sum. Overflow wraps around in every build profile.
pub fn to_sum() -> Group<i64> {
    Group::new(0, i64::wrapping_add)
}

/// Integer product. Overflow wraps around in every build profile.
pub fn to_product() -> Group<i64> {
    Group::new(1, i64::wrapping_mul)
}

/// String concatenation.
pub fn to_concat() -> Group<String> {
    Group::new(String::new(), |mut a, b| {
        a.push_str(&b);
        a
    })
}

/// Form assembled from three closures.
pub struct FnForm<I, F, Z, T> {
    init: I,
    fold: F,
    finalize: Z,
    _item: PhantomData<fn(T)>,
}

/// Build a form from `init`, `fold` and `finalize` closures.
///
/// # Example
///
/// ```rust
/// use beam::form::form;
///
/// let average = form(
///     || (0.0, 0u32),
///     |(sum, n): (f64, u32), x: f64| (sum + x, n + 1),
///     |(sum, n): (f64, u32)| if n == 0 { None } else { Some(sum / n as f64) },
/// );
/// let mean = beam::from_vec(vec![1.0, 2.0, 6.0])
///     .eager(&average, beam::identity())
///     .unwrap();
/// assert_eq!(mean, Some(3.0));
/// ```
pub fn form<I, F, Z, T>(init: I, fold: F, finalize: Z) -> FnForm<I, F, Z, T> {
    FnForm {
        init,
        fold,
        finalize,
        _item: PhantomData,
    }
}

impl<T, A, O, I, F, Z> Form<T> for FnForm<I, F, Z, T>
where
    I: Fn() -> A,
    F: Fn(A, T) -> A,
    Z: Fn(A) -> O,
{
    type Acc = A;
    type Output = O;

    fn init(&self) -> A {
        (self.init)()
    }

    fn fold(&self, acc: A, item: T) -> A {
        (self.fold)(acc, item)
    }

    fn finalize(&self, acc: A) -> O {
        (self.finalize)(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn run<T, F: Form<T>>(form: &F, items: Vec<T>) -> F::Output {
        let acc = items
            .into_iter()
            .fold(form.init(), |acc, item| form.fold(acc, item));
        form.finalize(acc)
    }

    #[test]
    fn to_vec_keeps_order() {
        assert_eq!(run(&to_vec(), vec![2, 1, 3]), vec![2, 1, 3]);
    }

    #[test]
    fn to_vec_is_reusable() {
        let form = to_vec();
        assert_eq!(run(&form, vec![1]), vec![1]);
        assert_eq!(run(&form, vec![5, 6]), vec![5, 6]);
    }

    #[test]
    fn to_last_keeps_final_item() {
        assert_eq!(run(&to_last(), vec!["a", "b"]), Some("b"));
        assert_eq!(run(&to_last(), Vec::<&str>::new()), None);
    }

    #[test]
    fn to_map_overwrites_duplicate_keys() {
        let map = run(&to_map(), vec![("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn for_each_calls_back_in_order() {
        let seen = RefCell::new(Vec::new());
        run(&for_each(|x: i32| seen.borrow_mut().push(x)), vec![1, 2, 3]);
        assert_eq!(seen.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn group_forms_start_from_identity() {
        assert_eq!(run(&to_sum(), vec![]), 0);
        assert_eq!(run(&to_product(), vec![]), 1);
        assert_eq!(run(&to_concat(), vec![]), "");
    }

    #[test]
    fn group_forms_combine() {
        assert_eq!(run(&to_sum(), vec![1, 2, 3]), 6);
        assert_eq!(run(&to_product(), vec![2, 3, 4]), 24);
        assert_eq!(
            run(&to_concat(), vec!["ab".to_string(), "cd".to_string()]),
            "abcd"
        );
    }

    #[test]
    fn fn_form_applies_finalize() {
        let count = form(|| 0usize, |n: usize, _: char| n + 1, |n: usize| n * 10);
        assert_eq!(run(&count, vec!['a', 'b']), 20);
    }

    #[test]
    fn integer_groups_wrap_on_overflow() {
        assert_eq!(run(&to_sum(), vec![i64::MAX, 1]), i64::MIN);
        assert_eq!(run(&to_product(), vec![i64::MIN, -1]), i64::MIN);
        assert_eq!(run(&to_product(), vec![1 << 62, 4]), 0);
    }
}
