use crate::Compactor;
use rayon::prelude::*;

/// Evaluates `predicate` on every element, `mask[i] = predicate(&input[i])`.
pub fn build_mask<T, P>(input: &[T], predicate: P) -> Vec<bool>
where
    P: Fn(&T) -> bool,
{
    input.iter().map(predicate).collect()
}

/// Parallel version of [`build_mask`]; `min_len` bounds how finely rayon splits the input.
pub fn par_build_mask<T, P>(input: &[T], predicate: P, min_len: usize) -> Vec<bool>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    input
        .par_iter()
        .with_min_len(min_len.max(1))
        .map(|x| predicate(x))
        .collect()
}

/// Fallible mask builder. Stops at the first predicate error and returns it unchanged.
pub fn try_build_mask<T, P, E>(input: &[T], predicate: P) -> Result<Vec<bool>, E>
where
    P: Fn(&T) -> Result<bool, E>,
{
    input.iter().map(predicate).collect()
}

/// Parallel version of [`try_build_mask`]. Some error is returned if any element fails;
/// which one depends on scheduling when several do.
pub fn par_try_build_mask<T, P, E>(input: &[T], predicate: P, min_len: usize) -> Result<Vec<bool>, E>
where
    T: Sync,
    E: Send,
    P: Fn(&T) -> Result<bool, E> + Sync,
{
    input
        .par_iter()
        .with_min_len(min_len.max(1))
        .map(|x| predicate(x))
        .collect()
}

pub trait BooleanMask<T> {
    fn boolean_mask(&self, mask: &[bool]) -> Vec<T>;
}

impl<T> BooleanMask<T> for [T]
where
    T: Clone + Default + Send + Sync,
{
    fn boolean_mask(&self, mask: &[bool]) -> Vec<T> {
        Compactor::default().select_by_mask(self, mask)
    }
}

pub trait BooleanMaskInPlace {
    fn boolean_mask_in_place(&mut self, mask: &[bool]);
}

impl<T> BooleanMaskInPlace for Vec<T> {
    fn boolean_mask_in_place(&mut self, mask: &[bool]) {
        Compactor::default().select_in_place_by_mask(self, mask);
    }
}

pub trait SelectExt<T> {
    /// Order-preserving copy of the elements satisfying `predicate`.
    fn select_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Sync;
}

impl<T> SelectExt<T> for [T]
where
    T: Clone + Default + Send + Sync,
{
    fn select_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Sync,
    {
        Compactor::default().select(self, predicate)
    }
}
