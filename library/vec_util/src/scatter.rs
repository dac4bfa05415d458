use crate::prefix_sum::total_selected;
use log::trace;
use rayon::prelude::*;

fn check_lengths(values: usize, mask: &[bool], index: &[usize]) {
    assert_eq!(values, mask.len(), "Data and mask length must match");
    assert_eq!(mask.len(), index.len(), "Mask and index length must match");
}

/// Writes every selected `input[i]` to `output[index[i] - 1]`.
///
/// Iterations are independent, the ranks already fix every destination.
pub fn scatter<T>(input: &[T], mask: &[bool], index: &[usize]) -> Vec<T>
where
    T: Clone + Default,
{
    check_lengths(input.len(), mask, index);
    let mut output = vec![T::default(); total_selected(index)];
    for i in 0..input.len() {
        if mask[i] {
            output[index[i] - 1] = input[i].clone();
        }
    }
    output
}

/// Parallel scatter. The output is split into one disjoint window per input
/// chunk, chunk `k` owning the ranks it produced, and the windows are filled
/// concurrently.
pub fn par_scatter<T>(input: &[T], mask: &[bool], index: &[usize], chunk_len: usize) -> Vec<T>
where
    T: Clone + Default + Send + Sync,
{
    check_lengths(input.len(), mask, index);
    let chunk_len = chunk_len.max(1);
    let mut output = vec![T::default(); total_selected(index)];

    let mut windows = Vec::with_capacity(index.len().div_ceil(chunk_len));
    let mut rest: &mut [T] = &mut output;
    let mut base = 0usize;
    for ranks in index.chunks(chunk_len) {
        let end = ranks.last().copied().unwrap_or(base);
        let (window, tail) = std::mem::take(&mut rest).split_at_mut(end - base);
        windows.push((base, window));
        rest = tail;
        base = end;
    }
    trace!("par_scatter: {} windows over {} outputs", windows.len(), base);

    windows
        .into_par_iter()
        .zip(input.par_chunks(chunk_len))
        .zip(mask.par_chunks(chunk_len))
        .zip(index.par_chunks(chunk_len))
        .for_each(|((((base, window), values), flags), ranks)| {
            for i in 0..values.len() {
                if flags[i] {
                    window[ranks[i] - 1 - base] = values[i].clone();
                }
            }
        });
    output
}

/// Stable in-place compaction. `index[i] - 1 <= i`, so each selected element
/// moves down into a slot that is already dead, then the tail is dropped.
pub fn scatter_in_place<T>(values: &mut Vec<T>, mask: &[bool], index: &[usize]) {
    check_lengths(values.len(), mask, index);
    for i in 0..values.len() {
        if mask[i] {
            values.swap(index[i] - 1, i);
        }
    }
    values.truncate(total_selected(index));
}
