//! Inclusive scans over a selection mask.
//!
//! `index[i]` is the number of set flags in `mask[..=i]`, so a selected
//! element at `i` belongs at output position `index[i] - 1`.

use log::trace;
use rayon::prelude::*;

pub fn inclusive_scan(mask: &[bool]) -> Vec<usize> {
    let mut index = Vec::with_capacity(mask.len());
    let mut running = 0usize;
    for &flag in mask {
        running += usize::from(flag);
        index.push(running);
    }
    index
}

/// Blocked parallel scan: local scans per chunk, an exclusive scan of the
/// chunk totals, then a parallel carry add. Same result as [`inclusive_scan`].
pub fn par_inclusive_scan(mask: &[bool], chunk_len: usize) -> Vec<usize> {
    let chunk_len = chunk_len.max(1);
    let mut index = vec![0usize; mask.len()];

    index
        .par_chunks_mut(chunk_len)
        .zip(mask.par_chunks(chunk_len))
        .for_each(|(ranks, flags)| {
            let mut running = 0usize;
            for (rank, &flag) in ranks.iter_mut().zip(flags) {
                running += usize::from(flag);
                *rank = running;
            }
        });

    let carries = chunk_carries(&index, chunk_len);
    trace!(
        "par_inclusive_scan: {} elements in {} chunks of {}",
        mask.len(),
        carries.len(),
        chunk_len
    );

    index
        .par_chunks_mut(chunk_len)
        .zip(carries.par_iter())
        .for_each(|(ranks, &carry)| {
            if carry > 0 {
                ranks.iter_mut().for_each(|rank| *rank += carry);
            }
        });
    index
}

/// Exclusive scan of per-chunk totals, read from the last rank of each locally scanned chunk.
fn chunk_carries(local: &[usize], chunk_len: usize) -> Vec<usize> {
    local
        .chunks(chunk_len)
        .scan(0usize, |acc, ranks| {
            let carry = *acc;
            *acc += ranks.last().copied().unwrap_or(0);
            Some(carry)
        })
        .collect()
}

/// Number of selected elements: the last rank, or 0 for an empty scan.
pub fn total_selected(index: &[usize]) -> usize {
    index.last().copied().unwrap_or(0)
}
