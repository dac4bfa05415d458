use crate::boolean_mask::{build_mask, par_build_mask, par_try_build_mask, try_build_mask};
use crate::prefix_sum::{inclusive_scan, par_inclusive_scan, total_selected};
use crate::scatter::{par_scatter, scatter, scatter_in_place};
use bon::Builder;
use derive_more::Display;
use log::debug;
use std::str::FromStr;

pub const DEFAULT_CHUNK_LEN: usize = 4096;

/// How the mask, scan and scatter passes are executed. Both produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Strategy {
    #[default]
    #[display("sequential")]
    Sequential,
    #[display("parallel")]
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{0}` (expected `sequential` or `parallel`)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel" | "par" => Ok(Strategy::Parallel),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Order-preserving stream compaction through an inclusive scan of the
/// selection mask. Stateless: the mask and rank arrays live for one call.
#[derive(Debug, Clone, Builder)]
pub struct Compactor {
    #[builder(default)]
    strategy: Strategy,
    /// Minimum number of elements handled by one parallel task.
    #[builder(default = DEFAULT_CHUNK_LEN)]
    chunk_len: usize,
}

impl Default for Compactor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Compactor {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn chunk_len(&self) -> usize {
        self.chunk_len.max(1)
    }

    pub fn mask<T, P>(&self, input: &[T], predicate: P) -> Vec<bool>
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        match self.strategy {
            Strategy::Sequential => build_mask(input, predicate),
            Strategy::Parallel => par_build_mask(input, predicate, self.chunk_len()),
        }
    }

    pub fn try_mask<T, P, E>(&self, input: &[T], predicate: P) -> Result<Vec<bool>, E>
    where
        T: Sync,
        E: Send,
        P: Fn(&T) -> Result<bool, E> + Sync,
    {
        match self.strategy {
            Strategy::Sequential => try_build_mask(input, predicate),
            Strategy::Parallel => par_try_build_mask(input, predicate, self.chunk_len()),
        }
    }

    pub fn scan(&self, mask: &[bool]) -> Vec<usize> {
        match self.strategy {
            Strategy::Sequential => inclusive_scan(mask),
            Strategy::Parallel => par_inclusive_scan(mask, self.chunk_len()),
        }
    }

    pub fn select<T, P>(&self, input: &[T], predicate: P) -> Vec<T>
    where
        T: Clone + Default + Send + Sync,
        P: Fn(&T) -> bool + Sync,
    {
        let mask = self.mask(input, predicate);
        self.select_by_mask(input, &mask)
    }

    /// Like [`Compactor::select`], but a failing predicate aborts the call
    /// before any scan or scatter and its error is returned unchanged.
    pub fn try_select<T, P, E>(&self, input: &[T], predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone + Default + Send + Sync,
        E: Send,
        P: Fn(&T) -> Result<bool, E> + Sync,
    {
        let mask = self.try_mask(input, predicate)?;
        Ok(self.select_by_mask(input, &mask))
    }

    /// Compacts `input` with a precomputed mask. Empty input returns before any scan.
    ///
    /// # Panics
    ///
    /// If `mask.len() != input.len()`.
    pub fn select_by_mask<T>(&self, input: &[T], mask: &[bool]) -> Vec<T>
    where
        T: Clone + Default + Send + Sync,
    {
        assert_eq!(input.len(), mask.len(), "Data and mask length must match");
        if input.is_empty() {
            return Vec::new();
        }
        let index = self.scan(mask);
        debug!(
            "select: kept {} of {} elements ({})",
            total_selected(&index),
            input.len(),
            self.strategy
        );
        match self.strategy {
            Strategy::Sequential => scatter(input, mask, &index),
            Strategy::Parallel => par_scatter(input, mask, &index, self.chunk_len()),
        }
    }

    /// In-place variant; needs neither `Clone` nor `Default`. The swap pass is sequential.
    pub fn select_in_place<T, P>(&self, values: &mut Vec<T>, predicate: P)
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        let mask = self.mask(values, predicate);
        self.select_in_place_by_mask(values, &mask);
    }

    /// # Panics
    ///
    /// If `mask.len() != values.len()`.
    pub fn select_in_place_by_mask<T>(&self, values: &mut Vec<T>, mask: &[bool]) {
        assert_eq!(values.len(), mask.len(), "Data and mask length must match");
        if values.is_empty() {
            return;
        }
        let index = self.scan(mask);
        scatter_in_place(values, mask, &index);
    }
}

/// Selects the elements of `input` satisfying `predicate`, in order, with the default compactor.
pub fn select<T, P>(input: &[T], predicate: P) -> Vec<T>
where
    T: Clone + Default + Send + Sync,
    P: Fn(&T) -> bool + Sync,
{
    Compactor::default().select(input, predicate)
}

pub fn try_select<T, P, E>(input: &[T], predicate: P) -> Result<Vec<T>, E>
where
    T: Clone + Default + Send + Sync,
    E: Send,
    P: Fn(&T) -> Result<bool, E> + Sync,
{
    Compactor::default().try_select(input, predicate)
}
