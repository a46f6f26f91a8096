use std::iter::Zip;
use std::ops::Range;
use std::vec::IntoIter;

use derive_getters::Dissolve;
use eyre::{ensure, Result};

use super::identical::Identical;

/// Run-length encoded vector. Neighbouring runs are never identical: `push` extends
/// the last run instead of opening a new one whenever the values are identical.
#[derive(Debug, Clone, Default, Dissolve)]
pub struct RleVec<V, I: Identical<V>> {
    values: Vec<V>,
    lengths: Vec<usize>,
    identical: I,
}

impl<V, I: Identical<V>> RleVec<V, I> {
    pub fn new(identical: I) -> Self {
        Self {
            values: Vec::new(),
            lengths: Vec::new(),
            identical,
        }
    }

    pub fn with_capacity(identical: I, runs: usize) -> Self {
        Self {
            values: Vec::with_capacity(runs),
            lengths: Vec::with_capacity(runs),
            identical,
        }
    }

    /// Encode a dense sequence of values.
    pub fn from_dense(identical: I, dense: impl IntoIterator<Item = V>) -> Self {
        let mut rle = Self::new(identical);
        for value in dense {
            rle.push(value, 1);
        }
        rle
    }

    /// Build from already encoded runs. Zero-length runs are rejected and identical
    /// neighbours are merged.
    pub fn from_runs(identical: I, values: Vec<V>, lengths: Vec<usize>) -> Result<Self> {
        ensure!(
            values.len() == lengths.len(),
            "Values and lengths must have the same length, got {} and {}",
            values.len(),
            lengths.len()
        );
        ensure!(
            lengths.iter().all(|x| *x > 0),
            "Runs must have a positive length: {lengths:?}"
        );

        let mut rle = Self::with_capacity(identical, values.len());
        for (value, length) in values.into_iter().zip(lengths) {
            rle.push(value, length);
        }
        Ok(rle)
    }

    pub fn identical(&self, first: &V, second: &V) -> bool {
        self.identical.identical(first, second)
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Number of encoded elements, i.e. the length of the dense vector.
    pub fn dense_len(&self) -> usize {
        self.lengths.iter().sum()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.lengths.clear();
    }

    pub fn push(&mut self, value: V, length: usize) {
        if length == 0 {
            return;
        }
        if let (Some(last), Some(run)) = (self.values.last(), self.lengths.last_mut()) {
            if self.identical.identical(last, &value) {
                *run += length;
                return;
            }
        }
        self.values.push(value);
        self.lengths.push(length);
    }

    pub fn runs(&self) -> impl Iterator<Item = (&V, &usize)> {
        self.values.iter().zip(self.lengths.iter())
    }

    /// Runs with their half-open coordinates in the dense vector.
    pub fn spans(&self) -> impl Iterator<Item = (Range<usize>, &V)> {
        let mut cursor = 0;
        self.runs().map(move |(value, length)| {
            let start = cursor;
            cursor += *length;
            (start..cursor, value)
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Decode back into the dense representation.
    pub fn to_dense(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut dense = Vec::with_capacity(self.dense_len());
        for (value, length) in self.runs() {
            dense.extend(std::iter::repeat_n(value.clone(), *length));
        }
        dense
    }
}

impl<V, I: Identical<V>> IntoIterator for RleVec<V, I> {
    type Item = (V, usize);
    type IntoIter = Zip<IntoIter<V>, IntoIter<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter().zip(self.lengths)
    }
}
