use std::ops::Range;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display, From, Into};

use nucrep_collections_rs::rle_vec::{Equal, RleVec};

use crate::palette::Identity;

/// Pass-scoped identifier of a repeat family, assigned in creation order.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display)]
pub struct FamilyId(usize);

/// Winner of a single character position.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct Cell {
    family: FamilyId,
    is_revcomp_of_canonical: bool,
}

impl Cell {
    pub fn family(&self) -> FamilyId {
        self.family
    }

    /// Whether this position is covered in the reverse-complement orientation of the
    /// family's canonical sequence.
    pub fn is_revcomp_of_canonical(&self) -> bool {
        self.is_revcomp_of_canonical
    }
}

#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Constructor, Getters, Dissolve)]
pub struct LegendEntry {
    family: FamilyId,
    canonical: String,
    identity: Identity,
}

/// Non-overlapping assignment of repeat families to the characters of a text together with
/// the legend of all families in creation order.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, PartialEq, Eq, Default, Constructor, Getters, Dissolve)]
pub struct Coverage {
    cells: Vec<Option<Cell>>,
    legend: Vec<LegendEntry>,
}

impl Coverage {
    pub fn get(&self, pos: usize) -> Option<&Cell> {
        self.cells.get(pos).and_then(|x| x.as_ref())
    }

    /// Number of covered positions.
    pub fn covered(&self) -> usize {
        self.cells.iter().filter(|x| x.is_some()).count()
    }

    /// Maximal runs of identical cell content, i.e. one run per styled span.
    pub fn runs(&self) -> RleVec<Option<Cell>, Equal> {
        RleVec::from_dense(Equal, self.cells.iter().copied())
    }

    /// Runs in character coordinates of the analysed text.
    pub fn spans(&self) -> Vec<(Range<usize>, Option<Cell>)> {
        self.runs()
            .spans()
            .map(|(range, cell)| (range, *cell))
            .collect()
    }
}
