use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_getters::Dissolve;
use eyre::{ensure, Result};

use nucrep_core_rs::loc::Orientation;

/// Location of a repeat in the analysed text: an inclusive range of character offsets and the
/// orientation of the scan that found it.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Dissolve)]
pub struct Occurrence {
    start: usize,
    end: usize,
    orientation: Orientation,
}

impl Occurrence {
    pub fn new(start: usize, end: usize, orientation: Orientation) -> Result<Self> {
        ensure!(start <= end, "Invalid occurrence: start {start} > end {end}");
        Ok(Self {
            start,
            end,
            orientation,
        })
    }

    #[inline(always)]
    pub(crate) fn spanning(start: usize, end: usize, orientation: Orientation) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            orientation,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Last covered position, inclusive.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos <= self.end
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl Display for Occurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]({})", self.start, self.end, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct() -> Result<()> {
        let occurrence = Occurrence::new(3, 9, Orientation::RevComp)?;
        assert_eq!(occurrence.len(), 7);
        assert_eq!(occurrence.range(), 3..=9);
        assert_eq!(occurrence.to_string(), "[3, 9](-)");

        assert_eq!(Occurrence::new(4, 4, Orientation::Forward)?.len(), 1);
        assert!(Occurrence::new(5, 4, Orientation::Forward).is_err());
        Ok(())
    }

    #[test]
    fn test_contains() -> Result<()> {
        let occurrence = Occurrence::new(1, 3, Orientation::Forward)?;
        for (pos, expected) in [(0, false), (1, true), (2, true), (3, true), (4, false)] {
            assert_eq!(occurrence.contains(pos), expected, "{pos}");
        }
        Ok(())
    }
}
