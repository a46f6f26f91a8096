use std::fmt::Display;

#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};

/// How an occurrence was located relative to the scanned nucleotide segment.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Orientation {
    /// Found by scanning the segment as written.
    #[default]
    Forward = 1,
    /// Found by scanning the reverse complement of the segment.
    RevComp = -1,
}

impl Orientation {
    /// Flip the orientation from forward to reverse complement or vice versa.
    pub fn flip(&mut self) -> &mut Self {
        *self = self.flipped();
        self
    }

    /// New orientation that is the opposite of the current one.
    pub fn flipped(&self) -> Self {
        match self {
            Orientation::Forward => Orientation::RevComp,
            Orientation::RevComp => Orientation::Forward,
        }
    }

    pub fn is_revcomp(&self) -> bool {
        matches!(self, Orientation::RevComp)
    }

    /// Get the symbolic representation of the orientation.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::RevComp => '-',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Orientation {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Orientation::Forward),
            '-' => Ok(Orientation::RevComp),
            _ => Err(()),
        }
    }
}
