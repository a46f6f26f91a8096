#[cfg(feature = "bitcode")]
use bitcode::{Decode, Encode};
use derive_more::{Display, From, Into};
use eyre::Result;

use crate::error::Error;

/// Smallest number of display identities a palette may hold.
pub const MIN_PALETTE_SIZE: usize = 8;

const DEFAULT_COLORS: [&str; 12] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

/// Display identity of a repeat family: a slot in the palette.
#[cfg_attr(feature = "bitcode", derive(Encode, Decode))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into, Display)]
pub struct Identity(usize);

/// Fixed-size set of display identities handed out round-robin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.len() < MIN_PALETTE_SIZE {
            return Err(Error::invalid_config(format!(
                "palette must hold at least {MIN_PALETTE_SIZE} identities, got {}",
                colors.len()
            ))
            .into());
        }
        Ok(Self { colors })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Identity assigned to the `n`-th requester. Wraps around once the palette is exhausted.
    pub fn nth(&self, n: usize) -> Identity {
        Identity(n % self.colors.len())
    }

    pub fn color(&self, identity: Identity) -> &str {
        &self.colors[identity.0 % self.colors.len()]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|x| x.to_string()).collect(),
        }
    }
}
