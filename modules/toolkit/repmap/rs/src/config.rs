use derive_getters::Dissolve;
use eyre::Result;

use crate::error::ensure_min_length;
use crate::palette::Palette;

/// Parameters of a single analysis pass.
#[derive(Clone, PartialEq, Eq, Debug, Dissolve)]
pub struct Config {
    /// Shortest substring, in nucleotides, that is reported as a repeat.
    pub min_length: usize,
    /// Display identities assigned to repeat families.
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: 6,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_min_length(&mut self, min_length: usize) -> &mut Self {
        self.min_length = min_length;
        self
    }

    pub fn set_palette(&mut self, palette: Palette) -> &mut Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_min_length(self.min_length)
    }
}
