use derive_getters::{Dissolve, Getters};
use eyre::Result;

use crate::config::Config;
use crate::coverage::{resolve_coverage, Coverage};
use crate::enumerate::find_repeats;
use crate::reduce::reduce_to_maximal;
use crate::repeat_map::RepeatMap;

/// Result of a single analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Analysis {
    /// Maximal repeats, longest first.
    repeats: RepeatMap,
    coverage: Coverage,
}

/// Find, reduce and resolve repeats of the text in one go. The configuration is validated
/// before any work is done.
pub fn analyze(text: &str, config: &Config) -> Result<Analysis> {
    config.validate()?;

    let raw = find_repeats(text, config.min_length)?;
    let repeats = reduce_to_maximal(&raw, config.min_length)?;
    let coverage = resolve_coverage(text, &repeats, &config.palette);

    Ok(Analysis { repeats, coverage })
}
