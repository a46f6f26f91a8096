pub use config::Config;
pub use coverage::{resolve_coverage, Cell, Coverage, FamilyId, LegendEntry};
pub use enumerate::find_repeats;
pub use error::Error;
pub use highlights::{Highlights, Selection};
pub use occurrence::Occurrence;
pub use palette::{Identity, Palette, MIN_PALETTE_SIZE};
pub use pipeline::{analyze, Analysis};
pub use reduce::reduce_to_maximal;
pub use repeat_map::RepeatMap;
pub use search::find_matches;

pub use nucrep_core_rs::loc::Orientation;

mod config;
mod coverage;
mod enumerate;
mod error;
mod highlights;
mod occurrence;
mod palette;
mod pipeline;
mod reduce;
mod repeat_map;
mod search;
