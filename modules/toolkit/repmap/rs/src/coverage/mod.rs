pub use cell::{Cell, Coverage, FamilyId, LegendEntry};
pub use resolve::resolve_coverage;

pub(crate) use family::Families;
pub(crate) use paint::{paint, Claim};

mod cell;
mod family;
mod paint;
mod resolve;
