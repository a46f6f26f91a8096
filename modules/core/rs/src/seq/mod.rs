pub use nucleotide::{complement, is_nucleotide};
pub use revcomp::{reverse_complement, revcomp_pos, revcomp_range};
pub use segment::{segments, Segment, Segments};

mod nucleotide;
mod revcomp;
mod segment;
