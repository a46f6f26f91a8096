use eyre::Result;

use nucrep_core_rs::loc::Orientation;
use nucrep_core_rs::seq::{is_nucleotide, reverse_complement, revcomp_range, segments};

use crate::error::Error;
use crate::occurrence::Occurrence;

/// Locate a single needle in the nucleotide segments of the text, case-insensitively, both
/// verbatim (forward) and on the reverse-complement strand. Overlapping hits are reported.
/// Hits are ordered by segment, forward before reverse complement, then by position in the
/// scanned strand.
pub fn find_matches(text: &str, needle: &str) -> Result<Vec<Occurrence>> {
    if needle.is_empty() || !needle.chars().all(is_nucleotide) {
        return Err(Error::invalid_config(format!(
            "needle must be a non-empty nucleotide sequence, got {needle:?}"
        ))
        .into());
    }
    let needle = needle.to_ascii_uppercase();
    let width = needle.len();

    let mut hits = Vec::new();
    for segment in segments(text) {
        let len = segment.len();
        if len < width {
            continue;
        }
        let forward = segment.text().to_ascii_uppercase();
        let revcomp = reverse_complement(segment.text()).to_ascii_uppercase();

        for (seq, orientation) in [
            (&forward, Orientation::Forward),
            (&revcomp, Orientation::RevComp),
        ] {
            for (i, _) in seq
                .as_bytes()
                .windows(width)
                .enumerate()
                .filter(|(_, window)| *window == needle.as_bytes())
            {
                let j = i + width - 1;
                let (start, end) = match orientation {
                    Orientation::Forward => (i, j),
                    Orientation::RevComp => revcomp_range(len, i, j),
                };
                hits.push(Occurrence::spanning(
                    segment.start() + start,
                    segment.start() + end,
                    orientation,
                ));
            }
        }
    }
    log::debug!("Found {} hits of {needle}", hits.len());
    Ok(hits)
}
