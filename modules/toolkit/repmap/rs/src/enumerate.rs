use eyre::Result;

use nucrep_core_rs::loc::Orientation;
use nucrep_core_rs::seq::{reverse_complement, revcomp_range, segments, Segment};

use crate::error::ensure_min_length;
use crate::occurrence::Occurrence;
use crate::repeat_map::RepeatMap;

/// Segments longer than this are reported since the scan is cubic in the segment length.
const LARGE_SEGMENT: usize = 2_000;

/// Find every substring of length >= `min_length` that occurs at least twice in the text,
/// counting occurrences in the nucleotide segments and in their reverse complements.
///
/// All substrings are enumerated, not only the maximal ones: a segment of length L contributes
/// O(L^2) keys of average length O(L) from each strand. Keys are uppercase and map to absolute
/// character offsets in `text`.
pub fn find_repeats(text: &str, min_length: usize) -> Result<RepeatMap> {
    ensure_min_length(min_length)?;

    let mut repeats = RepeatMap::new();
    let mut total = 0;
    for segment in segments(text) {
        total += 1;
        if segment.len() < min_length {
            continue;
        }
        if segment.len() > LARGE_SEGMENT {
            log::warn!(
                "Scanning a {} nt segment at offset {}, this may take a while",
                segment.len(),
                segment.start()
            );
        }
        scan(&segment, min_length, &mut repeats);
    }

    let candidates = repeats.len();
    repeats.retain(|_, occurrences| occurrences.len() >= 2);
    log::debug!(
        "Scanned {total} segments: {candidates} distinct substrings, {} repeats (min length {min_length})",
        repeats.len()
    );

    Ok(repeats)
}

fn scan(segment: &Segment, min_length: usize, saveto: &mut RepeatMap) {
    let len = segment.len();
    let offset = segment.start();
    log::trace!("Scanning segment at {offset} of length {len}");

    // Nucleotides are ASCII: byte offsets are character offsets
    let forward = segment.text().to_ascii_uppercase();
    let revcomp = reverse_complement(segment.text()).to_ascii_uppercase();

    for (seq, orientation) in [
        (&forward, Orientation::Forward),
        (&revcomp, Orientation::RevComp),
    ] {
        for i in 0..=len - min_length {
            for j in (i + min_length - 1)..len {
                let (start, end) = match orientation {
                    Orientation::Forward => (i, j),
                    Orientation::RevComp => revcomp_range(len, i, j),
                };
                saveto.push(
                    &seq[i..=j],
                    Occurrence::spanning(offset + start, offset + end, orientation),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn fwd(start: usize, end: usize) -> Occurrence {
        Occurrence::new(start, end, Orientation::Forward).unwrap()
    }

    fn rev(start: usize, end: usize) -> Occurrence {
        Occurrence::new(start, end, Orientation::RevComp).unwrap()
    }

    #[test]
    fn test_invalid_min_length() {
        let report = find_repeats("ACGTACGT", 0).unwrap_err();
        assert!(report.downcast_ref::<Error>().is_some());
    }

    #[test]
    fn test_no_repeats() -> Result<()> {
        for (text, min_length) in [
            ("", 1),
            ("xyz, hello?", 3),
            ("hello, world", 1),
            ("ACG", 4),
            ("AACCAACC", 5),
        ] {
            assert!(find_repeats(text, min_length)?.is_empty(), "{text}");
        }
        Ok(())
    }

    #[test]
    fn test_direct_repeat() -> Result<()> {
        let repeats = find_repeats("AACCAACC", 4)?;
        assert_eq!(repeats.keys().collect::<Vec<_>>(), vec!["AACC", "GGTT"]);
        assert_eq!(repeats.get("AACC"), Some([fwd(0, 3), fwd(4, 7)].as_slice()));
        // Found on the reverse complement strand; listed in the scan order of that strand
        assert_eq!(repeats.get("GGTT"), Some([rev(4, 7), rev(0, 3)].as_slice()));
        Ok(())
    }

    #[test]
    fn test_repeats_across_segments() -> Result<()> {
        let repeats = find_repeats("gattaca|TGTAATC", 7)?;
        assert_eq!(repeats.keys().collect::<Vec<_>>(), vec!["GATTACA", "TGTAATC"]);
        assert_eq!(repeats.get("GATTACA"), Some([fwd(0, 6), rev(8, 14)].as_slice()));
        assert_eq!(repeats.get("TGTAATC"), Some([rev(0, 6), fwd(8, 14)].as_slice()));
        Ok(())
    }

    #[test]
    fn test_all_substrings_are_enumerated() -> Result<()> {
        let repeats = find_repeats("AAAAAAAA", 4)?;
        for (key, count) in [("AAAA", 5), ("AAAAA", 4), ("AAAAAA", 3), ("AAAAAAA", 2)] {
            assert_eq!(repeats.get(key).map(|x| x.len()), Some(count), "{key}");
            let complement = key.replace('A', "T");
            assert_eq!(repeats.get(&complement).map(|x| x.len()), Some(count));
        }
        // A single occurrence is not a repeat
        assert!(!repeats.contains_key("AAAAAAAA"));
        Ok(())
    }

    #[test]
    fn test_short_segments_are_skipped() -> Result<()> {
        // "ACG" is shorter than the minimum length, so only the palindrome inside "ACGTT" remains
        let repeats = find_repeats("ACG xx ACGTT", 4)?;
        assert_eq!(repeats.keys().collect::<Vec<_>>(), vec!["ACGT"]);
        assert_eq!(repeats.get("ACGT"), Some([fwd(7, 10), rev(7, 10)].as_slice()));
        Ok(())
    }
}
