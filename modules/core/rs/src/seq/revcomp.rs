use super::nucleotide::complement;

/// Reverse complement of a sequence. Case is preserved per character and
/// non-nucleotide characters pass through unchanged (but are still reversed).
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

/// Position in a sequence of length `len` that corresponds to `pos` in its reverse complement.
#[inline(always)]
pub fn revcomp_pos(len: usize, pos: usize) -> usize {
    debug_assert!(pos < len, "position {pos} is outside of a sequence of length {len}");
    len - 1 - pos
}

/// Map an inclusive range [start, end] of the reverse complement of a length-`len` sequence
/// onto the sequence itself: [len - 1 - end, len - 1 - start].
#[inline(always)]
pub fn revcomp_range(len: usize, start: usize, end: usize) -> (usize, usize) {
    debug_assert!(start <= end, "invalid range: {start} > {end}");
    (revcomp_pos(len, end), revcomp_pos(len, start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        for (seq, expected) in [
            ("", ""),
            ("A", "T"),
            ("ACGT", "ACGT"),
            ("AAAC", "GTTT"),
            ("GATTACA", "TGTAATC"),
            ("acgTN", "NAcgt"),
            ("AnC", "GnT"),
            ("AC-GU", "UC-GT"),
        ] {
            assert_eq!(reverse_complement(seq), expected, "{seq}");
        }
    }

    #[test]
    fn test_reverse_complement_involution() {
        for seq in ["", "A", "GATTACA", "aaTTccGGnN", "ACGTNNNNacgt", "CCCCCCCCCCCG"] {
            assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
        }
    }

    #[test]
    fn test_revcomp_range_single_positions() {
        assert_eq!(revcomp_pos(1, 0), 0);
        assert_eq!(revcomp_pos(7, 0), 6);
        assert_eq!(revcomp_pos(7, 6), 0);
        assert_eq!(revcomp_range(7, 0, 6), (0, 6));
        assert_eq!(revcomp_range(7, 2, 3), (3, 4));
        assert_eq!(revcomp_range(10, 0, 3), (6, 9));
    }

    #[test]
    fn test_revcomp_range_law() {
        // Every substring of the reverse complement must be the reverse complement
        // of the projected substring of the original sequence.
        for seq in ["GATTACA", "ACGTTGCAAN", "TTTTTCCCAG", "gAtTaCa"] {
            let rc: Vec<char> = reverse_complement(seq).chars().collect();
            let fwd: Vec<char> = seq.chars().collect();
            let len = fwd.len();

            for start in 0..len {
                for end in start..len {
                    let (fstart, fend) = revcomp_range(len, start, end);
                    assert!(fstart <= fend && fend < len);
                    assert_eq!(fend - fstart, end - start);

                    let projected: String = fwd[fstart..=fend].iter().collect();
                    let expected: String = rc[start..=end].iter().collect();
                    assert_eq!(reverse_complement(&projected), expected);
                }
            }
        }
    }
}
