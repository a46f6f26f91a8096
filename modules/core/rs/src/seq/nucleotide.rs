/// Check whether a character belongs to the nucleotide alphabet {A, T, C, G, N} in either case.
#[inline(always)]
pub fn is_nucleotide(symbol: char) -> bool {
    matches!(
        symbol,
        'A' | 'T' | 'C' | 'G' | 'N' | 'a' | 't' | 'c' | 'g' | 'n'
    )
}

/// Watson-Crick complement of a single symbol with its case preserved.
/// Symbols outside the nucleotide alphabet are returned unchanged.
#[inline(always)]
pub fn complement(symbol: char) -> char {
    match symbol {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        'a' => 't',
        't' => 'a',
        'c' => 'g',
        'g' => 'c',
        // N, n and everything else
        other => other,
    }
}
