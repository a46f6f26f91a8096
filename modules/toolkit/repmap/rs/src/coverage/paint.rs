use super::cell::Cell;

/// Request to cover the inclusive range [start, end] with a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Claim {
    pub start: usize,
    pub end: usize,
    pub cell: Cell,
}

/// Assign claims to still-empty cells. Claims are ordered by start (ascending), then by end
/// (descending), then by their input order; earlier claims win and nothing is overwritten.
pub(crate) fn paint(cells: &mut [Option<Cell>], mut claims: Vec<Claim>) {
    claims.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    for claim in claims {
        if claim.start >= cells.len() {
            log::warn!(
                "Claim [{}, {}] is outside of a text of length {}",
                claim.start,
                claim.end,
                cells.len()
            );
            continue;
        }
        let end = claim.end.min(cells.len() - 1);
        for cell in cells[claim.start..=end].iter_mut().filter(|x| x.is_none()) {
            *cell = Some(claim.cell);
        }
    }
}
