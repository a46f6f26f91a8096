use crate::palette::Palette;
use crate::repeat_map::RepeatMap;

use super::cell::{Cell, Coverage};
use super::family::Families;
use super::paint::{paint, Claim};

/// Partition the text between repeat families.
///
/// `repeats` must be ordered longest-first (as produced by `reduce_to_maximal`): the first member
/// of a family in this order becomes its canonical sequence. An occurrence is marked as the
/// reverse-complement orientation when its key is the reverse complement of the canonical
/// sequence or when it was found on the reverse-complement strand. Overlaps are resolved by
/// start (ascending), then end (descending), then repeat order; the first claim of a position wins.
pub fn resolve_coverage(text: &str, repeats: &RepeatMap, palette: &Palette) -> Coverage {
    let mut families = Families::new(palette);

    let mut claims = Vec::with_capacity(repeats.iter().map(|(_, x)| x.len()).sum());
    for (seq, occurrences) in repeats.iter() {
        let family = families.resolve(seq);
        let (id, mirrored) = (*family.id(), family.revcomp() == seq);

        claims.extend(occurrences.iter().map(|x| Claim {
            start: x.start(),
            end: x.end(),
            cell: Cell::new(id, mirrored || x.orientation().is_revcomp()),
        }));
    }

    let mut cells = vec![None; text.chars().count()];
    paint(&mut cells, claims);

    log::debug!(
        "Resolved {} repeats into {} families covering {} of {} positions",
        repeats.len(),
        families.len(),
        cells.iter().filter(|x| x.is_some()).count(),
        cells.len()
    );
    Coverage::new(cells, families.into_legend())
}
