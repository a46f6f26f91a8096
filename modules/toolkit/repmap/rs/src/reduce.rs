use std::cmp::Reverse;

use eyre::Result;
use itertools::Itertools;

use crate::error::ensure_min_length;
use crate::repeat_map::RepeatMap;

/// Keep only maximal repeats: a key is dropped when it occurs as a substring of a longer
/// accepted key. Containment is checked on sequence values, not on occurrence locations.
///
/// Keys are visited once, longest first (ties keep the input order), and the result preserves
/// that order. Retained keys keep their occurrence lists untouched.
pub fn reduce_to_maximal(repeats: &RepeatMap, min_length: usize) -> Result<RepeatMap> {
    ensure_min_length(min_length)?;

    let order = (0..repeats.len()).sorted_by_key(|ind| Reverse(repeats.entry(*ind).0.len()));

    let mut subsumed = vec![false; repeats.len()];
    let mut maximal = RepeatMap::new();
    for ind in order {
        if subsumed[ind] {
            continue;
        }
        let (key, occurrences) = repeats.entry(ind);
        maximal.insert(key.to_owned(), occurrences.to_vec());

        // Only keys longer than the minimum length have sub-repeats
        let len = key.len();
        if len <= min_length {
            continue;
        }
        for start in 0..=len - min_length {
            for end in (start + min_length)..=len {
                if start == 0 && end == len {
                    continue;
                }
                if let Some(inner) = repeats.position(&key[start..end]) {
                    subsumed[inner] = true;
                }
            }
        }
    }

    log::debug!(
        "Reduced {} repeats to {} maximal repeats",
        repeats.len(),
        maximal.len()
    );
    Ok(maximal)
}
