use ahash::{HashMap, HashMapExt};
use derive_getters::Getters;

use nucrep_core_rs::seq::reverse_complement;

use super::cell::{FamilyId, LegendEntry};
use crate::palette::{Identity, Palette};

/// A sequence and its reverse complement displayed as one concept.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Family {
    id: FamilyId,
    /// First member of the family encountered in longest-first order. Never changes.
    canonical: String,
    revcomp: String,
    identity: Identity,
}

/// Registry of families for one analysis pass. Every family is reachable through both of
/// its member sequences.
pub(crate) struct Families<'a> {
    palette: &'a Palette,
    families: Vec<Family>,
    lookup: HashMap<String, FamilyId>,
}

impl<'a> Families<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            families: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Family of the sequence, created with `seq` as the canonical member if neither
    /// `seq` nor its reverse complement was seen before.
    pub fn resolve(&mut self, seq: &str) -> &Family {
        let revcomp = reverse_complement(seq);
        let known = self
            .lookup
            .get(seq)
            .or_else(|| self.lookup.get(&revcomp))
            .copied();

        let id = match known {
            Some(id) => id,
            None => {
                let id = FamilyId::from(self.families.len());
                let identity = self.palette.nth(self.families.len());
                self.lookup.insert(seq.to_owned(), id);
                self.lookup.insert(revcomp.clone(), id);
                self.families.push(Family {
                    id,
                    canonical: seq.to_owned(),
                    revcomp,
                    identity,
                });
                log::trace!("New repeat family {id} with canonical sequence {seq}");
                id
            }
        };
        &self.families[usize::from(id)]
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn into_legend(self) -> Vec<LegendEntry> {
        self.families
            .into_iter()
            .map(|x| LegendEntry::new(x.id, x.canonical, x.identity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_lookup() {
        let palette = Palette::default();
        let mut families = Families::new(&palette);

        let first = families.resolve("GATTACA").clone();
        assert_eq!(first.canonical(), "GATTACA");
        assert_eq!(first.revcomp(), "TGTAATC");

        let second = families.resolve("TGTAATC").clone();
        assert_eq!(second, first);

        let third = families.resolve("CCCC").clone();
        assert_ne!(third.id(), first.id());
        assert_eq!(*third.identity(), palette.nth(1));
        assert_eq!(families.len(), 2);

        let legend = families.into_legend();
        assert_eq!(
            legend.iter().map(|x| x.canonical().as_str()).collect::<Vec<_>>(),
            vec!["GATTACA", "CCCC"]
        );
    }

    #[test]
    fn test_palindrome_is_its_own_complement() {
        let palette = Palette::default();
        let mut families = Families::new(&palette);
        let family = families.resolve("ACGT");
        assert_eq!(family.canonical(), family.revcomp());
        assert_eq!(families.len(), 1);
    }

    #[test]
    fn test_identities_wrap_around() {
        let palette = Palette::default();
        let mut families = Families::new(&palette);
        let sequences: Vec<String> = (0..palette.len() + 2)
            .map(|x| format!("{}A", "C".repeat(x + 1)))
            .collect();

        for seq in &sequences {
            families.resolve(seq);
        }
        let legend = families.into_legend();
        assert_eq!(legend.len(), palette.len() + 2);
        assert_eq!(legend[palette.len()].identity(), legend[0].identity());
        assert_eq!(legend[palette.len() + 1].identity(), legend[1].identity());
    }
}
