use derive_getters::{Dissolve, Getters};
use eyre::Result;

use crate::coverage::{paint, Cell, Claim, Coverage, FamilyId, LegendEntry};
use crate::occurrence::Occurrence;
use crate::palette::{Identity, Palette};
use crate::search::find_matches;

/// All hits of one needle, displayed with a single identity.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Selection {
    needle: String,
    identity: Identity,
    occurrences: Vec<Occurrence>,
}

/// Interactive highlight state owned by the caller: committed selections plus at most one
/// transient (previewed) selection. Committed selections always outrank the transient one,
/// regardless of their positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    palette: Palette,
    committed: Vec<Selection>,
    transient: Option<Selection>,
}

impl Default for Highlights {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl Highlights {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            committed: Vec::new(),
            transient: None,
        }
    }

    pub fn committed(&self) -> &[Selection] {
        &self.committed
    }

    pub fn transient(&self) -> Option<&Selection> {
        self.transient.as_ref()
    }

    /// Replace the transient selection with the hits of `needle`. The selection gets the
    /// identity it will keep once committed.
    pub fn preview(&mut self, text: &str, needle: &str) -> Result<&Selection> {
        let occurrences = find_matches(text, needle)?;
        let selection = Selection {
            needle: needle.to_ascii_uppercase(),
            identity: self.palette.nth(self.committed.len()),
            occurrences,
        };
        Ok(&*self.transient.insert(selection))
    }

    /// Promote the transient selection. Nothing happens if there is no transient selection or
    /// it has no hits.
    pub fn commit(&mut self) -> Option<&Selection> {
        match self.transient.take() {
            Some(selection) if !selection.occurrences.is_empty() => {
                self.committed.push(selection);
                self.committed.last()
            }
            _ => None,
        }
    }

    pub fn discard(&mut self) {
        self.transient = None;
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.transient = None;
    }

    /// Coverage of the text: committed selections are painted first (by start, then by
    /// length, then in commit order), the transient selection only fills what remains.
    /// Family ids follow commit order and the transient selection comes last.
    pub fn resolve(&self, text: &str) -> Coverage {
        let mut cells = vec![None; text.chars().count()];
        let mut legend = Vec::with_capacity(self.committed.len() + 1);

        let claims = |family: FamilyId, selection: &Selection| -> Vec<Claim> {
            selection
                .occurrences
                .iter()
                .map(|x| Claim {
                    start: x.start(),
                    end: x.end(),
                    cell: Cell::new(family, x.orientation().is_revcomp()),
                })
                .collect()
        };

        let mut committed = Vec::new();
        for (ind, selection) in self.committed.iter().enumerate() {
            let family = FamilyId::from(ind);
            committed.extend(claims(family, selection));
            legend.push(LegendEntry::new(
                family,
                selection.needle.clone(),
                selection.identity,
            ));
        }
        paint(&mut cells, committed);

        if let Some(selection) = &self.transient {
            let family = FamilyId::from(self.committed.len());
            paint(&mut cells, claims(family, selection));
            legend.push(LegendEntry::new(
                family,
                selection.needle.clone(),
                selection.identity,
            ));
        }

        Coverage::new(cells, legend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn families(coverage: &Coverage) -> Vec<Option<usize>> {
        coverage
            .cells()
            .iter()
            .map(|x| x.map(|c| usize::from(c.family())))
            .collect()
    }

    #[test]
    fn test_preview_and_commit() -> Result<()> {
        let text = "AACCGGAT";
        let mut highlights = Highlights::default();
        assert!(highlights.commit().is_none());

        let selection = highlights.preview(text, "aacc")?;
        assert_eq!(selection.needle(), "AACC");
        assert_eq!(selection.occurrences().len(), 1);

        // Previewing again replaces the transient selection
        highlights.preview(text, "CCGG")?;
        let committed = highlights.commit().cloned();
        assert_eq!(committed.map(|x| x.needle().clone()), Some("CCGG".to_string()));
        assert!(highlights.transient().is_none());
        assert_eq!(highlights.committed().len(), 1);

        // A selection without hits is never committed
        highlights.preview(text, "TTTTT")?;
        assert!(highlights.commit().is_none());
        assert_eq!(highlights.committed().len(), 1);
        Ok(())
    }

    #[test]
    fn test_committed_outranks_transient() -> Result<()> {
        let text = "GGAAAACCC";
        let mut highlights = Highlights::default();

        highlights.preview(text, "AAAACC")?;
        highlights.commit();
        // Starts earlier than the committed hit, but must not take its positions
        highlights.preview(text, "GGAAA")?;

        let coverage = highlights.resolve(text);
        let c = Some(0);
        let t = Some(1);
        assert_eq!(families(&coverage), vec![t, t, c, c, c, c, c, c, None]);

        let legend: Vec<_> = coverage
            .legend()
            .iter()
            .map(|x| x.canonical().as_str())
            .collect();
        assert_eq!(legend, vec!["AAAACC", "GGAAA"]);
        Ok(())
    }

    #[test]
    fn test_revcomp_hits_are_flagged() -> Result<()> {
        let text = "AAAC GTTT";
        let mut highlights = Highlights::default();
        highlights.preview(text, "AAAC")?;

        let coverage = highlights.resolve(text);
        let flags: Vec<_> = coverage
            .cells()
            .iter()
            .map(|x| x.map(|c| c.is_revcomp_of_canonical()))
            .collect();
        let (f, t) = (Some(false), Some(true));
        assert_eq!(flags, vec![f, f, f, f, None, t, t, t, t]);
        Ok(())
    }

    #[test]
    fn test_discard_and_clear() -> Result<()> {
        let text = "ACGTACGT";
        let mut highlights = Highlights::default();
        highlights.preview(text, "ACG")?;
        highlights.commit();
        highlights.preview(text, "GTA")?;

        highlights.discard();
        assert!(highlights.transient().is_none());
        assert_eq!(highlights.resolve(text).legend().len(), 1);

        highlights.clear();
        assert!(highlights.committed().is_empty());
        assert_eq!(highlights.resolve(text).covered(), 0);
        Ok(())
    }
}
