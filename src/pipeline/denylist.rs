//! Reference exclusion list.
//!
//! Some publications carry systematically unreliable parameters and must not
//! contribute to the aggregation at all. The [`Denylist`] holds their full
//! reference strings; any raw record whose `pl_refname` exactly matches an
//! entry is dropped before grouping, so it feeds neither the recency ranking
//! nor the folded output.

use std::collections::HashSet;

use ahash::RandomState;

type FastHashSet<T> = HashSet<T, RandomState>;

/// Archive reference string of Stassun et al. 2017, whose bulk-reanalysis
/// values are known to disagree with dedicated studies.
pub const STASSUN_2017: &str = "<a refstr=STASSUN_ET_AL__2017 \
href=https://ui.adsabs.harvard.edu/abs/2017AJ....153..136S/abstract \
target=ref>Stassun et al. 2017</a>";

/// Set of excluded reference identifiers, matched exactly.
#[derive(Debug, Clone)]
pub struct Denylist {
    references: FastHashSet<String>,
}

impl Default for Denylist {
    /// The default list carries the one citation known to be unreliable.
    fn default() -> Self {
        let mut references = FastHashSet::default();
        references.insert(STASSUN_2017.to_string());
        Denylist { references }
    }
}

impl Denylist {
    /// An empty denylist, excluding nothing.
    pub fn empty() -> Self {
        Denylist {
            references: FastHashSet::default(),
        }
    }

    /// Add a reference string to the exclusion set.
    pub fn insert(&mut self, reference: impl Into<String>) {
        self.references.insert(reference.into());
    }

    /// Whether a record with this reference must be dropped. A record without
    /// a reference is never excluded.
    pub fn excludes(&self, reference: Option<&str>) -> bool {
        match reference {
            Some(reference) => self.references.contains(reference),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

impl FromIterator<String> for Denylist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Denylist {
            references: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod denylist_test {
    use super::*;

    #[test]
    fn test_default_excludes_known_citation() {
        let denylist = Denylist::default();
        assert!(denylist.excludes(Some(STASSUN_2017)));
        assert!(!denylist.excludes(Some("Fulton et al. 2018")));
        assert!(!denylist.excludes(None));
    }

    #[test]
    fn test_extension() {
        let mut denylist = Denylist::empty();
        assert!(!denylist.excludes(Some(STASSUN_2017)));

        denylist.insert("Doe et al. 2020");
        assert!(denylist.excludes(Some("Doe et al. 2020")));
        assert_eq!(denylist.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let denylist: Denylist =
            ["Doe et al. 2020".to_string(), "Roe et al. 2021".to_string()]
                .into_iter()
                .collect();
        assert_eq!(denylist.len(), 2);
        assert!(denylist.excludes(Some("Roe et al. 2021")));
    }
}
