use fxhash::FxHashSet;
use routeplan_catalog::{ids::StopId, stop_catalog::StopCatalog};

/// The stops of the current city the user wants considered at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    stop_ids: FxHashSet<StopId>,
}

impl SelectionSet {
    pub fn all_of(catalog: &StopCatalog) -> Self {
        catalog.stop_ids().collect()
    }

    pub fn contains(&self, stop_id: StopId) -> bool {
        self.stop_ids.contains(&stop_id)
    }

    pub fn insert(&mut self, stop_id: StopId) -> bool {
        self.stop_ids.insert(stop_id)
    }

    pub fn remove(&mut self, stop_id: StopId) -> bool {
        self.stop_ids.remove(&stop_id)
    }

    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StopId> + '_ {
        self.stop_ids.iter().copied()
    }

    /// Selected stops in catalog order, the order used on the wire.
    pub fn ordered(&self, catalog: &StopCatalog) -> Vec<StopId> {
        catalog
            .stop_ids()
            .filter(|stop_id| self.contains(*stop_id))
            .collect()
    }
}

impl FromIterator<StopId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = StopId>>(iter: I) -> Self {
        Self {
            stop_ids: iter.into_iter().collect(),
        }
    }
}
