use routeplan_catalog::ids::StopId;
use serde::{Deserialize, Serialize};

/// An ordered visiting sequence of stops. Routes with fewer than two stops
/// are work in progress, not real lines yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stop_ids: Vec<StopId>,
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stop_ids(&self) -> &[StopId] {
        &self.stop_ids
    }

    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.stop_ids.len() >= 2
    }

    pub fn first(&self) -> Option<StopId> {
        self.stop_ids.first().copied()
    }

    pub fn last(&self) -> Option<StopId> {
        self.stop_ids.last().copied()
    }

    pub fn contains(&self, stop_id: StopId) -> bool {
        self.stop_ids.contains(&stop_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = StopId> + '_ {
        self.stop_ids.iter().copied()
    }

    pub(crate) fn stop_ids_mut(&mut self) -> &mut Vec<StopId> {
        &mut self.stop_ids
    }
}

impl From<Vec<StopId>> for Route {
    fn from(stop_ids: Vec<StopId>) -> Self {
        Self { stop_ids }
    }
}

impl FromIterator<StopId> for Route {
    fn from_iter<I: IntoIterator<Item = StopId>>(iter: I) -> Self {
        Self {
            stop_ids: iter.into_iter().collect(),
        }
    }
}
