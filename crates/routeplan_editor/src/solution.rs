use routeplan_catalog::ids::StopId;
use serde::{Deserialize, Serialize};

use crate::{
    error::{EditorError, IndexKind},
    route::Route,
};

/// Candidate routes used to seed the optimizer. Route order only matters for
/// display ("Route 1", "Route 2", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, route_index: usize) -> Result<&Route, EditorError> {
        self.routes.get(route_index).ok_or(EditorError::IndexOutOfRange {
            kind: IndexKind::Route,
            index: route_index,
            len: self.routes.len(),
        })
    }

    pub(crate) fn route_mut(&mut self, route_index: usize) -> Result<&mut Route, EditorError> {
        let len = self.routes.len();
        self.routes
            .get_mut(route_index)
            .ok_or(EditorError::IndexOutOfRange {
                kind: IndexKind::Route,
                index: route_index,
                len,
            })
    }

    pub(crate) fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// True when at least one route holds a stop. A solution without stops
    /// means "no initial solution supplied".
    pub fn has_stops(&self) -> bool {
        self.routes.iter().any(|route| !route.is_empty())
    }

    pub fn empty_route_indices(&self) -> Vec<usize> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.is_empty())
            .map(|(route_index, _)| route_index)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = StopId> + '_ {
        self.routes.iter().flat_map(|route| route.iter())
    }

    pub fn to_wire(&self) -> Vec<Vec<StopId>> {
        self.routes
            .iter()
            .map(|route| route.stop_ids().to_vec())
            .collect()
    }
}

impl From<Vec<Vec<StopId>>> for Solution {
    fn from(routes: Vec<Vec<StopId>>) -> Self {
        Self {
            routes: routes.into_iter().map(Route::from).collect(),
        }
    }
}

impl From<Vec<Route>> for Solution {
    fn from(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

pub fn route_label(route_index: usize) -> String {
    format!("Route {}", route_index + 1)
}
