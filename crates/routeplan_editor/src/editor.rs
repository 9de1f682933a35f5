//! Edits of a [`Solution`].
//!
//! Every operation takes a snapshot and returns a new one, the input is never
//! modified. Untouched routes and stops keep their relative order and routes
//! are never merged or dropped implicitly.

use routeplan_catalog::{ids::StopId, stop_catalog::StopCatalog};

use crate::{
    error::{EditorError, IndexKind},
    route::Route,
    selection::SelectionSet,
    solution::Solution,
};

pub fn add_route(solution: &Solution) -> Solution {
    let mut next = solution.clone();
    next.routes_mut().push(Route::empty());
    next
}

pub fn remove_route(solution: &Solution, route_index: usize) -> Result<Solution, EditorError> {
    solution.route(route_index)?;

    let mut next = solution.clone();
    next.routes_mut().remove(route_index);
    Ok(next)
}

/// Appending a stop the route already holds changes nothing.
pub fn append_stop(
    solution: &Solution,
    route_index: usize,
    stop_id: StopId,
) -> Result<Solution, EditorError> {
    if solution.route(route_index)?.contains(stop_id) {
        return Ok(solution.clone());
    }

    let mut next = solution.clone();
    next.route_mut(route_index)?.stop_ids_mut().push(stop_id);
    Ok(next)
}

/// Removes every occurrence of the stop from the route.
pub fn remove_stop(
    solution: &Solution,
    route_index: usize,
    stop_id: StopId,
) -> Result<Solution, EditorError> {
    let mut next = solution.clone();
    next.route_mut(route_index)?
        .stop_ids_mut()
        .retain(|&id| id != stop_id);
    Ok(next)
}

/// Moves the stop at `from_position` so that it ends up at `to_position`.
pub fn reorder_stop(
    solution: &Solution,
    route_index: usize,
    from_position: usize,
    to_position: usize,
) -> Result<Solution, EditorError> {
    let len = solution.route(route_index)?.len();
    for position in [from_position, to_position] {
        if position >= len {
            return Err(EditorError::IndexOutOfRange {
                kind: IndexKind::Position,
                index: position,
                len,
            });
        }
    }

    if from_position == to_position {
        return Ok(solution.clone());
    }

    let mut next = solution.clone();
    let stop_ids = next.route_mut(route_index)?.stop_ids_mut();
    let stop_id = stop_ids.remove(from_position);
    stop_ids.insert(to_position, stop_id);
    Ok(next)
}

/// Drops every stop that is no longer selected from every route. Routes left
/// empty stay in place.
pub fn reconcile_with_selection(solution: &Solution, selection: &SelectionSet) -> Solution {
    let mut next = solution.clone();
    for route in next.routes_mut() {
        route
            .stop_ids_mut()
            .retain(|&stop_id| selection.contains(stop_id));
    }
    next
}

/// Selected stops, in catalog order, that the route does not hold yet.
pub fn candidate_stops(
    solution: &Solution,
    route_index: usize,
    selection: &SelectionSet,
    catalog: &StopCatalog,
) -> Result<Vec<StopId>, EditorError> {
    let route = solution.route(route_index)?;

    Ok(catalog
        .stop_ids()
        .filter(|&stop_id| selection.contains(stop_id) && !route.contains(stop_id))
        .collect())
}
