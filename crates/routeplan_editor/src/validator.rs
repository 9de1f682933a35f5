use fxhash::FxHashSet;
use routeplan_catalog::{ids::StopId, stop_catalog::StopCatalog};
use thiserror::Error;

use crate::{selection::SelectionSet, solution::Solution};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `missing` is sorted by id.
    #[error("All selected stops must be included in the initial solution.")]
    IncompleteCoverage { missing: Vec<StopId> },

    /// `route_index` is 0-based, the message names the route 1-based.
    #[error("Route {} must start and end with a final stop.", .route_index + 1)]
    InvalidRouteEndpoint { route_index: usize },
}

/// Checks the structure the solver requires of an initial solution.
///
/// 1) coverage: every selected stop appears in some route
/// 2) endpoints: every route with at least two stops starts and ends at a
///    final stop, checked in display order. Shorter routes are skipped.
///
/// The first failure is returned, so a given input always yields the same
/// error.
pub fn validate(
    solution: &Solution,
    selection: &SelectionSet,
    catalog: &StopCatalog,
) -> Result<(), ValidationError> {
    check_coverage(solution, selection)?;
    check_endpoints(solution, catalog)
}

fn check_coverage(solution: &Solution, selection: &SelectionSet) -> Result<(), ValidationError> {
    let routed: FxHashSet<StopId> = solution.stop_ids().collect();

    let mut missing: Vec<StopId> = selection
        .iter()
        .filter(|stop_id| !routed.contains(stop_id))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort_unstable();
    Err(ValidationError::IncompleteCoverage { missing })
}

fn check_endpoints(solution: &Solution, catalog: &StopCatalog) -> Result<(), ValidationError> {
    for (route_index, route) in solution.iter().enumerate() {
        if !route.is_complete() {
            continue;
        }

        let is_valid = match (route.first(), route.last()) {
            (Some(first), Some(last)) => {
                catalog.is_final_stop(first) && catalog.is_final_stop(last)
            }
            _ => false,
        };

        if !is_valid {
            return Err(ValidationError::InvalidRouteEndpoint { route_index });
        }
    }

    Ok(())
}
