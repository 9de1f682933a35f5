use routeplan_catalog::{
    catalog_client::{CatalogClient, PageFetcher},
    error::CatalogError,
    ids::{CityId, StopId},
    stop::Stop,
    stop_catalog::StopCatalog,
};
use routeplan_jobs::{
    algorithm::Algorithm,
    optimization_client::JobSubmitter,
    request::OptimizationRequest,
    response::OptimizationResponse,
};
use tracing::{debug, info, warn};

use crate::{
    editor,
    error::{EditorError, SessionError},
    selection::SelectionSet,
    solution::{Solution, route_label},
    validator::{self, ValidationError},
};

/// Proof that a catalog load was started. Only the ticket of the most recent
/// load can install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityLoadTicket {
    generation: u64,
    city_id: CityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityLoadOutcome {
    Loaded { stop_count: usize },
    /// A newer load was started before this one completed. Its result was
    /// dropped.
    Superseded,
}

/// The editing state of one operator: the catalog of the chosen city, the
/// selected stops and the initial solution under construction.
///
/// Every selection change reconciles the solution before returning, so no
/// route ever holds an unselected stop.
pub struct Session {
    catalog: StopCatalog,
    selection: SelectionSet,
    solution: Solution,
    algorithm: Algorithm,
    number_of_routes: u32,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            catalog: StopCatalog::default(),
            selection: SelectionSet::default(),
            solution: Solution::default(),
            algorithm: Algorithm::default(),
            number_of_routes: 1,
            generation: 0,
        }
    }
}

impl Session {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn city_id(&self) -> Option<CityId> {
        self.catalog.city_id()
    }

    pub fn catalog(&self) -> &StopCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn number_of_routes(&self) -> u32 {
        self.number_of_routes
    }

    // City

    pub fn begin_city_load(&mut self, city_id: CityId) -> CityLoadTicket {
        self.generation += 1;
        CityLoadTicket {
            generation: self.generation,
            city_id,
        }
    }

    /// Installs the result of a catalog load.
    ///
    /// A successful load replaces the catalog, selects every stop and clears
    /// the solution. A failed load leaves the session untouched. Results of
    /// superseded loads are dropped whether they succeeded or not.
    pub fn finish_city_load(
        &mut self,
        ticket: CityLoadTicket,
        result: Result<Vec<Stop>, CatalogError>,
    ) -> Result<CityLoadOutcome, SessionError> {
        if ticket.generation != self.generation {
            info!(
                city_id = %ticket.city_id,
                "Session: discarding superseded catalog load"
            );
            return Ok(CityLoadOutcome::Superseded);
        }

        let stops = result?;

        self.catalog = StopCatalog::new(ticket.city_id, stops);
        self.selection = SelectionSet::all_of(&self.catalog);
        self.solution = Solution::empty();

        Ok(CityLoadOutcome::Loaded {
            stop_count: self.catalog.len(),
        })
    }

    pub async fn load_city<F>(
        &mut self,
        client: &CatalogClient<F>,
        city_id: CityId,
    ) -> Result<CityLoadOutcome, SessionError>
    where
        F: PageFetcher,
    {
        let ticket = self.begin_city_load(city_id);
        let result = client.load_stops(city_id).await;
        self.finish_city_load(ticket, result)
    }

    // Selection

    pub fn select_stop(&mut self, stop_id: StopId) -> Result<(), EditorError> {
        self.ensure_in_catalog(stop_id)?;

        let mut selection = self.selection.clone();
        selection.insert(stop_id);
        self.replace_selection(selection);
        Ok(())
    }

    pub fn deselect_stop(&mut self, stop_id: StopId) -> Result<(), EditorError> {
        self.ensure_in_catalog(stop_id)?;

        let mut selection = self.selection.clone();
        selection.remove(stop_id);
        self.replace_selection(selection);
        Ok(())
    }

    /// Returns whether the stop is selected afterwards.
    pub fn toggle_stop(&mut self, stop_id: StopId) -> Result<bool, EditorError> {
        if self.selection.contains(stop_id) {
            self.deselect_stop(stop_id)?;
            Ok(false)
        } else {
            self.select_stop(stop_id)?;
            Ok(true)
        }
    }

    pub fn select_all(&mut self) {
        self.replace_selection(SelectionSet::all_of(&self.catalog));
    }

    /// Either every id is known and the selection becomes exactly these
    /// stops, or nothing changes.
    pub fn select_only<I>(&mut self, stop_ids: I) -> Result<(), EditorError>
    where
        I: IntoIterator<Item = StopId>,
    {
        let selection = stop_ids.into_iter().collect::<SelectionSet>();
        if let Some(unknown) = selection.iter().find(|&id| !self.catalog.contains(id)) {
            return Err(EditorError::UnknownStop(unknown));
        }

        self.replace_selection(selection);
        Ok(())
    }

    fn ensure_in_catalog(&self, stop_id: StopId) -> Result<(), EditorError> {
        if self.catalog.contains(stop_id) {
            Ok(())
        } else {
            Err(EditorError::UnknownStop(stop_id))
        }
    }

    fn replace_selection(&mut self, selection: SelectionSet) {
        let reconciled = editor::reconcile_with_selection(&self.solution, &selection);

        if reconciled != self.solution {
            debug!(
                "Session: removed {} unselected stops from the solution",
                self.solution.stop_ids().count() - reconciled.stop_ids().count()
            );
        }

        self.selection = selection;
        self.solution = reconciled;
    }

    // Solution

    pub fn add_route(&mut self) -> usize {
        self.solution = editor::add_route(&self.solution);
        self.solution.len() - 1
    }

    pub fn remove_route(&mut self, route_index: usize) -> Result<(), EditorError> {
        self.apply(|solution| editor::remove_route(solution, route_index))
    }

    /// Only selected stops can be routed.
    pub fn append_stop(&mut self, route_index: usize, stop_id: StopId) -> Result<(), EditorError> {
        if !self.selection.contains(stop_id) {
            return Err(EditorError::NotSelected(stop_id));
        }

        self.apply(|solution| editor::append_stop(solution, route_index, stop_id))
    }

    pub fn remove_stop(&mut self, route_index: usize, stop_id: StopId) -> Result<(), EditorError> {
        self.apply(|solution| editor::remove_stop(solution, route_index, stop_id))
    }

    pub fn reorder_stop(
        &mut self,
        route_index: usize,
        from_position: usize,
        to_position: usize,
    ) -> Result<(), EditorError> {
        self.apply(|solution| {
            editor::reorder_stop(solution, route_index, from_position, to_position)
        })
    }

    pub fn candidate_stops(&self, route_index: usize) -> Result<Vec<StopId>, EditorError> {
        editor::candidate_stops(&self.solution, route_index, &self.selection, &self.catalog)
    }

    /// Replaces the whole solution, e.g. with routes read from a file. Stops
    /// that are not selected are dropped.
    pub fn set_solution(&mut self, solution: Solution) {
        self.solution = editor::reconcile_with_selection(&solution, &self.selection);
    }

    pub fn clear_solution(&mut self) {
        self.solution = Solution::empty();
    }

    fn apply<E>(&mut self, edit: E) -> Result<(), EditorError>
    where
        E: FnOnce(&Solution) -> Result<Solution, EditorError>,
    {
        match edit(&self.solution) {
            Ok(solution) => {
                self.solution = solution;
                Ok(())
            }
            Err(err) => {
                warn!("Session: rejected edit: {}", err);
                Err(err)
            }
        }
    }

    // Job

    /// Switching to another algorithm discards the solution.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm != self.algorithm {
            self.algorithm = algorithm;
            self.solution = Solution::empty();
        }
    }

    /// Route count used when no initial solution is supplied.
    pub fn set_number_of_routes(&mut self, number_of_routes: u32) -> Result<(), EditorError> {
        if number_of_routes == 0 {
            return Err(EditorError::InvalidRouteCount(number_of_routes));
        }

        self.number_of_routes = number_of_routes;
        Ok(())
    }

    pub fn uses_initial_solution(&self) -> bool {
        self.algorithm.accepts_initial_solution() && self.solution.has_stops()
    }

    /// A solution without stops, or one the algorithm does not take, is not
    /// validated: the solver builds its own.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.uses_initial_solution() {
            return Ok(());
        }

        validator::validate(&self.solution, &self.selection, &self.catalog)
    }

    pub fn build_request(&self) -> Result<OptimizationRequest, SessionError> {
        let city_id = self.city_id().ok_or(EditorError::NoCitySelected)?;
        self.validate()?;

        let uses_initial_solution = self.uses_initial_solution();
        if uses_initial_solution {
            let empty_routes = self.solution.empty_route_indices();
            if !empty_routes.is_empty() {
                // the optimization service may refuse empty routes
                warn!(
                    "Session: initial solution has {} empty routes ({}), they are sent as is",
                    empty_routes.len(),
                    empty_routes
                        .iter()
                        .map(|&route_index| route_label(route_index))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        let number_of_routes = if uses_initial_solution {
            u32::try_from(self.solution.len()).unwrap_or(u32::MAX)
        } else {
            self.number_of_routes
        };

        Ok(OptimizationRequest {
            algorithm: self.algorithm,
            city_id,
            stop_ids: self.selection.ordered(&self.catalog),
            number_of_routes,
            initial_solution: uses_initial_solution.then(|| self.solution.to_wire()),
        })
    }

    /// Validates and submits the job. The solution is discarded once the job
    /// went through; on failure everything is kept so the user can retry.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<OptimizationResponse, SessionError>
    where
        S: JobSubmitter,
    {
        let request = self.build_request()?;
        let response = submitter.submit(&request).await?;
        self.clear_solution();
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_catalog, ids, route_ids};

    fn create_session(stops: &[(u64, bool)]) -> Session {
        let mut session = Session::default();
        let ticket = session.begin_city_load(CityId::new(1));
        let stops = create_catalog(stops).stops().to_vec();
        session.finish_city_load(ticket, Ok(stops)).unwrap();
        session
    }

    #[test]
    fn test_load_selects_all_and_clears_solution() {
        let mut session = create_session(&[(1, true), (2, false), (3, true)]);
        session.add_route();
        session.append_stop(0, StopId::new(1)).unwrap();

        let ticket = session.begin_city_load(CityId::new(2));
        let stops = create_catalog(&[(7, true), (8, true)]).stops().to_vec();
        let outcome = session.finish_city_load(ticket, Ok(stops)).unwrap();

        assert_eq!(outcome, CityLoadOutcome::Loaded { stop_count: 2 });
        assert_eq!(session.city_id(), Some(CityId::new(2)));
        assert_eq!(session.selection().ordered(session.catalog()), ids(&[7, 8]));
        assert!(session.solution().is_empty());
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut session = create_session(&[(1, true), (2, true)]);
        session.add_route();
        session.append_stop(0, StopId::new(2)).unwrap();

        let ticket = session.begin_city_load(CityId::new(2));
        let result = session.finish_city_load(
            ticket,
            Err(CatalogError::Api {
                status: 500,
                message: String::from("boom"),
            }),
        );

        assert!(matches!(result, Err(SessionError::Catalog(_))));
        assert_eq!(session.city_id(), Some(CityId::new(1)));
        assert_eq!(route_ids(session.solution()), vec![vec![2]]);
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let mut session = Session::default();

        let first = session.begin_city_load(CityId::new(1));
        let second = session.begin_city_load(CityId::new(2));

        let stops = create_catalog(&[(5, true)]).stops().to_vec();
        assert_eq!(
            session.finish_city_load(second, Ok(stops)).unwrap(),
            CityLoadOutcome::Loaded { stop_count: 1 }
        );

        let stale = create_catalog(&[(1, true), (2, true)]).stops().to_vec();
        assert_eq!(
            session.finish_city_load(first, Ok(stale)).unwrap(),
            CityLoadOutcome::Superseded
        );
        assert_eq!(session.city_id(), Some(CityId::new(2)));
        assert_eq!(session.catalog().len(), 1);

        // stale failures are dropped as well
        let outcome = session
            .finish_city_load(first, Err(CatalogError::TooManyPages(1)))
            .unwrap();
        assert_eq!(outcome, CityLoadOutcome::Superseded);
    }

    #[test]
    fn test_deselect_reconciles_solution() {
        let mut session = create_session(&[(1, true), (2, false), (3, true)]);
        session.add_route();
        for id in [1, 2, 3] {
            session.append_stop(0, StopId::new(id)).unwrap();
        }

        session.deselect_stop(StopId::new(2)).unwrap();

        assert_eq!(route_ids(session.solution()), vec![vec![1, 3]]);
        assert!(!session.selection().contains(StopId::new(2)));

        // reselecting does not bring the stop back into the route
        assert!(session.toggle_stop(StopId::new(2)).unwrap());
        assert_eq!(route_ids(session.solution()), vec![vec![1, 3]]);
    }

    #[test]
    fn test_select_only_reconciles_solution() {
        let mut session = create_session(&[(1, true), (2, false), (3, true), (4, true)]);
        session.add_route();
        session.add_route();
        for id in [1, 2, 3] {
            session.append_stop(0, StopId::new(id)).unwrap();
        }
        session.append_stop(1, StopId::new(4)).unwrap();

        session.select_only(ids(&[3, 1])).unwrap();

        assert_eq!(session.selection().ordered(session.catalog()), ids(&[1, 3]));
        assert_eq!(route_ids(session.solution()), vec![vec![1, 3], vec![]]);
    }

    #[test]
    fn test_unknown_and_unselected_stops_are_rejected() {
        let mut session = create_session(&[(1, true), (2, true)]);
        session.add_route();

        assert_eq!(
            session.select_stop(StopId::new(9)),
            Err(EditorError::UnknownStop(StopId::new(9)))
        );
        assert_eq!(
            session.select_only(ids(&[1, 9])),
            Err(EditorError::UnknownStop(StopId::new(9)))
        );
        assert_eq!(session.selection().len(), 2);

        session.deselect_stop(StopId::new(2)).unwrap();
        assert_eq!(
            session.append_stop(0, StopId::new(2)),
            Err(EditorError::NotSelected(StopId::new(2)))
        );
    }

    #[test]
    fn test_switching_algorithm_discards_solution() {
        let mut session = create_session(&[(1, true), (2, true)]);
        session.add_route();
        session.append_stop(0, StopId::new(1)).unwrap();

        session.set_algorithm(Algorithm::SimulatedAnnealing);
        assert_eq!(session.solution().len(), 1);

        session.set_algorithm(Algorithm::AntColony);
        assert!(session.solution().is_empty());
    }

    #[test]
    fn test_empty_solution_skips_validation() {
        let mut session = create_session(&[(1, false), (2, false)]);
        session.add_route();
        session.add_route();
        session.set_number_of_routes(4).unwrap();

        assert!(!session.uses_initial_solution());
        let request = session.build_request().unwrap();
        assert_eq!(request.number_of_routes, 4);
        assert_eq!(request.initial_solution, None);
    }

    #[test]
    fn test_request_with_initial_solution() {
        let mut session = create_session(&[(1, true), (2, false), (3, true)]);
        session.add_route();
        session.add_route();
        session.append_stop(0, StopId::new(1)).unwrap();
        session.append_stop(0, StopId::new(2)).unwrap();
        session.append_stop(0, StopId::new(3)).unwrap();
        session.set_number_of_routes(7).unwrap();

        let request = session.build_request().unwrap();

        assert_eq!(request.algorithm, Algorithm::SimulatedAnnealing);
        assert_eq!(request.city_id, CityId::new(1));
        assert_eq!(request.stop_ids, ids(&[1, 2, 3]));
        assert_eq!(request.number_of_routes, 2);
        assert_eq!(request.initial_solution, Some(vec![ids(&[1, 2, 3]), vec![]]));
    }

    #[test]
    fn test_ant_colony_ignores_solution() {
        let mut session = Session::new(Algorithm::AntColony);
        let ticket = session.begin_city_load(CityId::new(1));
        let stops = create_catalog(&[(1, false), (2, false)]).stops().to_vec();
        session.finish_city_load(ticket, Ok(stops)).unwrap();

        session.add_route();
        session.append_stop(0, StopId::new(1)).unwrap();

        assert!(!session.uses_initial_solution());
        assert_eq!(session.validate(), Ok(()));
        assert_eq!(session.build_request().unwrap().initial_solution, None);
    }

    #[test]
    fn test_invalid_solution_blocks_request() {
        let mut session = create_session(&[(1, false), (2, false)]);
        session.add_route();
        session.append_stop(0, StopId::new(1)).unwrap();
        session.append_stop(0, StopId::new(2)).unwrap();

        let result = session.build_request();
        assert!(matches!(
            result,
            Err(SessionError::Validation(
                ValidationError::InvalidRouteEndpoint { route_index: 0 }
            ))
        ));
    }

    #[test]
    fn test_request_requires_city() {
        let session = Session::default();
        assert!(matches!(
            session.build_request(),
            Err(SessionError::Editor(EditorError::NoCitySelected))
        ));
    }

    #[test]
    fn test_route_count_must_be_positive() {
        let mut session = Session::default();
        assert_eq!(
            session.set_number_of_routes(0),
            Err(EditorError::InvalidRouteCount(0))
        );
        assert_eq!(session.number_of_routes(), 1);
    }

    #[test]
    fn test_set_solution_drops_unselected_stops() {
        let mut session = create_session(&[(1, true), (2, false), (3, true)]);
        session.deselect_stop(StopId::new(2)).unwrap();

        session.set_solution(Solution::from(vec![ids(&[1, 2, 3])]));

        assert_eq!(route_ids(session.solution()), vec![vec![1, 3]]);
    }
}
