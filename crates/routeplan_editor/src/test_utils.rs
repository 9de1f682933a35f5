use routeplan_catalog::{
    ids::{CityId, StopId},
    stop::Stop,
    stop_catalog::StopCatalog,
};

use crate::solution::Solution;

pub fn ids(ids: &[u64]) -> Vec<StopId> {
    ids.iter().copied().map(StopId::new).collect()
}

pub fn solution(routes: &[&[u64]]) -> Solution {
    Solution::from(routes.iter().map(|route| ids(route)).collect::<Vec<_>>())
}

pub fn route_ids(solution: &Solution) -> Vec<Vec<u64>> {
    solution
        .iter()
        .map(|route| route.iter().map(|stop_id| stop_id.get()).collect())
        .collect()
}

pub fn create_stop_at(id: u64, latitude: f64, longitude: f64) -> Stop {
    Stop {
        id: StopId::new(id),
        name: format!("Stop {id}"),
        latitude,
        longitude,
        passenger_flow: 0.0,
        is_final_stop: false,
        city: None,
        city_name: None,
    }
}

/// Catalog of `(id, is_final_stop)` pairs, in the given order.
pub fn create_catalog(stops: &[(u64, bool)]) -> StopCatalog {
    StopCatalog::new(
        CityId::new(1),
        stops
            .iter()
            .map(|&(id, is_final_stop)| Stop {
                is_final_stop,
                ..create_stop_at(id, 45.0, 15.0 + id as f64 * 0.01)
            })
            .collect(),
    )
}
