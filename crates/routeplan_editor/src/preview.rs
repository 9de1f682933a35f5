use geo::{Distance, Haversine};
use routeplan_catalog::stop_catalog::StopCatalog;

use crate::route::Route;

/// Great-circle length of the polyline through the route's stops, in meters.
/// Stops missing from the catalog are skipped.
pub fn route_length_meters(route: &Route, catalog: &StopCatalog) -> f64 {
    let points = route
        .iter()
        .filter_map(|stop_id| catalog.stop(stop_id))
        .map(|stop| geo::Point::new(stop.longitude, stop.latitude))
        .collect::<Vec<_>>();

    points
        .windows(2)
        .map(|pair| Haversine.distance(pair[0], pair[1]))
        .sum()
}
