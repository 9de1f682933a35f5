use fxhash::FxHashMap;
use tracing::warn;

use crate::{
    ids::{CityId, StopId},
    stop::Stop,
};

/// The complete, immutable stop list of one city, in server order.
#[derive(Debug, Clone, Default)]
pub struct StopCatalog {
    city_id: Option<CityId>,
    stops: Vec<Stop>,
    positions: FxHashMap<StopId, usize>,
}

impl StopCatalog {
    pub fn new(city_id: CityId, stops: Vec<Stop>) -> Self {
        let mut unique = Vec::with_capacity(stops.len());
        let mut positions = FxHashMap::default();

        for stop in stops {
            if positions.contains_key(&stop.id) {
                warn!(stop_id = %stop.id, "Catalog: duplicate stop ignored");
                continue;
            }

            positions.insert(stop.id, unique.len());
            unique.push(stop);
        }

        StopCatalog {
            city_id: Some(city_id),
            stops: unique,
            positions,
        }
    }

    pub fn city_id(&self) -> Option<CityId> {
        self.city_id
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, stop_id: StopId) -> Option<&Stop> {
        self.positions
            .get(&stop_id)
            .map(|&position| &self.stops[position])
    }

    pub fn contains(&self, stop_id: StopId) -> bool {
        self.positions.contains_key(&stop_id)
    }

    /// Unknown stops are never final.
    pub fn is_final_stop(&self, stop_id: StopId) -> bool {
        self.stop(stop_id).is_some_and(|stop| stop.is_final_stop)
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = StopId> + '_ {
        self.stops.iter().map(|stop| stop.id)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
