use routeplan_catalog::ids::{CityId, StopId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptimizationRequest {
    pub algorithm: Algorithm,
    pub city_id: CityId,

    /// Selected stops in catalog order
    pub stop_ids: Vec<StopId>,

    /// At least 1. Equals the number of routes of `initial_solution` when one is attached.
    #[schemars(range(min = 1))]
    pub number_of_routes: u32,

    /// Routes to seed the optimizer with, each an ordered list of stop ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_solution: Option<Vec<Vec<StopId>>>,
}
