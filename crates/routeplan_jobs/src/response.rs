use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result payload of an optimization job.
///
/// The payload belongs to the optimization service and is passed through to
/// presentation untouched. The fields below are the ones every algorithm
/// reports; everything else is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_solution: Option<Vec<Vec<Value>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_solution: Option<Vec<Vec<Value>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_solution_metrics: Option<SolutionMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_solution_metrics: Option<SolutionMetrics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_solution_used: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolutionMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_distance: Option<f64>,

    /// minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_time: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_transfers: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_trips_percentage: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptimizationResponse {
    pub fn optimized_routes_count(&self) -> usize {
        self.optimized_solution
            .as_ref()
            .map(|routes| routes.len())
            .unwrap_or(0)
    }
}
