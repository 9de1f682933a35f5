use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "simulated_annealing")]
    SimulatedAnnealing,

    #[serde(rename = "aco", alias = "ant_colony")]
    AntColony,
}

impl Algorithm {
    /// Only simulated annealing can be seeded with user-composed routes,
    /// ant colony always constructs its own.
    pub fn accepts_initial_solution(&self) -> bool {
        matches!(self, Algorithm::SimulatedAnnealing)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::AntColony => "Ant Colony Optimization",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Algorithm::SimulatedAnnealing => "simulated_annealing",
                Algorithm::AntColony => "aco",
            }
        )
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sa" | "simulated_annealing" => Ok(Algorithm::SimulatedAnnealing),
            "aco" | "ant_colony" => Ok(Algorithm::AntColony),
            other => Err(format!("Unknown algorithm: {other}")),
        }
    }
}
