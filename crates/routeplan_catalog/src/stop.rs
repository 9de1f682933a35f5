use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ids::{CityId, StopId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Average number of passengers per day
    #[serde(default)]
    pub passenger_flow: f64,

    /// Whether a route may start or end at this stop
    #[serde(default, deserialize_with = "deserialize_final_stop_flag")]
    pub is_final_stop: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<CityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

impl Stop {
    pub fn label(&self) -> StopLabel<'_> {
        StopLabel(self)
    }
}

pub struct StopLabel<'a>(&'a Stop);

impl Display for StopLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_final_stop {
            write!(f, "{} (Final)", self.0.name)
        } else {
            write!(f, "{} (Not Final)", self.0.name)
        }
    }
}

/// The catalog service has served the final-stop flag as a JSON boolean, as
/// the number `1` and as the strings `"true"` and `"1"`. Every other value,
/// null included, means "not final".
pub fn coerce_final_stop_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        Value::String(text) => {
            let text = text.trim();
            text == "1" || text.eq_ignore_ascii_case("true")
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

fn deserialize_final_stop_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_final_stop_flag(&value))
}
