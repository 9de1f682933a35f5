use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ids::CityId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub country: String,
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}, {}", self.name, self.country)
        }
    }
}
