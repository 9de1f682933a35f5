use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::{
    catalog_client::PageFetcher,
    error::CatalogError,
    ids::{CityId, StopId},
    page::Page,
    stop::Stop,
};

pub fn create_stop(id: u64, is_final_stop: bool) -> Stop {
    Stop {
        id: StopId::new(id),
        name: format!("Stop {id}"),
        latitude: 45.0 + id as f64 * 0.001,
        longitude: 15.0,
        passenger_flow: 100.0,
        is_final_stop,
        city: Some(CityId::new(1)),
        city_name: None,
    }
}

/// Serves canned JSON bodies by URL.
#[derive(Default)]
pub struct MockFetcher {
    pub bodies: HashMap<String, String>,
}

impl MockFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_owned(), body.to_owned());
        self
    }
}

impl PageFetcher for MockFetcher {
    async fn fetch_page<T>(&self, url: &str) -> Result<Page<T>, CatalogError>
    where
        T: DeserializeOwned + Send,
    {
        match self.bodies.get(url) {
            Some(body) => Ok(serde_json::from_str(body)?),
            None => Err(CatalogError::Api {
                status: 404,
                message: format!("no page at {url}"),
            }),
        }
    }
}
