#![allow(dead_code)]

use std::collections::HashMap;

use parking_lot::Mutex;
use routeplan_catalog::{
    catalog_client::{CatalogClient, CatalogClientParams, PageFetcher},
    error::CatalogError,
    ids::{CityId, StopId},
    page::Page,
    stop::Stop,
    stop_catalog::StopCatalog,
};
use routeplan_editor::{selection::SelectionSet, session::Session, solution::Solution};
use routeplan_jobs::{
    optimization_client::{JobSubmitter, SubmissionError},
    request::OptimizationRequest,
    response::OptimizationResponse,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::oneshot;

pub const BASE_URL: &str = "http://catalog.test/api";

pub fn ids(ids: &[u64]) -> Vec<StopId> {
    ids.iter().copied().map(StopId::new).collect()
}

pub fn selection(stop_ids: &[u64]) -> SelectionSet {
    ids(stop_ids).into_iter().collect()
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

pub fn create_stop(id: u64, is_final_stop: bool) -> Stop {
    Stop {
        id: StopId::new(id),
        name: format!("S{id}"),
        latitude: 45.8,
        longitude: 15.9 + id as f64 * 0.01,
        passenger_flow: 100.0 * id as f64,
        is_final_stop,
        city: None,
        city_name: None,
    }
}

pub fn create_stops(stops: &[(u64, bool)]) -> Vec<Stop> {
    stops
        .iter()
        .map(|&(id, is_final_stop)| create_stop(id, is_final_stop))
        .collect()
}

pub fn create_catalog(stops: &[(u64, bool)]) -> StopCatalog {
    StopCatalog::new(CityId::new(1), create_stops(stops))
}

/// Session with city 1 loaded, every stop selected.
pub fn create_session(stops: &[(u64, bool)]) -> Session {
    let mut session = Session::default();
    let ticket = session.begin_city_load(CityId::new(1));
    session
        .finish_city_load(ticket, Ok(create_stops(stops)))
        .unwrap();
    session
}

pub fn stops_url(city_id: u64) -> String {
    format!("{BASE_URL}/stops/?city={city_id}")
}

/// Single-page JSON body for the given stops, final flag served as a string.
pub fn stops_page(stops: &[(u64, bool)], next: Option<&str>) -> String {
    let results = stops
        .iter()
        .map(|&(id, is_final_stop)| {
            json!({
                "id": id,
                "name": format!("S{id}"),
                "latitude": 45.8,
                "longitude": 15.9,
                "passenger_flow": 10,
                "is_final_stop": if is_final_stop { "true" } else { "false" },
            })
        })
        .collect::<Vec<_>>();

    json!({ "count": results.len(), "next": next, "results": results }).to_string()
}

/// Serves canned bodies by URL. A page can be held back until its gate is
/// released.
#[derive(Default)]
pub struct MockFetcher {
    bodies: HashMap<String, String>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockFetcher {
    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.bodies.insert(url.to_owned(), body);
        self
    }

    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (sender, receiver) = oneshot::channel();
        self.gates.lock().insert(url.to_owned(), receiver);
        sender
    }
}

impl PageFetcher for MockFetcher {
    async fn fetch_page<T>(&self, url: &str) -> Result<Page<T>, CatalogError>
    where
        T: DeserializeOwned + Send,
    {
        let gate = self.gates.lock().remove(url);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let body = self.bodies.get(url).ok_or_else(|| CatalogError::Api {
            status: 404,
            message: url.to_owned(),
        })?;

        Ok(serde_json::from_str(body)?)
    }
}

pub fn create_client(fetcher: MockFetcher) -> CatalogClient<MockFetcher> {
    CatalogClient::with_fetcher(
        CatalogClientParams {
            base_url: BASE_URL.to_owned(),
            ..CatalogClientParams::default()
        },
        fetcher,
    )
}

#[derive(Default)]
pub struct MockSubmitter {
    pub requests: Mutex<Vec<OptimizationRequest>>,
    pub unavailable: bool,
}

impl JobSubmitter for MockSubmitter {
    async fn submit(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, SubmissionError> {
        self.requests.lock().push(request.clone());

        if self.unavailable {
            return Err(SubmissionError::Api {
                status: 503,
                message: String::from("unavailable"),
            });
        }

        Ok(serde_json::from_value(json!({
            "optimized_solution": [[{"id": 1}, {"id": 3}]],
            "initial_solution_used": request.initial_solution.is_some(),
        }))?)
    }
}
