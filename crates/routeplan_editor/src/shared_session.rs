use std::sync::Arc;

use parking_lot::Mutex;
use routeplan_catalog::{
    catalog_client::{CatalogClient, PageFetcher},
    ids::CityId,
};
use routeplan_jobs::{optimization_client::JobSubmitter, response::OptimizationResponse};

use crate::{
    error::SessionError,
    session::{CityLoadOutcome, Session},
};

/// A [`Session`] that can be driven from several tasks.
///
/// All edits go through one lock, so a selection change and the
/// reconciliation it triggers are observed together. Network calls run
/// without holding the lock; a catalog load that got superseded while its
/// pages were in flight is dropped when it completes.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub async fn load_city<F>(
        &self,
        client: &CatalogClient<F>,
        city_id: CityId,
    ) -> Result<CityLoadOutcome, SessionError>
    where
        F: PageFetcher,
    {
        let ticket = self.inner.lock().begin_city_load(city_id);
        let result = client.load_stops(city_id).await;
        self.inner.lock().finish_city_load(ticket, result)
    }

    pub async fn submit<S>(&self, submitter: &S) -> Result<OptimizationResponse, SessionError>
    where
        S: JobSubmitter,
    {
        let request = self.inner.lock().build_request()?;
        let response = submitter.submit(&request).await?;
        self.inner.lock().clear_solution();
        Ok(response)
    }
}
