use std::time::Duration;

use fxhash::FxHashSet;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::{
    city::City,
    error::CatalogError,
    ids::CityId,
    page::Page,
    stop::Stop,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Transport for a single page of a list endpoint.
pub trait PageFetcher {
    fn fetch_page<T>(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Page<T>, CatalogError>> + Send
    where
        T: DeserializeOwned + Send;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page<T>(&self, url: &str) -> Result<Page<T>, CatalogError>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api { status, message });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub struct CatalogClientParams {
    pub base_url: String,
    pub max_pages: usize,
    pub timeout: Option<Duration>,
}

impl Default for CatalogClientParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            max_pages: DEFAULT_MAX_PAGES,
            timeout: None,
        }
    }
}

pub struct CatalogClient<F = HttpFetcher> {
    params: CatalogClientParams,
    fetcher: F,
}

impl CatalogClient<HttpFetcher> {
    pub fn new(params: CatalogClientParams) -> Result<Self, CatalogError> {
        let fetcher = HttpFetcher::new(params.timeout)?;
        Ok(Self { params, fetcher })
    }
}

impl<F> CatalogClient<F>
where
    F: PageFetcher,
{
    pub fn with_fetcher(params: CatalogClientParams, fetcher: F) -> Self {
        Self { params, fetcher }
    }

    pub fn stops_url(&self, city_id: CityId) -> String {
        format!("{}/stops/?city={}", self.base_url(), city_id)
    }

    pub fn cities_url(&self) -> String {
        format!("{}/cities/", self.base_url())
    }

    fn base_url(&self) -> &str {
        self.params.base_url.trim_end_matches('/')
    }

    /// Every stop of the city, all pages concatenated in server order.
    /// Nothing is returned until the last page has been read.
    #[instrument(skip(self), level = "debug")]
    pub async fn load_stops(&self, city_id: CityId) -> Result<Vec<Stop>, CatalogError> {
        let stops: Vec<Stop> = self.fetch_all(self.stops_url(city_id)).await?;
        info!(%city_id, stops = stops.len(), "Catalog: stops loaded");
        Ok(stops)
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, CatalogError> {
        self.fetch_all(self.cities_url()).await
    }

    async fn fetch_all<T>(&self, first_url: String) -> Result<Vec<T>, CatalogError>
    where
        T: DeserializeOwned + Send,
    {
        // the first page is always fetched
        let max_pages = self.params.max_pages.max(1);

        let mut records = Vec::new();
        let mut visited = FxHashSet::default();
        let mut next_url = Some(first_url);

        while let Some(url) = next_url {
            if visited.len() == max_pages {
                return Err(CatalogError::TooManyPages(max_pages));
            }

            if !visited.insert(url.clone()) {
                return Err(CatalogError::PaginationLoop(url));
            }

            let page: Page<T> = self.fetcher.fetch_page(&url).await?;
            let (results, next) = page.into_parts();

            debug!(
                "Catalog: fetched page {} ({} records) from {}",
                visited.len(),
                results.len(),
                url
            );

            records.extend(results);
            next_url = next;
        }

        Ok(records)
    }
}
