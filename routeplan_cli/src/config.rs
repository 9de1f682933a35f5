use std::time::Duration;

use clap::Args;
use routeplan_catalog::catalog_client::{
    CatalogClient, CatalogClientParams, DEFAULT_API_URL, DEFAULT_MAX_PAGES,
};
use routeplan_jobs::optimization_client::{OptimizationClient, OptimizationClientParams};

use crate::parsers;

#[derive(Args)]
pub struct ApiArgs {
    /// Base URL of the transit service API
    #[arg(long, env = "ROUTEPLAN_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Request timeout (e.g., "30s", "5m", "PT1M")
    #[arg(long, value_parser = parsers::parse_timeout, global = true)]
    timeout: Option<Duration>,

    /// Maximum number of catalog pages to follow
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES, value_parser = parsers::parse_max_pages, global = true)]
    max_pages: usize,
}

impl ApiArgs {
    pub fn catalog_client(&self) -> anyhow::Result<CatalogClient> {
        Ok(CatalogClient::new(CatalogClientParams {
            base_url: self.api_url.clone(),
            max_pages: self.max_pages,
            timeout: self.timeout,
        })?)
    }

    pub fn optimization_client(&self) -> anyhow::Result<OptimizationClient> {
        Ok(OptimizationClient::new(OptimizationClientParams {
            base_url: self.api_url.clone(),
            timeout: self.timeout,
        })?)
    }
}
