use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::{request::OptimizationRequest, response::OptimizationResponse};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Dispatches one optimization job and waits for its result.
pub trait JobSubmitter {
    fn submit(
        &self,
        request: &OptimizationRequest,
    ) -> impl Future<Output = Result<OptimizationResponse, SubmissionError>> + Send;
}

pub struct OptimizationClientParams {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for OptimizationClientParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout: None,
        }
    }
}

pub struct OptimizationClient {
    params: OptimizationClientParams,
    client: reqwest::Client,
}

impl OptimizationClient {
    pub fn new(params: OptimizationClientParams) -> Result<Self, SubmissionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            params,
        })
    }

    pub fn optimize_url(&self) -> String {
        format!("{}/optimize/", self.params.base_url.trim_end_matches('/'))
    }
}

impl JobSubmitter for OptimizationClient {
    async fn submit(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, SubmissionError> {
        info!(
            algorithm = %request.algorithm,
            city_id = %request.city_id,
            stops = request.stop_ids.len(),
            routes = request.number_of_routes,
            initial_solution = request.initial_solution.is_some(),
            "Optimization: submitting job"
        );

        let response = self
            .client
            .post(self.optimize_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Optimization: response status {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
