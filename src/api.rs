use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

use crate::mock;
use crate::models::{DataSource, Job, JobSearchResponse};

const DEFAULT_API_URL: &str = "https://jsearch.p.rapidapi.com";
const API_HOST: &str = "jsearch.p.rapidapi.com";
const API_KEY_VAR: &str = "JOBSCOUT_API_KEY";
const API_URL_VAR: &str = "JOBSCOUT_API_URL";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The job-details endpoint wraps its result in the same envelope as search
/// but echoes different parameters, so only the data array is read.
#[derive(Debug, Deserialize)]
struct JobDetailsResponse {
    #[serde(default)]
    data: Vec<Job>,
}

/// Sole boundary to the remote job-search provider. Every operation resolves
/// to usable data: when the provider is unreachable, rejects the request, or
/// no API key is configured, canned results stand in and the caller sees the
/// same shapes as on success. Failures are logged, never returned.
pub struct JobApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

impl JobApiClient {
    /// Build a client from the environment. A missing API key is not an
    /// error; the client simply serves canned results for every call.
    pub fn new() -> Result<Self> {
        let base_url = env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_config(base_url, env::var(API_KEY_VAR).ok())
    }

    /// A blank or whitespace key counts as no key at all, so a placeholder
    /// value in the environment lands on the fallback path rather than an
    /// auth rejection per call.
    pub fn with_config(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Search postings matching `query` on a 1-based `page`. One request page
    /// per call; there is no multi-page aggregation.
    pub fn search_jobs(&self, query: &str, page: u32) -> JobSearchResponse {
        match self.fetch_search(query, page) {
            Ok(mut response) => {
                debug!(
                    "search '{}' page {} returned {} jobs",
                    query,
                    page,
                    response.data.len()
                );
                response.source = DataSource::Upstream;
                response
            }
            Err(e) => {
                warn!("job search unavailable, substituting canned results: {:#}", e);
                mock::search_response(query, page)
            }
        }
    }

    /// Fetch a single posting by id, or `None` when the provider has nothing
    /// for it. Under fallback only the canned ids ("1", "2", "3") resolve, so
    /// postings liked from the real provider drop out of view during an
    /// outage instead of erroring.
    pub fn get_job_details(&self, job_id: &str) -> Option<Job> {
        match self.fetch_details(job_id) {
            Ok(job) => job,
            Err(e) => {
                warn!("job details unavailable, checking canned results: {:#}", e);
                mock::search_response("software", 1)
                    .data
                    .into_iter()
                    .find(|job| job.job_id == job_id)
            }
        }
    }

    /// Hydrate a liked-id list back into postings. Ids the provider no longer
    /// returns are dropped without affecting the rest.
    pub fn fetch_liked_jobs(&self, ids: &[String]) -> Vec<Job> {
        ids.iter()
            .filter_map(|id| self.get_job_details(id))
            .collect()
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured. Set {} to search real postings.",
                API_KEY_VAR
            )
        })
    }

    fn fetch_search(&self, query: &str, page: u32) -> Result<JobSearchResponse> {
        let api_key = self.api_key()?;
        let url = format!("{}/search", self.base_url);
        let page = page.to_string();

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", API_HOST)
            .query(&[
                ("query", query),
                ("page", page.as_str()),
                ("num_pages", "1"),
            ])
            .send()
            .context("Failed to reach job search provider")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            bail!("Search request failed with status {}: {}", status, error_text);
        }

        response
            .json()
            .context("Failed to parse search response")
    }

    fn fetch_details(&self, job_id: &str) -> Result<Option<Job>> {
        let api_key = self.api_key()?;
        let url = format!("{}/job-details", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", API_HOST)
            .query(&[("job_id", job_id)])
            .send()
            .context("Failed to reach job search provider")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            bail!(
                "Job details request failed with status {}: {}",
                status,
                error_text
            );
        }

        let details: JobDetailsResponse = response
            .json()
            .context("Failed to parse job details response")?;

        Ok(details.data.into_iter().next())
    }
}
