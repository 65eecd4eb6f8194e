//! Main backend client with builder pattern.
//!
//! Provides the typed read operations the viewer needs: paged job listings,
//! single-job detail, and the three aggregate reads behind the statistics
//! banner.

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_RANGE};
use reqwest::Method;

use crate::{
    auth::ApiKey,
    content_range::parse_total_count,
    error::{Result, VagaLinkError},
    models::{ErrorDetail, JobDetail, JobPage, JobSummary, SalaryRow},
    query::{self, JobQuery},
    timeouts::VagaLinkTimeouts,
};

/// Media type asking the backend for exactly one object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Client for the job-board backend.
///
/// Use [`VagaLinkClientBuilder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use vaga_link::{JobFilter, JobQuery, VagaLinkClient, DEFAULT_PAGE_SIZE};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VagaLinkClient::builder()
///     .base_url("https://project.example.co")
///     .api_key("anon-key")
///     .build()?;
///
/// let query = JobQuery::build(&JobFilter::default(), 1, DEFAULT_PAGE_SIZE);
/// let page = client.fetch_jobs(&query).await?;
/// println!("{} of {} jobs", page.jobs.len(), page.total);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct VagaLinkClient {
    base_url: String,
    http_client: reqwest::Client,
    api_key: ApiKey,
    max_retries: u32,
    timeouts: VagaLinkTimeouts,
}

impl VagaLinkClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> VagaLinkClientBuilder {
        VagaLinkClientBuilder::new()
    }

    /// The server this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured timeouts
    pub fn timeouts(&self) -> &VagaLinkTimeouts {
        &self.timeouts
    }

    /// Fetch one page of job listings together with the total match count.
    pub async fn fetch_jobs(&self, query: &JobQuery) -> Result<JobPage> {
        let url = format!("{}/rest/v1/jobs", self.base_url);
        debug!(
            "[LINK_JOBS] Fetching page {} (rows {}) filters={}",
            query.page(),
            query.range_header(),
            query.params().len() - 1
        );
        let start = Instant::now();

        let response = self
            .send_with_retry(Method::GET, &url, query.params(), |req| {
                req.header("Range-Unit", "items")
                    .header("Range", query.range_header())
                    .header("Prefer", "count=exact")
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(response).await);
        }

        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_total_count);

        let jobs: Vec<JobSummary> = response.json().await?;
        // The header is authoritative; fall back to the page length only if
        // the server omitted the count.
        let total = total.unwrap_or(jobs.len() as u64);

        debug!(
            "[LINK_JOBS] Success: {} rows, total={} duration_ms={}",
            jobs.len(),
            total,
            start.elapsed().as_millis()
        );
        Ok(JobPage { jobs, total })
    }

    /// Fetch one job with its nested collections.
    ///
    /// Returns [`VagaLinkError::NotFound`] if no job has this identifier.
    pub async fn fetch_job(&self, id: i64) -> Result<JobDetail> {
        let url = format!("{}/rest/v1/jobs", self.base_url);
        let params = query::detail_params(id);
        debug!("[LINK_DETAIL] Fetching job id={}", id);
        let start = Instant::now();

        let response = self
            .send_with_retry(Method::GET, &url, &params, |req| {
                req.header(ACCEPT, SINGLE_OBJECT)
            })
            .await?;

        let status = response.status();
        // Single-object mode reports an empty result as 406; a missing
        // relation comes back as 404. Both mean "no such job" to callers.
        if status.as_u16() == 404 || status.as_u16() == 406 {
            debug!("[LINK_DETAIL] Job id={} not found (status={})", id, status);
            return Err(VagaLinkError::NotFound);
        }
        if !status.is_success() {
            return Err(Self::server_error(response).await);
        }

        let job: JobDetail = response.json().await?;
        debug!(
            "[LINK_DETAIL] Success: id={} duration_ms={}",
            id,
            start.elapsed().as_millis()
        );
        Ok(job)
    }

    /// Total number of job rows.
    pub async fn count_jobs(&self) -> Result<u64> {
        self.count("jobs").await
    }

    /// Total number of company rows.
    pub async fn count_companies(&self) -> Result<u64> {
        self.count("companies").await
    }

    /// All salary rows, for client-side averaging.
    pub async fn fetch_salary_rows(&self) -> Result<Vec<SalaryRow>> {
        let url = format!("{}/rest/v1/job_salaries", self.base_url);
        let params = vec![(
            "select".to_string(),
            "min_salary,max_salary".to_string(),
        )];

        let response = self
            .send_with_retry(Method::GET, &url, &params, |req| req)
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let rows: Vec<SalaryRow> = response.json().await?;
        debug!("[LINK_STATS] Fetched {} salary rows", rows.len());
        Ok(rows)
    }

    /// Row count of a table via a bodyless request with `count=exact`.
    async fn count(&self, table: &str) -> Result<u64> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let params = vec![("select".to_string(), "id".to_string())];

        let response = self
            .send_with_retry(Method::HEAD, &url, &params, |req| {
                req.header("Range-Unit", "items")
                    .header("Range", "0-0")
                    .header("Prefer", "count=exact")
            })
            .await?;

        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }

        let total = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_total_count)
            .ok_or_else(|| {
                VagaLinkError::SerializationError(format!(
                    "count response for '{}' carried no Content-Range total",
                    table
                ))
            })?;

        debug!("[LINK_STATS] count({})={}", table, total);
        Ok(total)
    }

    /// Issue a request, retrying connect/timeout failures with a linear
    /// backoff. Builders cannot be reused once sent, so each attempt
    /// rebuilds the request from scratch.
    async fn send_with_retry<F>(
        &self,
        method: Method,
        url: &str,
        params: &[(String, String)],
        decorate: F,
    ) -> Result<reqwest::Response>
    where
        F: Fn(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    {
        let mut retries = 0;
        loop {
            let req = self.http_client.request(method.clone(), url).query(params);
            let req = self.api_key.apply_to_request(decorate(req));

            match req.send().await {
                Ok(response) => return Ok(response),
                Err(e) if retries < self.max_retries && Self::is_retriable(&e) => {
                    warn!(
                        "[LINK_HTTP] Retriable error (attempt {}/{}): {}",
                        retries + 1,
                        self.max_retries + 1,
                        e
                    );
                    retries += 1;
                    tokio::time::sleep(Duration::from_millis(100 * retries as u64)).await;
                }
                Err(e) => {
                    warn!("[LINK_HTTP] Fatal error: {}", e);
                    return Err(e.into());
                }
            }
        }
    }

    fn is_retriable(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    /// Turn a non-success response into a [`VagaLinkError::ServerError`],
    /// preferring the backend's structured error message when it parses.
    async fn server_error(response: reqwest::Response) -> VagaLinkError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<ErrorDetail>(&body) {
            Ok(detail) => detail.message,
            Err(_) => body,
        };

        warn!(
            "[LINK_HTTP] Server error: status={} message=\"{}\"",
            status, message
        );
        VagaLinkError::ServerError {
            status_code: status.as_u16(),
            message,
        }
    }
}

/// Builder for configuring [`VagaLinkClient`] instances.
pub struct VagaLinkClientBuilder {
    base_url: Option<String>,
    api_key: ApiKey,
    max_retries: u32,
    timeouts: VagaLinkTimeouts,
}

impl VagaLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            api_key: ApiKey::none(),
            max_retries: 3,
            timeouts: VagaLinkTimeouts::default(),
        }
    }

    /// Set the base URL of the backend project (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the project API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::key(key.into());
        self
    }

    /// Set the full timeout configuration
    pub fn timeouts(mut self, timeouts: VagaLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set maximum number of retries for connect/timeout failures
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<VagaLinkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| VagaLinkError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        // Keep-alive pooling: the viewer fires several small requests per
        // user action and the statistics reads land concurrently.
        let http_client = reqwest::Client::builder()
            .timeout(self.timeouts.request_timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| VagaLinkError::ConfigurationError(e.to_string()))?;

        Ok(VagaLinkClient {
            base_url,
            http_client,
            api_key: self.api_key,
            max_retries: self.max_retries,
            timeouts: self.timeouts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let result = VagaLinkClient::builder()
            .base_url("http://localhost:54321")
            .api_key("test_key")
            .max_retries(1)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_missing_url() {
        let result = VagaLinkClient::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = VagaLinkClient::builder()
            .base_url("http://localhost:54321/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:54321");
    }
}
