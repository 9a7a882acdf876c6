use std::thread;
use std::time::Duration;

use tracing::{debug, warn};
use ureq::http::{Response, StatusCode};
use ureq::{Agent, Body};

use crate::address::format_hex_address;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::service::{AnalysisService, LabelScope};

const MAX_BACKOFF: Duration = Duration::from_millis(5000);
/// Longest wait honored from a `Retry-After` header
const MAX_RETRY_AFTER: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the analysis server
#[derive(Clone)]
pub struct HttpClient {
    agent: Agent,
    config: ClientConfig,
    user_agent: String,
}

/// Retry bookkeeping for a single request
struct RetryState {
    attempt: u32,
    max_attempts: u32,
    backoff: Duration,
}

impl RetryState {
    fn new(config: &ClientConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_retries,
            backoff: config.initial_backoff,
        }
    }

    fn can_retry(&self) -> bool {
        self.attempt + 1 < self.max_attempts
    }

    fn increment(&mut self) {
        self.attempt += 1;
        self.backoff = (self.backoff * 2).min(MAX_BACKOFF);
    }

    /// Get delay from Retry-After header or use backoff
    fn get_delay(&self, response: &Response<Body>) -> Duration {
        response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|secs| Duration::from_secs(secs).min(MAX_RETRY_AFTER))
            .unwrap_or(self.backoff)
    }
}

/// Check if response requires retry and handle logging/waiting
fn should_retry_response(response: &Response<Body>, state: &mut RetryState) -> bool {
    if !state.can_retry() {
        return false;
    }

    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let delay = state.get_delay(response);
        warn!(
            "Rate limited (attempt {}/{}), retrying in {}ms",
            state.attempt + 1,
            state.max_attempts,
            delay.as_millis()
        );
        thread::sleep(delay);
        state.increment();
        return true;
    }

    if status.is_server_error() {
        warn!(
            "Server error {} (attempt {}/{}), retrying in {}ms",
            status,
            state.attempt + 1,
            state.max_attempts,
            state.backoff.as_millis()
        );
        thread::sleep(state.backoff);
        state.increment();
        return true;
    }

    false
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        let user_agent = format!(
            "gsk/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();
        let agent: Agent = agent_config.into();

        Self {
            agent,
            config,
            user_agent,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url, endpoint)
    }

    /// Execute a request with retry logic, returning the body of a 2xx response
    fn with_retry<F>(&self, request_fn: F) -> Result<Vec<u8>>
    where
        F: Fn() -> std::result::Result<Response<Body>, ureq::Error>,
    {
        let mut state = RetryState::new(&self.config);

        loop {
            match request_fn() {
                Ok(mut response) => {
                    if should_retry_response(&response, &mut state) {
                        continue;
                    }

                    let status = response.status();
                    let body = response.body_mut().read_to_vec()?;
                    debug!("Response {} ({} bytes)", status, body.len());

                    if !status.is_success() {
                        return Err(Error::Http {
                            status: status.as_u16(),
                            message: String::from_utf8_lossy(&body).trim().to_string(),
                        });
                    }
                    return Ok(body);
                }
                Err(e) => {
                    let err = Error::from(e);
                    if !(err.is_retryable() && state.can_retry()) {
                        return Err(err);
                    }
                    warn!(
                        "Connection error (attempt {}/{}): {}, retrying in {}ms",
                        state.attempt + 1,
                        state.max_attempts,
                        err,
                        state.backoff.as_millis()
                    );
                    thread::sleep(state.backoff);
                    state.increment();
                }
            }
        }
    }

    fn get_bytes(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let url = self.url(endpoint);
        debug!("GET {} {:?}", url, query);

        self.with_retry(|| {
            self.agent
                .get(&url)
                .header("User-Agent", &self.user_agent)
                .query_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .call()
        })
    }

    fn get_text(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String> {
        let body = self.get_bytes(endpoint, query)?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn post_form(&self, endpoint: &str, form: &[(&str, String)]) -> Result<String> {
        let url = self.url(endpoint);
        debug!("POST {} {:?}", url, form);

        let body = self.with_retry(|| {
            self.agent
                .post(&url)
                .header("User-Agent", &self.user_agent)
                .send_form(form.iter().map(|(k, v)| (*k, v.as_str())))
        })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn delete(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(endpoint);
        debug!("DELETE {} {:?}", url, query);

        let body = self.with_retry(|| {
            self.agent
                .delete(&url)
                .header("User-Agent", &self.user_agent)
                .query_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .call()
        })?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Query for list endpoints: `limit` plus an optional named filter
fn list_query<'a>(limit: usize, filter: Option<(&'a str, &str)>) -> Vec<(&'a str, String)> {
    let mut query = vec![("limit", limit.to_string())];
    if let Some((key, value)) = filter
        && !value.is_empty()
    {
        query.push((key, value.to_string()));
    }
    query
}

impl AnalysisService for HttpClient {
    fn list_classes(&self, limit: usize) -> Result<String> {
        self.get_text("classes", &list_query(limit, None))
    }

    fn list_exports(&self, filter: Option<&str>, limit: usize) -> Result<String> {
        let filter = filter.map(|f| ("filter", f));
        self.get_text("exports", &list_query(limit, filter))
    }

    fn list_imports(&self, filter: Option<&str>, limit: usize) -> Result<String> {
        let filter = filter.map(|f| ("filter", f));
        self.get_text("imports", &list_query(limit, filter))
    }

    fn list_namespaces(&self, limit: usize) -> Result<String> {
        self.get_text("namespaces", &list_query(limit, None))
    }

    fn list_labels(&self, address: Option<&str>, limit: usize) -> Result<String> {
        let address = address.map(|a| ("address", a));
        self.get_text("labels", &list_query(limit, address))
    }

    fn set_label(&self, address: &str, name: &str, scope: LabelScope) -> Result<String> {
        let form = [
            ("address", address.to_string()),
            ("name", name.to_string()),
            ("scope", scope.to_string()),
        ];
        self.post_form("labels", &form)
    }

    fn delete_label(&self, address: &str, name: &str) -> Result<String> {
        let query = [("address", address.to_string()), ("name", name.to_string())];
        self.delete("labels", &query)
    }

    fn read_memory(&self, address: u64, length: usize) -> Result<Vec<u8>> {
        let query = [
            ("address", format_hex_address(address)),
            ("length", length.to_string()),
        ];
        let mut bytes = self.get_bytes("memory", &query)?;

        if bytes.len() > length {
            debug!(
                "Server returned {} bytes for a {} byte read, truncating",
                bytes.len(),
                length
            );
            bytes.truncate(length);
        } else if bytes.len() < length {
            debug!("Short read: {} of {} bytes", bytes.len(), length);
        }

        Ok(bytes)
    }
}
