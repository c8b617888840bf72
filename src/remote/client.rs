//! Blocking HTTP client for the puzzle site

use super::html::{classify_submission, find_username, first_example, SubmitOutcome};
use crate::error::{AocError, AocResult};
use std::time::Duration;
use tracing::debug;
use ureq::http::Response;
use ureq::{Agent, Body};

const USER_AGENT: &str = concat!("aoc/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// Session-authenticated client
///
/// Every call blocks; async callers run it on a blocking thread.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    agent: Agent,
    base: String,
    session: String,
}

impl RemoteClient {
    pub fn new(base: impl Into<String>, session: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(TIMEOUT))
            .build()
            .into();

        Self {
            agent,
            base: base.into().trim_end_matches('/').to_string(),
            session: session.into(),
        }
    }

    /// User name the session belongs to
    pub fn ping(&self, year: u16) -> AocResult<String> {
        let page = self.get(&format!("/{}/settings", year))?;
        find_username(&page)
            .ok_or_else(|| AocError::UnrecognizedResponse("user name not found".to_string()))
    }

    /// Personal puzzle input, surrounding whitespace trimmed
    pub fn input(&self, year: u16, day: u8) -> AocResult<String> {
        let body = self.get(&format!("/{}/day/{}/input", year, day))?;
        Ok(body.trim().to_string())
    }

    /// First example block of the puzzle description
    pub fn example(&self, year: u16, day: u8) -> AocResult<String> {
        let page = self.get(&format!("/{}/day/{}", year, day))?;
        first_example(&page)
            .ok_or_else(|| AocError::UnrecognizedResponse("example not found".to_string()))
    }

    /// Post an answer and classify the reply
    pub fn submit(&self, year: u16, day: u8, part: u8, answer: &str) -> AocResult<SubmitOutcome> {
        let url = self.url(&format!("/{}/day/{}/answer", year, day));
        debug!("POST {}", url);

        let level = part.to_string();
        let response = self
            .agent
            .post(&url)
            .header("Cookie", self.cookie().as_str())
            .header("User-Agent", USER_AGENT)
            .send_form([("level", level.as_str()), ("answer", answer)]);
        let page = read_body(response)?;
        Ok(classify_submission(&page))
    }

    fn get(&self, path: &str) -> AocResult<String> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Cookie", self.cookie().as_str())
            .header("User-Agent", USER_AGENT)
            .call();
        read_body(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn cookie(&self) -> String {
        format!("session={}", self.session)
    }
}

fn read_body(response: Result<Response<Body>, ureq::Error>) -> AocResult<String> {
    let mut response = response.map_err(|e| AocError::Http(e.to_string()))?;
    let status = response.status().as_u16();
    if status != 200 {
        debug!("Server answered {}", status);
        return Err(AocError::Unauthorized);
    }

    response
        .body_mut()
        .read_to_string()
        .map_err(|e| AocError::Http(format!("reading body: {}", e)))
}
