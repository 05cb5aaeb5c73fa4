//! HTTP-Implementierungen der Dienst-Traits (ureq, blockierend).

use super::{LineComputation, PlaceLookup};
use crate::core::{LineRequest, LineResponse, PlaceCandidate, ServiceError};
use crate::shared::AppOptions;

/// POST-Client für den Linien-Endpoint.
pub struct HttpLineClient {
    agent: ureq::Agent,
    url: String,
}

impl HttpLineClient {
    pub fn new(url: impl Into<String>, user_agent: &str) -> Self {
        Self {
            agent: build_agent(user_agent),
            url: url.into(),
        }
    }

    /// Client mit Endpoint und User-Agent aus den Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        Self::new(options.line_api_url.clone(), &options.user_agent)
    }
}

impl LineComputation for HttpLineClient {
    fn compute_lines(&self, request: &LineRequest) -> Result<LineResponse, ServiceError> {
        log::debug!("POST {} ({})", self.url, request.datetime);
        let response = self
            .agent
            .post(&self.url)
            .send_json(request)
            .map_err(map_ureq_error)?;
        let body = response
            .into_string()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        LineResponse::from_json(&body)
    }
}

/// GET-Client für einen Nominatim-kompatiblen Geocoder.
pub struct NominatimClient {
    agent: ureq::Agent,
    url: String,
}

impl NominatimClient {
    pub fn new(url: impl Into<String>, user_agent: &str) -> Self {
        Self {
            agent: build_agent(user_agent),
            url: url.into(),
        }
    }

    /// Client mit Endpoint und User-Agent aus den Optionen.
    pub fn from_options(options: &AppOptions) -> Self {
        Self::new(options.geocoder_url.clone(), &options.user_agent)
    }
}

impl PlaceLookup for NominatimClient {
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, ServiceError> {
        log::debug!("GET {} q={}", self.url, query);
        let response = self
            .agent
            .get(&self.url)
            .query("format", "json")
            .query("q", query)
            .call()
            .map_err(map_ureq_error)?;
        let body = response
            .into_string()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        PlaceCandidate::list_from_json(&body)
    }
}

fn build_agent(user_agent: &str) -> ureq::Agent {
    ureq::AgentBuilder::new().user_agent(user_agent).build()
}

fn map_ureq_error(err: ureq::Error) -> ServiceError {
    match err {
        ureq::Error::Status(status, response) => ServiceError::Status {
            status,
            reason: response.status_text().to_string(),
        },
        ureq::Error::Transport(transport) => ServiceError::Transport(transport.to_string()),
    }
}
