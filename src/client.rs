use crate::calculators::Calculator;
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

pub const FALLBACK_ERROR: &str = "Failed to calculate";
pub const UNREACHABLE_ERROR: &str = "Unable to reach the calculation service";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unable to reach the calculation service")]
    Unreachable(#[source] reqwest::Error),
    #[error("Failed to calculate")]
    Malformed(#[source] serde_json::Error),
}

/// Posts calculator payloads to the upstream calculation service.
#[derive(Debug, Clone)]
pub struct CalculatorClient {
    http: Client,
    base: String,
}

impl CalculatorClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: base.into(),
        })
    }

    pub fn endpoint_url(&self, calc: &Calculator) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), calc.endpoint)
    }

    /// A 2xx JSON body that is not an object counts as an empty result.
    pub async fn submit(
        &self,
        calc: &Calculator,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>, SubmitError> {
        let url = self.endpoint_url(calc);
        debug!(%url, "submitting {} calculation", calc.slug);

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, "upstream unreachable: {err}");
                SubmitError::Unreachable(err)
            })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(SubmitError::Unreachable)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            warn!(%url, status = status.as_u16(), "upstream rejected calculation: {message}");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(body)) => Ok(body),
            Ok(_) => Ok(Map::new()),
            Err(err) => {
                warn!(%url, "upstream returned invalid JSON: {err}");
                Err(SubmitError::Malformed(err))
            }
        }
    }
}

fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
