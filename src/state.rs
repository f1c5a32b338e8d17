use crate::client::CalculatorClient;
use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: CalculatorClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = CalculatorClient::new(config.api_base.clone(), config.request_timeout)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}
