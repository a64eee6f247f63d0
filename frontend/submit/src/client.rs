use reqwest::{
    Client, Url,
    header::{ACCEPT, CONTENT_TYPE},
};
use tracing::debug;

use crate::{config::Config, error::SubmitError, form::FormInput, models::PredictionResponse};

const JSON: &str = "application/json";

/// Sends one form to the prediction service.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResponse, SubmitError>;
}

/// Talks to the service over HTTP. Works natively and on wasm32, where
/// reqwest goes through the browser's fetch.
pub struct HttpClient {
    client: Client,
    url: Url,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::builder().build()?,
            url: config.prediction_url()?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PredictionClient for HttpClient {
    async fn predict(&self, input: &FormInput) -> Result<PredictionResponse, SubmitError> {
        debug!("POST {} with {} fields", self.url, input.len());

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .json(input)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        PredictionResponse::from_body(&body)
    }
}
