//! Native backend client used by the CLI.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::Backend;
use crate::config::ClientConfig;
use crate::error::{BreathScanError, Result};
use crate::models::{
    Credentials, CsvUpload, LoginResponse, MetricsMap, Prediction, ReportRequest, FILE_FIELD,
    LOGIN_PATH, METRICS_PATH, MODEL_FIELD, PREDICT_PATH, REPORT_PATH,
};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

fn transport(e: reqwest::Error) -> BreathScanError {
    BreathScanError::Transport(e.to_string())
}

fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(BreathScanError::Status(status.as_u16()));
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&text)?)
}

impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = self.config.endpoint(LOGIN_PATH);
        debug!(%url, "login");
        let resp = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn predict(&self, upload: &CsvUpload, model_name: &str) -> Result<Prediction> {
        let url = self.config.endpoint(PREDICT_PATH);
        debug!(%url, file = %upload.filename, model = model_name, "predict");
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str("text/csv")
            .map_err(|e| BreathScanError::Other(e.to_string()))?;
        let form = Form::new()
            .part(FILE_FIELD, part)
            .text(MODEL_FIELD, model_name.to_string());
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn metrics(&self) -> Result<MetricsMap> {
        let url = self.config.endpoint(METRICS_PATH);
        debug!(%url, "metrics");
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let url = self.config.endpoint(REPORT_PATH);
        debug!(%url, patient = %request.patient_name, "report");
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let bytes = check(resp)?.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}
