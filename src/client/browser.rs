//! Browser backend client and file helpers for the wasm build.

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, HtmlAnchorElement, Url};

use crate::client::Backend;
use crate::config::ClientConfig;
use crate::error::{BreathScanError, Result};
use crate::models::{
    Credentials, CsvUpload, LoginResponse, MetricsMap, Prediction, ReportRequest, FILE_FIELD,
    LOGIN_PATH, METRICS_PATH, MODEL_FIELD, PREDICT_PATH, REPORT_PATH,
};

const REVOKE_DELAY_MS: u32 = 60_000;

#[derive(Debug, Clone, Default)]
pub struct BrowserBackend {
    config: ClientConfig,
}

impl BrowserBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

fn transport(e: gloo_net::Error) -> BreathScanError {
    BreathScanError::Transport(e.to_string())
}

fn js_error(context: &str, e: JsValue) -> BreathScanError {
    BreathScanError::Browser(format!("{context}: {e:?}"))
}

fn check(resp: Response) -> Result<Response> {
    if !resp.ok() {
        return Err(BreathScanError::Status(resp.status()));
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await.map_err(transport)?;
    Ok(serde_json::from_str(&text)?)
}

fn blob_from_bytes(bytes: &[u8], mime: &str) -> Result<Blob> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(|e| js_error("blob", e))
}

impl Backend for BrowserBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let resp = Request::post(&self.config.endpoint(LOGIN_PATH))
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn predict(&self, upload: &CsvUpload, model_name: &str) -> Result<Prediction> {
        let form = FormData::new().map_err(|e| js_error("form", e))?;
        let blob = blob_from_bytes(&upload.bytes, "text/csv")?;
        form.append_with_blob_and_filename(FILE_FIELD, &blob, &upload.filename)
            .map_err(|e| js_error("form", e))?;
        form.append_with_str(MODEL_FIELD, model_name)
            .map_err(|e| js_error("form", e))?;

        log::debug!("Using API URL: {}", self.config.api_url);
        let resp = Request::post(&self.config.endpoint(PREDICT_PATH))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn metrics(&self) -> Result<MetricsMap> {
        let resp = Request::get(&self.config.endpoint(METRICS_PATH))
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let resp = Request::post(&self.config.endpoint(REPORT_PATH))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check(resp)?.binary().await.map_err(transport)
    }
}

/// Reads a picked file fully into memory.
pub async fn read_file(file: web_sys::File) -> Result<CsvUpload> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_error("file", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(CsvUpload::new(file.name(), bytes))
}

/// Hands `bytes` to the browser as a file download.
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BreathScanError::Browser("document unavailable".to_string()))?;

    let blob = blob_from_bytes(bytes, mime)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error("url", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("anchor", e))?
        .dyn_into()
        .map_err(|_| BreathScanError::Browser("anchor cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| BreathScanError::Browser("missing body".to_string()))?;
    body.append_child(&anchor).map_err(|e| js_error("anchor", e))?;
    anchor.click();
    anchor.remove();
    // The download reads the object URL asynchronously after the click.
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}
