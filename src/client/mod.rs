//! Calls to the BreathScan backend.
//!
//! [`Backend`] is the seam between the view state machines and HTTP. The
//! browser build talks through `gloo-net`, the CLI through `reqwest`.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod http;

use crate::error::Result;
use crate::models::{Credentials, CsvUpload, LoginResponse, MetricsMap, Prediction, ReportRequest};
use crate::state::{Command, Outcome};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserBackend;
#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub use http::HttpBackend;

/// The four endpoints the dashboard depends on.
///
/// Implementations report a non-2xx answer as
/// [`BreathScanError::Status`](crate::BreathScanError::Status) and a request
/// that never got an answer as
/// [`BreathScanError::Transport`](crate::BreathScanError::Transport).
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `POST /api/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// `POST /api/predict` with a multipart body.
    async fn predict(&self, upload: &CsvUpload, model_name: &str) -> Result<Prediction>;

    /// `GET /api/metrics`
    async fn metrics(&self) -> Result<MetricsMap>;

    /// `POST /api/report`; the body is returned untouched.
    async fn report(&self, request: &ReportRequest) -> Result<Vec<u8>>;
}

/// Runs one command against `backend`. One attempt, no retry.
pub async fn execute<B: Backend>(backend: &B, command: Command) -> Outcome {
    match command {
        Command::Login(credentials) => Outcome::LoggedIn(backend.login(&credentials).await),
        Command::Predict { upload, model_name } => {
            Outcome::Predicted(backend.predict(&upload, &model_name).await)
        }
        Command::FetchMetrics => Outcome::MetricsLoaded(backend.metrics().await),
        Command::DownloadReport(request) => Outcome::ReportReady(backend.report(&request).await),
    }
}
