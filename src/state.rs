//! View state for the shell, the login card and the dashboard panels.
//!
//! Each view owns one of these structs and is its only writer. Methods that
//! need the network do not perform I/O: they update the state and hand back a
//! [`Command`]. Whoever runs the command (the browser app, the CLI, a test)
//! feeds the resulting [`Outcome`] back through `apply`.

use log::{debug, warn};

use crate::error::Result;
use crate::models::{
    Credentials, CsvUpload, LoginResponse, MetricsMap, PatientDetails, Prediction, ReportRequest,
    DEFAULT_MODEL, PLACEHOLDER_USER,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const CONNECTION_ERROR: &str = "Connection error";
pub const ANALYSIS_FAILED: &str =
    "Analysis failed. Please check your connection and try again. Ensure the backend is running.";
pub const REPORT_FAILED: &str = "Report generation failed. Please try again.";

/// A network call requested by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(Credentials),
    Predict {
        upload: CsvUpload,
        model_name: String,
    },
    FetchMetrics,
    DownloadReport(ReportRequest),
}

/// The completed network call for a [`Command`].
#[derive(Debug)]
pub enum Outcome {
    LoggedIn(Result<LoginResponse>),
    Predicted(Result<Prediction>),
    MetricsLoaded(Result<MetricsMap>),
    ReportReady(Result<Vec<u8>>),
}

// ─── Shell ───────────────────────────────────────────────────────────────────

/// The shell's only state: who is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self { user: None }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn log_in(&mut self, user: impl Into<String>) {
        self.user = Some(user.into());
    }

    pub fn log_out(&mut self) {
        self.user = None;
    }
}

impl Default for Session {
    /// Starts with the placeholder identity; there is no access gate.
    fn default() -> Self {
        Self {
            user: Some(PLACEHOLDER_USER.to_string()),
        }
    }
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    loading: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a login attempt. Ignored while one is already in flight.
    pub fn submit(&mut self) -> Option<Command> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(Command::Login(Credentials::new(
            self.username.clone(),
            self.password.clone(),
        )))
    }

    /// Finishes the attempt. Returns the identity to hand to the shell on success.
    pub fn apply(&mut self, result: Result<LoginResponse>) -> Option<String> {
        self.loading = false;
        let e = match result {
            Ok(resp) => return Some(resp.user),
            Err(e) => e,
        };
        // Any answer from the backend is a rejection; anything else, including
        // an unreadable success body, is a connection problem.
        let message = match e.status() {
            Some(code) => {
                debug!("login rejected with status {code}");
                INVALID_CREDENTIALS
            }
            None => {
                debug!("login failed: {e}");
                CONNECTION_ERROR
            }
        };
        self.error = Some(message.to_string());
        None
    }
}

// ─── Analysis ────────────────────────────────────────────────────────────────

/// Where the current prediction cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPanel {
    file: Option<CsvUpload>,
    model_name: String,
    patient: PatientDetails,
    loading: bool,
    prediction: Option<Prediction>,
    error: Option<String>,
    report_loading: bool,
    report_error: Option<String>,
}

impl Default for AnalysisPanel {
    fn default() -> Self {
        Self {
            file: None,
            model_name: DEFAULT_MODEL.to_string(),
            patient: PatientDetails::default(),
            loading: false,
            prediction: None,
            error: None,
            report_loading: false,
            report_error: None,
        }
    }
}

impl AnalysisPanel {
    pub fn file(&self) -> Option<&CsvUpload> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.filename.as_str())
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn patient(&self) -> &PatientDetails {
        &self.patient
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report_error(&self) -> Option<&str> {
        self.report_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_report_loading(&self) -> bool {
        self.report_loading
    }

    pub fn status(&self) -> AnalysisStatus {
        if self.loading {
            AnalysisStatus::Loading
        } else if self.prediction.is_some() {
            AnalysisStatus::Success
        } else if self.error.is_some() {
            AnalysisStatus::Error
        } else {
            AnalysisStatus::Idle
        }
    }

    /// Replaces the selected file.
    pub fn select_file(&mut self, upload: CsvUpload) {
        self.file = Some(upload);
    }

    pub fn select_model(&mut self, model_name: impl Into<String>) {
        self.model_name = model_name.into();
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        self.patient.name = name.into();
    }

    pub fn set_patient_age(&mut self, age: u32) {
        self.patient.age = age;
    }

    /// False while a report is generating: report bytes always belong to the
    /// prediction on screen.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.loading && !self.report_loading
    }

    /// Starts a prediction for the selected file.
    ///
    /// Without a file, or while a prediction or report is running, nothing
    /// happens and no command is issued.
    pub fn submit(&mut self) -> Option<Command> {
        if !self.can_submit() {
            return None;
        }
        let upload = self.file.clone()?;
        self.loading = true;
        self.error = None;
        self.prediction = None;
        self.report_error = None;
        Some(Command::Predict {
            upload,
            model_name: self.model_name.clone(),
        })
    }

    pub fn apply_prediction(&mut self, result: Result<Prediction>) {
        self.loading = false;
        match result {
            Ok(prediction) => {
                self.prediction = Some(prediction);
                self.error = None;
            }
            Err(e) => {
                warn!("Prediction failed: {e}");
                self.prediction = None;
                self.error = Some(ANALYSIS_FAILED.to_string());
            }
        }
    }

    pub fn can_download_report(&self) -> bool {
        self.prediction.is_some() && !self.report_loading
    }

    /// Asks for the PDF report of the current prediction.
    pub fn request_report(&mut self) -> Option<Command> {
        if !self.can_download_report() {
            return None;
        }
        let prediction = self.prediction.as_ref()?;
        let request = ReportRequest::for_prediction(prediction, &self.patient, &self.model_name);
        self.report_loading = true;
        self.report_error = None;
        Some(Command::DownloadReport(request))
    }

    /// Finishes a report request. Returns the PDF bytes to save on success.
    pub fn apply_report(&mut self, result: Result<Vec<u8>>) -> Option<Vec<u8>> {
        self.report_loading = false;
        match result {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Download failed: {e}");
                self.report_error = Some(REPORT_FAILED.to_string());
                None
            }
        }
    }
}

// ─── Benchmarks ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarksPanel {
    metrics: MetricsMap,
}

impl BenchmarksPanel {
    pub fn metrics(&self) -> &MetricsMap {
        &self.metrics
    }

    /// Called every time the panel is shown; there is no cache.
    pub fn activate(&mut self) -> Command {
        Command::FetchMetrics
    }

    /// Replaces the mapping on success; keeps the previous one on failure.
    pub fn apply(&mut self, result: Result<MetricsMap>) {
        match result {
            Ok(metrics) => self.metrics = metrics,
            Err(e) => warn!("Failed to load metrics: {e}"),
        }
    }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Analysis,
    Benchmarks,
    Models,
    Pipeline,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Analysis, Tab::Benchmarks, Tab::Models, Tab::Pipeline];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Analysis => "predict",
            Tab::Benchmarks => "metrics",
            Tab::Models => "models",
            Tab::Pipeline => "training",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Analysis => "Analysis",
            Tab::Benchmarks => "Benchmarks",
            Tab::Models => "Models",
            Tab::Pipeline => "Pipeline",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    active: Tab,
    pub analysis: AnalysisPanel,
    pub benchmarks: BenchmarksPanel,
}

impl Dashboard {
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    /// Switches panels. Selecting Benchmarks always asks for fresh metrics.
    pub fn select_tab(&mut self, tab: Tab) -> Option<Command> {
        self.active = tab;
        match tab {
            Tab::Benchmarks => Some(self.benchmarks.activate()),
            _ => None,
        }
    }

    /// Routes a finished call to the panel that issued it. Returns report
    /// bytes when a download completed.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Vec<u8>> {
        match outcome {
            Outcome::Predicted(result) => {
                self.analysis.apply_prediction(result);
                None
            }
            Outcome::MetricsLoaded(result) => {
                self.benchmarks.apply(result);
                None
            }
            Outcome::ReportReady(result) => self.analysis.apply_report(result),
            Outcome::LoggedIn(_) => {
                debug!("dashboard ignoring login outcome");
                None
            }
        }
    }
}
