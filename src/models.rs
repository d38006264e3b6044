//! Wire types exchanged with the BreathScan backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Model selected when the user has not picked one.
pub const DEFAULT_MODEL: &str = "XGBoost";

/// Architectures the backend trains and can serve.
pub const MODEL_CHOICES: [&str; 4] = ["XGBoost", "Random_Forest", "SVM", "Logistic_Regression"];

/// File name used for the downloaded clinical report.
pub const REPORT_FILENAME: &str = "BreathScan_Report.pdf";

/// Identity the shell starts with before anyone logs in.
pub const PLACEHOLDER_USER: &str = "Doctor";

pub const LOGIN_PATH: &str = "/api/login";
pub const PREDICT_PATH: &str = "/api/predict";
pub const METRICS_PATH: &str = "/api/metrics";
pub const REPORT_PATH: &str = "/api/report";

/// Multipart field carrying the CSV payload.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the model selector.
pub const MODEL_FIELD: &str = "model_name";

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Success body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Success body of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub diagnosis: String,
    /// Probability in `[0, 1]`.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}

/// Accuracy and F1 for one trained model, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelScores {
    pub accuracy: f64,
    pub f1_score: f64,
}

/// Body of `GET /api/metrics`: model name -> scores.
pub type MetricsMap = BTreeMap<String, ModelScores>;

/// A CSV file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Patient fields printed on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub name: String,
    pub age: u32,
}

impl Default for PatientDetails {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 45,
        }
    }
}

/// Body of `POST /api/report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub patient_name: String,
    pub age: u32,
    pub risk_score: f64,
    pub prediction: String,
    pub top_features: BTreeMap<String, f64>,
    pub model_name: String,
}

impl ReportRequest {
    /// Builds the report body for `prediction`.
    ///
    /// Feature attributions are not computed client-side; the backend receives
    /// the fixed placeholder attributions.
    pub fn for_prediction(
        prediction: &Prediction,
        patient: &PatientDetails,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient.name.clone(),
            age: patient.age,
            risk_score: prediction.confidence,
            prediction: prediction.diagnosis.clone(),
            top_features: placeholder_features(),
            model_name: model_name.into(),
        }
    }
}

fn placeholder_features() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("Feature A".to_string(), 0.5),
        ("Feature B".to_string(), 0.3),
    ])
}
