//! Display rules shared by the browser views and the CLI.
//!
//! Nothing here talks to the network; every function is a pure mapping from
//! backend data to what the user sees.

use crate::models::{MetricsMap, ModelScores, DEFAULT_MODEL};

/// Highlight for diagnoses flagged as elevated risk.
pub const HIGH_RISK_COLOR: &str = "#ffc8dd";
/// Highlight for every other diagnosis.
pub const DEFAULT_DIAGNOSIS_COLOR: &str = "#bde0fe";

pub const SKY_BLUE: &str = "#a2d2ff";
pub const BABY_PINK: &str = "#ffafcc";
pub const THISTLE: &str = "#cdb4db";

pub const NO_METRICS_MESSAGE: &str = "No metrics available. Train models first.";

/// A diagnosis is flagged when its label contains `High`.
pub fn is_high_risk(diagnosis: &str) -> bool {
    diagnosis.contains("High")
}

pub fn diagnosis_color(diagnosis: &str) -> &'static str {
    if is_high_risk(diagnosis) {
        HIGH_RISK_COLOR
    } else {
        DEFAULT_DIAGNOSIS_COLOR
    }
}

/// Bar fill for a 0-1 score, in percent, clamped to `[0, 100]`.
///
/// Accuracy and F1 go through the same formula.
pub fn bar_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let pct = (value * 100.0).clamp(0.0, 100.0);
    (pct * 100.0).round() / 100.0
}

/// CSS `width` value for a 0-1 score, e.g. `0.95 -> "95%"`.
pub fn bar_width(value: f64) -> String {
    format!("{}%", bar_percent(value))
}

/// `0.9342 -> "93.42%"`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// `0.95 -> "95.0%"`
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.1}%", accuracy * 100.0)
}

/// `0.9 -> "0.90"`
pub fn format_f1(f1: f64) -> String {
    format!("{f1:.2}")
}

/// Card title for a model key; only the first underscore becomes a space.
pub fn display_model_name(name: &str) -> String {
    name.replacen('_', " ", 1)
}

/// One metrics card, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    /// Model key as sent by the backend.
    pub model: String,
    pub title: String,
    pub accuracy_label: String,
    pub accuracy_width: String,
    pub f1_label: String,
    pub f1_width: String,
}

impl MetricCard {
    pub fn new(model: &str, scores: &ModelScores) -> Self {
        Self {
            model: model.to_string(),
            title: display_model_name(model),
            accuracy_label: format_accuracy(scores.accuracy),
            accuracy_width: bar_width(scores.accuracy),
            f1_label: format_f1(scores.f1_score),
            f1_width: bar_width(scores.f1_score),
        }
    }
}

/// One card per metrics entry. Empty input yields no cards; the caller shows
/// [`NO_METRICS_MESSAGE`] instead.
pub fn metric_cards(metrics: &MetricsMap) -> Vec<MetricCard> {
    metrics
        .iter()
        .map(|(model, scores)| MetricCard::new(model, scores))
        .collect()
}

/// The model to headline on the benchmarks panel: the default model when it
/// was trained, otherwise the first one listed.
pub fn champion(metrics: &MetricsMap) -> Option<(&str, &ModelScores)> {
    metrics
        .get_key_value(DEFAULT_MODEL)
        .or_else(|| metrics.iter().next())
        .map(|(name, scores)| (name.as_str(), scores))
}

/// Static copy for the Models panel: (title, subtitle, description, accent).
pub const MODEL_DESCRIPTIONS: [(&str, &str, &str, &str); 3] = [
    (
        "XGBoost",
        "Extreme Gradient Boosting",
        "An optimized distributed gradient boosting library designed to be highly efficient, \
         flexible and portable. In BreathScan, it excels at handling tabular sensor data and \
         capturing non-linear relationships between breath biomarkers and disease states.",
        SKY_BLUE,
    ),
    (
        "Random Forest",
        "Ensemble Learning",
        "A meta estimator that fits a number of decision tree classifiers on various \
         sub-samples of the dataset and uses averaging to improve the predictive accuracy and \
         control over-fitting. It provides excellent robustness against noise in the breath \
         sensor readings.",
        BABY_PINK,
    ),
    (
        "SVM",
        "Support Vector Machine",
        "Supervised learning models with associated learning algorithms that analyze data for \
         classification and regression analysis. It works by finding the hyperplane that best \
         separates the cancer and control classes in the high-dimensional feature space.",
        THISTLE,
    ),
];

/// One step of the training pipeline explainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    pub number: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static [&'static str],
    pub accent: &'static str,
}

pub const PIPELINE_STEPS: [PipelineStep; 3] = [
    PipelineStep {
        number: 1,
        title: "Data Ingestion",
        subtitle: "Raw Sensor Data Collection",
        details: &[
            "Missing value imputation (Median)",
            "StandardScaler normalization",
            "Label Encoding (Cancer/Control)",
        ],
        accent: SKY_BLUE,
    },
    PipelineStep {
        number: 2,
        title: "Feature Selection",
        subtitle: "Dimensionality Reduction",
        details: &[
            "Mutual Information (SelectKBest) identifies the top 200 most predictive biomarkers, \
             reducing noise and dimensionality.",
        ],
        accent: BABY_PINK,
    },
    PipelineStep {
        number: 3,
        title: "Multi-Model Training",
        subtitle: "Ensemble Learning",
        details: &[
            "Training of XGBoost, Random Forest, and SVM classifiers with hyperparameter tuning \
             for optimal performance.",
        ],
        accent: THISTLE,
    },
];
