//! Memoized slices of the dashboard signal.
//!
//! The dashboard keeps one `RwSignal<Dashboard>`. A view that reads it
//! directly reruns on every update, including each keystroke in the patient
//! fields. Views read these memos instead, which only notify when their own
//! slice changed.

use leptos::prelude::*;

use crate::models::{MetricsMap, Prediction};
use crate::state::{Dashboard, Tab};

#[derive(Clone, Copy)]
pub struct DashboardSlices {
    pub active: Memo<Tab>,
    pub file_name: Memo<Option<String>>,
    pub prediction: Memo<Option<Prediction>>,
    pub error: Memo<Option<String>>,
    pub report_error: Memo<Option<String>>,
    pub metrics: Memo<MetricsMap>,
}

impl DashboardSlices {
    pub fn new(dashboard: RwSignal<Dashboard>) -> Self {
        Self {
            active: Memo::new(move |_| dashboard.with(|d| d.active_tab())),
            file_name: Memo::new(move |_| {
                dashboard.with(|d| d.analysis.file_name().map(str::to_string))
            }),
            prediction: Memo::new(move |_| dashboard.with(|d| d.analysis.prediction().cloned())),
            error: Memo::new(move |_| dashboard.with(|d| d.analysis.error().map(str::to_string))),
            report_error: Memo::new(move |_| {
                dashboard.with(|d| d.analysis.report_error().map(str::to_string))
            }),
            metrics: Memo::new(move |_| dashboard.with(|d| d.benchmarks.metrics().clone())),
        }
    }
}
