//! Memoized dashboard slices: readers rerun only when their slice changes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use breathscan::models::{CsvUpload, ModelScores, Prediction};
use breathscan::signals::DashboardSlices;
use breathscan::state::{Dashboard, Outcome, Tab};
use breathscan::MetricsMap;

fn setup() -> (Owner, RwSignal<Dashboard>, DashboardSlices) {
    let owner = Owner::new();
    owner.set();
    let dashboard = RwSignal::new(Dashboard::default());
    let slices = DashboardSlices::new(dashboard);
    (owner, dashboard, slices)
}

/// A memo downstream of `read` that counts its own reruns.
fn counted<T>(read: impl Fn() -> T + Send + Sync + 'static) -> (Memo<T>, Arc<AtomicUsize>)
where
    T: PartialEq + Send + Sync + 'static,
{
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let memo = Memo::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        read()
    });
    (memo, runs)
}

#[test]
fn test_typing_patient_name_does_not_rerun_panel_switch() {
    let (_owner, dashboard, slices) = setup();
    let (panel, runs) = counted(move || slices.active.get());

    assert_eq!(panel.get(), Tab::Analysis);
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    let mut typed = String::new();
    for ch in "Jane".chars() {
        typed.push(ch);
        let name = typed.clone();
        dashboard.update(|d| d.analysis.set_patient_name(name));
        assert_eq!(panel.get(), Tab::Analysis);
    }
    dashboard.update(|d| d.analysis.set_patient_age(61));
    dashboard.update(|d| d.analysis.select_model("SVM"));
    assert_eq!(panel.get(), Tab::Analysis);
    assert_eq!(runs.load(Ordering::SeqCst), 1, "edits must not rebuild the panel");

    dashboard.update(|d| {
        d.select_tab(Tab::Benchmarks);
    });
    assert_eq!(panel.get(), Tab::Benchmarks);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn test_result_slice_ignores_form_edits() {
    let (_owner, dashboard, slices) = setup();
    let (result, runs) = counted(move || slices.prediction.get());
    assert_eq!(result.get(), None);

    dashboard.update(|d| d.analysis.select_file(CsvUpload::new("a.csv", b"x\n1\n".to_vec())));
    dashboard.update(|d| d.analysis.set_patient_name("Jane"));
    assert_eq!(result.get(), None);
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    let prediction = Prediction {
        diagnosis: "Low Risk".to_string(),
        confidence: 0.2,
        model_used: None,
    };
    dashboard.update(|d| {
        d.analysis.submit();
        d.apply(Outcome::Predicted(Ok(prediction.clone())));
    });
    assert_eq!(result.get(), Some(prediction));
    assert_eq!(slices.file_name.get().as_deref(), Some("a.csv"));
}

#[test]
fn test_metrics_slice_follows_each_fetch() {
    let (_owner, dashboard, slices) = setup();
    let first = MetricsMap::from([(
        "XGBoost".to_string(),
        ModelScores {
            accuracy: 0.9,
            f1_score: 0.85,
        },
    )]);
    let retrained = MetricsMap::from([(
        "XGBoost".to_string(),
        ModelScores {
            accuracy: 0.97,
            f1_score: 0.95,
        },
    )]);

    dashboard.update(|d| {
        d.apply(Outcome::MetricsLoaded(Ok(first.clone())));
    });
    assert_eq!(slices.metrics.get(), first);

    dashboard.update(|d| {
        d.apply(Outcome::MetricsLoaded(Ok(retrained.clone())));
    });
    assert_eq!(slices.metrics.get(), retrained);
}
