//! View state tests: commands issued and outcomes applied, no network.

use breathscan::models::{CsvUpload, LoginResponse, ModelScores, Prediction, DEFAULT_MODEL};
use breathscan::state::{
    AnalysisStatus, Command, Dashboard, LoginForm, Outcome, Session, Tab, ANALYSIS_FAILED,
    CONNECTION_ERROR, INVALID_CREDENTIALS, REPORT_FAILED,
};
use breathscan::{BreathScanError, MetricsMap};

fn sample_csv() -> CsvUpload {
    CsvUpload::new("sample.csv", b"s1,s2,s3\n0.1,0.2,0.3\n".to_vec())
}

fn high_risk() -> Prediction {
    Prediction {
        diagnosis: "High Risk".to_string(),
        confidence: 0.9342,
        model_used: Some("XGBoost".to_string()),
    }
}

fn metrics_with(names: &[(&str, f64, f64)]) -> MetricsMap {
    names
        .iter()
        .map(|(name, accuracy, f1_score)| {
            (
                name.to_string(),
                ModelScores {
                    accuracy: *accuracy,
                    f1_score: *f1_score,
                },
            )
        })
        .collect()
}

// ─── Session / login ─────────────────────────────────────────────────────────

#[test]
fn test_session_starts_with_placeholder_user() {
    let session = Session::default();
    assert_eq!(session.user(), Some("Doctor"));
    assert!(session.is_signed_in());
}

#[test]
fn test_logout_then_login_replaces_user() {
    let mut session = Session::default();
    session.log_out();
    assert!(!session.is_signed_in());

    session.log_in("doctor");
    assert_eq!(session.user(), Some("doctor"));
}

#[test]
fn test_login_submit_issues_credentials_and_sets_loading() {
    let mut form = LoginForm::default();
    form.username = "doctor".to_string();
    form.password = "doctor123".to_string();

    let command = form.submit().expect("first submit should issue a command");
    match command {
        Command::Login(credentials) => {
            assert_eq!(credentials.username, "doctor");
            assert_eq!(credentials.password, "doctor123");
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert!(form.is_loading());
    assert!(form.submit().is_none(), "second submit while loading is ignored");
}

#[test]
fn test_login_success_hands_back_user() {
    let mut form = LoginForm::default();
    form.submit();
    let user = form.apply(Ok(LoginResponse {
        user: "doctor".to_string(),
        status: Some("success".to_string()),
    }));
    assert_eq!(user.as_deref(), Some("doctor"));
    assert!(!form.is_loading());
    assert_eq!(form.error(), None);
}

#[test]
fn test_login_rejection_shows_invalid_credentials() {
    let mut form = LoginForm::default();
    form.submit();
    assert!(form.apply(Err(BreathScanError::Status(401))).is_none());
    assert_eq!(form.error(), Some(INVALID_CREDENTIALS));
    assert!(!form.is_loading());
}

#[test]
fn test_login_unreachable_shows_connection_error() {
    let mut form = LoginForm::default();
    form.submit();
    let user = form.apply(Err(BreathScanError::Transport("refused".to_string())));
    assert!(user.is_none());
    assert_eq!(form.error(), Some(CONNECTION_ERROR));
}

#[test]
fn test_login_unreadable_success_body_shows_connection_error() {
    let mut form = LoginForm::default();
    form.submit();
    let user = form.apply(Err(BreathScanError::Decode("expected value".to_string())));
    assert!(user.is_none());
    assert_eq!(form.error(), Some(CONNECTION_ERROR));
}

#[test]
fn test_login_resubmit_clears_previous_error() {
    let mut form = LoginForm::default();
    form.submit();
    form.apply(Err(BreathScanError::Status(401)));
    form.submit();
    assert_eq!(form.error(), None);
}

// ─── Analysis ────────────────────────────────────────────────────────────────

#[test]
fn test_analysis_submit_without_file_does_nothing() {
    let mut dashboard = Dashboard::default();
    assert!(!dashboard.analysis.can_submit());
    assert!(dashboard.analysis.submit().is_none());
    assert!(!dashboard.analysis.is_loading());
    assert_eq!(dashboard.analysis.status(), AnalysisStatus::Idle);
}

#[test]
fn test_analysis_submit_uses_selected_model() {
    let mut dashboard = Dashboard::default();
    assert_eq!(dashboard.analysis.model_name(), DEFAULT_MODEL);
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.select_model("SVM");

    match dashboard.analysis.submit() {
        Some(Command::Predict { upload, model_name }) => {
            assert_eq!(upload.filename, "sample.csv");
            assert_eq!(model_name, "SVM");
        }
        other => panic!("unexpected command {other:?}"),
    }
    assert_eq!(dashboard.analysis.status(), AnalysisStatus::Loading);
    assert!(dashboard.analysis.submit().is_none(), "no second request while loading");
}

#[test]
fn test_analysis_failure_then_success_clears_error() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());

    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Err(BreathScanError::Status(500))));
    assert_eq!(dashboard.analysis.error(), Some(ANALYSIS_FAILED));
    assert_eq!(dashboard.analysis.status(), AnalysisStatus::Error);
    assert!(dashboard.analysis.prediction().is_none());

    dashboard.analysis.submit();
    assert_eq!(dashboard.analysis.error(), None, "submit clears the old error");
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));
    assert_eq!(dashboard.analysis.status(), AnalysisStatus::Success);
    assert_eq!(dashboard.analysis.prediction(), Some(&high_risk()));
    assert_eq!(dashboard.analysis.error(), None);
}

#[test]
fn test_new_submit_hides_previous_result() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));

    dashboard.analysis.submit();
    assert!(dashboard.analysis.prediction().is_none());
    assert!(dashboard.analysis.file().is_some(), "file stays selected");
}

#[test]
fn test_selecting_new_file_replaces_old_one() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard
        .analysis
        .select_file(CsvUpload::new("second.csv", b"a\n1\n".to_vec()));
    assert_eq!(dashboard.analysis.file_name(), Some("second.csv"));
}

// ─── Report ──────────────────────────────────────────────────────────────────

#[test]
fn test_report_needs_prediction() {
    let mut dashboard = Dashboard::default();
    assert!(!dashboard.analysis.can_download_report());
    assert!(dashboard.analysis.request_report().is_none());
}

#[test]
fn test_report_request_carries_patient_and_prediction() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.set_patient_name("Jane Roe");
    dashboard.analysis.set_patient_age(61);
    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));

    let Some(Command::DownloadReport(request)) = dashboard.analysis.request_report() else {
        panic!("expected a report command");
    };
    assert_eq!(request.patient_name, "Jane Roe");
    assert_eq!(request.age, 61);
    assert_eq!(request.prediction, "High Risk");
    assert!((request.risk_score - 0.9342).abs() < 1e-12);
    assert_eq!(request.model_name, "XGBoost");
    assert_eq!(request.top_features.len(), 2);
    assert!(dashboard.analysis.is_report_loading());
    assert!(dashboard.analysis.request_report().is_none());
}

#[test]
fn test_report_success_returns_bytes() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));
    dashboard.analysis.request_report();

    let bytes = dashboard.apply(Outcome::ReportReady(Ok(b"%PDF-1.4".to_vec())));
    assert_eq!(bytes.as_deref(), Some(&b"%PDF-1.4"[..]));
    assert!(!dashboard.analysis.is_report_loading());
    assert_eq!(dashboard.analysis.report_error(), None);
}

#[test]
fn test_report_failure_is_visible() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));
    dashboard.analysis.request_report();

    let bytes = dashboard.apply(Outcome::ReportReady(Err(BreathScanError::Status(500))));
    assert!(bytes.is_none());
    assert_eq!(dashboard.analysis.report_error(), Some(REPORT_FAILED));
    assert!(dashboard.analysis.prediction().is_some(), "result stays visible");
}

#[test]
fn test_no_new_prediction_while_report_pending() {
    let mut dashboard = Dashboard::default();
    dashboard.analysis.select_file(sample_csv());
    dashboard.analysis.submit();
    dashboard.apply(Outcome::Predicted(Ok(high_risk())));
    dashboard.analysis.request_report();

    assert!(!dashboard.analysis.can_submit());
    assert!(dashboard.analysis.submit().is_none());
    assert_eq!(dashboard.analysis.prediction(), Some(&high_risk()));

    let bytes = dashboard.apply(Outcome::ReportReady(Ok(b"%PDF-1.4".to_vec())));
    assert!(bytes.is_some(), "report belongs to the prediction still on screen");
    assert!(dashboard.analysis.submit().is_some());
}

// ─── Benchmarks / tabs ───────────────────────────────────────────────────────

#[test]
fn test_default_tab_is_analysis() {
    let dashboard = Dashboard::default();
    assert_eq!(dashboard.active_tab(), Tab::Analysis);
}

#[test]
fn test_static_tabs_issue_no_commands() {
    let mut dashboard = Dashboard::default();
    assert!(dashboard.select_tab(Tab::Models).is_none());
    assert!(dashboard.select_tab(Tab::Pipeline).is_none());
    assert!(dashboard.select_tab(Tab::Analysis).is_none());
    assert_eq!(dashboard.active_tab(), Tab::Analysis);
}

#[test]
fn test_benchmarks_fetches_on_every_selection() {
    let mut dashboard = Dashboard::default();
    assert_eq!(dashboard.select_tab(Tab::Benchmarks), Some(Command::FetchMetrics));
    assert_eq!(dashboard.select_tab(Tab::Benchmarks), Some(Command::FetchMetrics));
    assert_eq!(dashboard.active_tab(), Tab::Benchmarks);
}

#[test]
fn test_metrics_failure_keeps_previous_map() {
    let mut dashboard = Dashboard::default();
    let first = metrics_with(&[("XGBoost", 0.95, 0.9)]);
    dashboard.apply(Outcome::MetricsLoaded(Ok(first.clone())));
    assert_eq!(dashboard.benchmarks.metrics(), &first);

    dashboard.apply(Outcome::MetricsLoaded(Err(BreathScanError::Transport(
        "down".to_string(),
    ))));
    assert_eq!(dashboard.benchmarks.metrics(), &first);

    let second = metrics_with(&[("SVM", 0.8, 0.75), ("Random_Forest", 0.9, 0.88)]);
    dashboard.apply(Outcome::MetricsLoaded(Ok(second.clone())));
    assert_eq!(dashboard.benchmarks.metrics(), &second);
}

#[test]
fn test_tab_ids_and_labels() {
    let ids: Vec<_> = Tab::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(ids, ["predict", "metrics", "models", "training"]);
    let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Analysis", "Benchmarks", "Models", "Pipeline"]);
}
