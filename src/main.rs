//! breathscan CLI: host the dashboard and drive the BreathScan backend from a terminal.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::info;
use tracing_subscriber::EnvFilter;

use breathscan::client::{execute, HttpBackend};
use breathscan::config::{ClientConfig, FileConfig, API_URL_ENV};
use breathscan::models::{CsvUpload, Prediction, MODEL_CHOICES, REPORT_FILENAME};
use breathscan::presentation::{
    champion, display_model_name, format_accuracy, format_confidence, format_f1, is_high_risk,
    NO_METRICS_MESSAGE,
};
use breathscan::state::{Dashboard, LoginForm, Outcome, Session, Tab};

#[derive(Parser)]
#[command(
    name = "breathscan",
    about = "🫁 BreathScan AI: clinical triage dashboard and backend client",
    version
)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,
    /// Optional YAML settings file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Host the compiled web dashboard
    #[cfg(feature = "server")]
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(long, short, default_value_t = 8080)]
        port: u16,
    },
    /// Sign in and print the identity the backend returns
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short)]
        password: String,
    },
    /// Run a diagnosis on a breath sensor CSV
    Predict {
        /// CSV file with the sensor readings
        file: PathBuf,
        /// Model architecture
        #[arg(long, short, value_parser = MODEL_CHOICES)]
        model: Option<String>,
    },
    /// Show model benchmarks
    Metrics,
    /// Run a diagnosis and download the clinical PDF report
    Report {
        /// CSV file with the sensor readings
        file: PathBuf,
        /// Model architecture
        #[arg(long, short, value_parser = MODEL_CHOICES)]
        model: Option<String>,
        #[arg(long)]
        patient_name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        /// Output file
        #[arg(long, short, default_value = REPORT_FILENAME)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => FileConfig::default(),
    };
    let client_config = match cli.api_url.clone().or_else(|| file_config.api_url.clone()) {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_build_env(),
    };
    let backend = HttpBackend::new(client_config);

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { host, port } => {
            cmd_serve(host, port).await?;
        }
        Commands::Login { username, password } => {
            cmd_login(&backend, username, password).await?;
        }
        Commands::Predict { file, model } => {
            let model = model.unwrap_or_else(|| file_config.model_name().to_string());
            cmd_predict(&backend, &file, model).await?;
        }
        Commands::Metrics => {
            cmd_metrics(&backend).await?;
        }
        Commands::Report {
            file,
            model,
            patient_name,
            age,
            output,
        } => {
            let model = model.unwrap_or_else(|| file_config.model_name().to_string());
            let mut patient = file_config.patient();
            if let Some(name) = patient_name {
                patient.name = name;
            }
            if let Some(age) = age {
                patient.age = age;
            }
            cmd_report(&backend, &file, model, patient, &output).await?;
        }
    }

    Ok(())
}

// ─── Command implementations ──────────────────────────────────────────────────

#[cfg(feature = "server")]
async fn cmd_serve(host: String, port: u16) -> Result<()> {
    println!("🫁 BreathScan Dashboard");
    println!("   URL: http://{}:{}", host, port);
    println!();

    breathscan::server::serve(breathscan::server::ServerConfig { host, port }).await
}

async fn cmd_login(backend: &HttpBackend, username: String, password: String) -> Result<()> {
    let mut session = Session::signed_out();
    let mut form = LoginForm::default();
    form.username = username;
    form.password = password;

    if let Some(command) = form.submit() {
        if let Outcome::LoggedIn(result) = execute(backend, command).await {
            if let Some(user) = form.apply(result) {
                session.log_in(user);
            }
        }
    }

    match session.user() {
        Some(user) => {
            println!("Signed in as {}", user);
            Ok(())
        }
        None => bail!("{}", form.error().unwrap_or("Login failed")),
    }
}

async fn load_csv(path: &Path) -> Result<CsvUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.csv")
        .to_string();
    Ok(CsvUpload::new(filename, bytes))
}

/// One Analysis cycle: select, submit, apply.
async fn run_analysis(
    backend: &HttpBackend,
    dashboard: &mut Dashboard,
    upload: CsvUpload,
    model: String,
) -> Result<Prediction> {
    dashboard.analysis.select_file(upload);
    dashboard.analysis.select_model(model);
    let command = dashboard
        .analysis
        .submit()
        .context("no file selected for analysis")?;
    info!(model = dashboard.analysis.model_name(), "running inference");
    dashboard.apply(execute(backend, command).await);

    match dashboard.analysis.prediction() {
        Some(prediction) => Ok(prediction.clone()),
        None => bail!(
            "{}",
            dashboard.analysis.error().unwrap_or("Analysis failed")
        ),
    }
}

fn print_prediction(prediction: &Prediction) {
    let flag = if is_high_risk(&prediction.diagnosis) {
        "  ⚠ elevated risk"
    } else {
        ""
    };
    println!("Diagnosis:        {}{}", prediction.diagnosis, flag);
    println!("Confidence Score: {}", format_confidence(prediction.confidence));
    if let Some(model) = &prediction.model_used {
        println!("Model:            {}", display_model_name(model));
    }
}

async fn cmd_predict(backend: &HttpBackend, file: &Path, model: String) -> Result<()> {
    let upload = load_csv(file).await?;
    let mut dashboard = Dashboard::default();
    let prediction = run_analysis(backend, &mut dashboard, upload, model).await?;
    print_prediction(&prediction);
    Ok(())
}

async fn cmd_metrics(backend: &HttpBackend) -> Result<()> {
    let mut dashboard = Dashboard::default();
    if let Some(command) = dashboard.select_tab(Tab::Benchmarks) {
        dashboard.apply(execute(backend, command).await);
    }

    let metrics = dashboard.benchmarks.metrics();
    if metrics.is_empty() {
        println!("{}", NO_METRICS_MESSAGE);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Model", "Accuracy", "F1 Score"]);
    for (model, scores) in metrics {
        table.add_row([
            display_model_name(model),
            format_accuracy(scores.accuracy),
            format_f1(scores.f1_score),
        ]);
    }
    println!("Model Performance Benchmarks");
    println!("{}", table);

    if let Some((name, scores)) = champion(metrics) {
        println!(
            "Champion: {} ({} accuracy, F1 {})",
            display_model_name(name),
            format_accuracy(scores.accuracy),
            format_f1(scores.f1_score)
        );
    }
    Ok(())
}

async fn cmd_report(
    backend: &HttpBackend,
    file: &Path,
    model: String,
    patient: breathscan::models::PatientDetails,
    output: &Path,
) -> Result<()> {
    let upload = load_csv(file).await?;
    let mut dashboard = Dashboard::default();
    dashboard.analysis.set_patient_name(patient.name);
    dashboard.analysis.set_patient_age(patient.age);

    let prediction = run_analysis(backend, &mut dashboard, upload, model).await?;
    print_prediction(&prediction);

    let command = dashboard
        .analysis
        .request_report()
        .context("no prediction to report on")?;
    let Some(bytes) = dashboard.apply(execute(backend, command).await) else {
        bail!(
            "{}",
            dashboard
                .analysis
                .report_error()
                .unwrap_or("Report generation failed")
        );
    };

    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Report saved to {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}
