#![doc = include_str!("../README.md")]
//!
//! breathscan: view state, backend client and presentation rules shared by
//! the Leptos dashboard and the `breathscan` command-line tool.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod scene;
pub mod signals;
pub mod state;

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
pub mod server;

pub use client::{execute, Backend};
pub use config::ClientConfig;
pub use error::{BreathScanError, Result};
pub use models::{CsvUpload, MetricsMap, ModelScores, Prediction};
pub use state::{Command, Dashboard, Outcome, Session, Tab};
