//! Submission flow for the diabetes prediction form.
//!
//! The page posts the form through [`Controller::handle_submit`], which
//! validates the fields, sends them to the prediction service and renders the
//! reply into the result region. Everything platform specific sits behind two
//! seams: [`PredictionClient`] for the network and [`View`] for the page.
//!
//! ```text
//! submit ─► validate ──(errors)──► notify
//!              │
//!              ▼
//!        mark submitting ─► POST /prediksi ─► render success | failure
//!                                                   │
//!                                                   ▼
//!                                          restore submit control
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod state;
pub mod utils;
pub mod validate;

pub use client::{HttpClient, PredictionClient};
pub use config::Config;
pub use controller::{Controller, Outcome, View};
pub use error::{ConfigError, SubmitError};
pub use form::{FormInput, Symptom};
pub use models::{PredictionResponse, Risk};
pub use state::UiState;
