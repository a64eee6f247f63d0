//! # Prediksi Documentation
//!
//! Browser side of the diabetes symptom prediction page.
//!
//! ## Crates
//! - `frontend/submit`: form model, validation, rendering and the submission controller
//! - `frontend/web`: wasm module the page loads; binds the controller to the DOM
//! - `tester`: submits a form to a running service from the terminal
//!
//! ## Notes
//! - The prediction service, history (`/riwayat`) and statistics (`/statistik`) pages live
//!   elsewhere and are only linked to
//! - One request per submit, no retries; a second submit while one is in flight is ignored
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Build the page module.
//! ```sh
//! wasm-pack build frontend/web --target web
//! ```
//!
//! Submit a form against a local service.
//! ```sh
//! RUST_LOG=debug cargo run -p tester -- --input tester/form.json
//! cargo run -p tester -- --base-url http://localhost:5000 name=Budi age=45 gender=Pria
//! ```
//!
//!
//!
//! # Configuration
//!
//! Read from the environment where one exists, defaults otherwise.
//!
//! | variable | default |
//! |---|---|
//! | `PREDICTION_BASE_URL` | `http://localhost:5000` (the page origin in the browser) |
//! | `PREDICTION_ENDPOINT` | `/prediksi` |
//! | `HISTORY_PATH` | `/riwayat` |
//! | `STATISTICS_PATH` | `/statistik` |
//! | `HOME_PATH` | `/` |

pub mod payloads;
