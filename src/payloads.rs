//! # Payload Specifications
//!
//! Requests/responses between the page and the prediction service.
//!
//! ## Request
//!
//! `POST /prediksi`
//! - Headers: `Content-Type: application/json`, `Accept: application/json`
//! - Body: flat JSON object of strings, one key per form field
//!
//! Fields
//! - name: free text, at least 2 characters after trimming
//! - age: numeric string within 1-120
//! - gender: `Pria` or `Wanita`
//! - polyuria, polydipsia, weight_loss, weakness, polyphagia, genital_thrush, visual_blurring,
//!   itching, irritability, delayed_healing, partial_paresis, muscle_stiffness, alopecia, obesity:
//!   `Ya` or `Tidak`, all required
//!
//! ## Response
//!
//! Success
//! - prediction: 0 or 1
//! - probability: 0.0 to 1.0
//! - diagnosis: display string such as `Berisiko Diabetes` or `Normal`
//! - model_used: display string such as `Gradient Boosting`
//! - success: `true`
//!
//! Handled error
//! - error: non-empty message, usually with status 500 and `success: false`
//!
//! Any non-2xx status is a failure whatever the body says.
//!
//!
//!
//! ## Flow
//!
//! - Submit is intercepted, the form is read into a map of strings
//! - Validation collects every violated rule and shows them in one alert, nothing is sent
//! - Otherwise the button is disabled and relabeled, the result region shows a loading notice
//! - One request is sent
//! - Success renders the diagnosis badge, confidence, model and advice
//! - Any failure renders one generic message, the cause only goes to the console
//! - The button is always re-enabled afterwards
