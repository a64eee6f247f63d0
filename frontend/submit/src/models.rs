use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SubmitError;

/// Body of a successful `/prediksi` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub probability: f64,
    pub diagnosis: String,
    pub model_used: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    High,
    Low,
}

impl Risk {
    pub fn css_class(self) -> &'static str {
        match self {
            Risk::High => "diabetic",
            Risk::Low => "normal",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Risk::High => {
                "⚠️ Disarankan untuk konsultasi dengan dokter dan melakukan pemeriksaan gula darah. \
                 Gejala yang dialami menunjukkan kemungkinan diabetes."
            }
            Risk::Low => {
                "✅ Hasil menunjukkan risiko diabetes rendah. \
                 Tetap jaga pola hidup sehat dengan diet seimbang dan olahraga teratur."
            }
        }
    }
}

impl PredictionResponse {
    pub fn risk(&self) -> Risk {
        if self.prediction == 1 {
            Risk::High
        } else {
            Risk::Low
        }
    }

    /// Probability as a percentage with one decimal, e.g. `87.0`.
    pub fn percentage(&self) -> String {
        format!("{:.1}", self.probability * 100.0)
    }

    /// Decodes a reply body. A truthy `error` field wins over everything else
    /// in the body.
    pub fn from_body(body: &str) -> Result<Self, SubmitError> {
        let reply: Value = serde_json::from_str(body)?;

        if let Some(error) = reply.get("error").filter(|e| is_truthy(e)) {
            let message = match error {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            };
            return Err(SubmitError::Application(message));
        }

        Ok(serde_json::from_value(reply)?)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_service_reply() {
        let body = r#"{"success": true, "prediction": 1, "probability": 0.87,
                       "model_used": "Gradient Boosting", "diagnosis": "Berisiko Diabetes"}"#;

        let response = PredictionResponse::from_body(body).unwrap();
        assert_eq!(response.risk(), Risk::High);
        assert_eq!(response.percentage(), "87.0");
        assert_eq!(response.model_used, "Gradient Boosting");
        assert_eq!(response.success, Some(true));
    }

    #[test]
    fn test_percentage_rounding() {
        let mut response = PredictionResponse {
            prediction: 0,
            probability: 0.13,
            diagnosis: "Normal".to_string(),
            model_used: "KNN".to_string(),
            success: None,
        };
        assert_eq!(response.percentage(), "13.0");
        assert_eq!(response.risk(), Risk::Low);

        response.probability = 0.4567;
        assert_eq!(response.percentage(), "45.7");

        response.probability = 1.0;
        assert_eq!(response.percentage(), "100.0");
    }

    #[test]
    fn test_error_field_is_application_error() {
        let result = PredictionResponse::from_body(r#"{"success": false, "error": "model unavailable"}"#);
        assert!(matches!(result, Err(SubmitError::Application(m)) if m == "model unavailable"));
    }

    #[test]
    fn test_falsy_error_field_ignored() {
        let body = r#"{"error": "", "prediction": 0, "probability": 0.2,
                       "model_used": "CatBoost", "diagnosis": "Normal"}"#;
        assert!(PredictionResponse::from_body(body).is_ok());

        let body = r#"{"error": null, "prediction": 0, "probability": 0.2,
                       "model_used": "CatBoost", "diagnosis": "Normal"}"#;
        assert!(PredictionResponse::from_body(body).is_ok());
    }

    #[test]
    fn test_incomplete_or_malformed_body() {
        assert!(matches!(
            PredictionResponse::from_body(r#"{"prediction": 1}"#),
            Err(SubmitError::Decode(_))
        ));
        assert!(matches!(
            PredictionResponse::from_body("<html>502 Bad Gateway</html>"),
            Err(SubmitError::Decode(_))
        ));
    }
}
