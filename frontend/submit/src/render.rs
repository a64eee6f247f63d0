use crate::{config::Links, models::PredictionResponse, utils::escape_html};

pub const LOADING_HTML: &str = r#"<div class="loading">🔄 Memproses prediksi...</div>"#;

pub const FAILURE_MESSAGE: &str = "Terjadi kesalahan saat memproses prediksi. Silakan coba lagi.";

pub fn render_success(result: &PredictionResponse, links: &Links) -> String {
    let risk = result.risk();

    format!(
        r#"
<div class="result {class}">
    <h3>Hasil Prediksi:</h3>
    <div class="diagnosis-badge">{diagnosis}</div>
    <div class="confidence">Tingkat Kepercayaan: <strong>{percentage}%</strong></div>
    <div class="model-info">Model yang digunakan: <strong>{model}</strong></div>
    <div class="advice">{advice}</div>
    <div class="nav-links">
        <a href="{history}" class="nav-btn">📊 Lihat Riwayat</a>
        <a href="{statistics}" class="nav-btn">📈 Lihat Statistik</a>
        <button onclick="location.reload()" class="nav-btn">🔄 Prediksi Lagi</button>
    </div>
</div>
"#,
        class = risk.css_class(),
        diagnosis = escape_html(&result.diagnosis),
        percentage = result.percentage(),
        model = escape_html(&result.model_used),
        advice = risk.advice(),
        history = escape_html(&links.history),
        statistics = escape_html(&links.statistics),
    )
}

pub fn render_failure(message: &str, links: &Links) -> String {
    format!(
        r#"
<div class="result error">
    <h3>❌ Terjadi Kesalahan</h3>
    <p>{message}</p>
    <div class="nav-links">
        <button onclick="location.reload()" class="nav-btn">🔄 Refresh Halaman</button>
        <a href="{home}" class="nav-btn">🏠 Kembali ke Home</a>
    </div>
</div>
"#,
        message = escape_html(message),
        home = escape_html(&links.home),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, models::Risk};

    fn response(prediction: u8, probability: f64) -> PredictionResponse {
        PredictionResponse {
            prediction,
            probability,
            diagnosis: if prediction == 1 { "Diabetic" } else { "Normal" }.to_string(),
            model_used: "RandomForest".to_string(),
            success: Some(true),
        }
    }

    #[test]
    fn test_high_risk() {
        let html = render_success(&response(1, 0.87), &Config::default().links);

        assert!(html.contains(r#"<div class="result diabetic">"#));
        assert!(html.contains("Diabetic"));
        assert!(html.contains("87.0%"));
        assert!(html.contains("RandomForest"));
        assert!(html.contains(Risk::High.advice()));
        assert!(!html.contains(Risk::Low.advice()));
        assert!(html.contains(r#"href="/riwayat""#));
        assert!(html.contains(r#"href="/statistik""#));
    }

    #[test]
    fn test_low_risk() {
        let html = render_success(&response(0, 0.13), &Config::default().links);

        assert!(html.contains(r#"<div class="result normal">"#));
        assert!(html.contains("13.0%"));
        assert!(html.contains(Risk::Low.advice()));
        assert!(!html.contains("diabetic"));
    }

    #[test]
    fn test_interpolated_values_escaped() {
        let mut result = response(1, 0.5);
        result.model_used = "<img src=x onerror=alert(1)>".to_string();

        let html = render_success(&result, &Config::default().links);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_failure() {
        let html = render_failure(FAILURE_MESSAGE, &Config::default().links);

        assert!(html.contains(r#"<div class="result error">"#));
        assert!(html.contains(FAILURE_MESSAGE));
        assert!(html.contains("location.reload()"));
        assert!(html.contains(r#"href="/""#));
    }
}
