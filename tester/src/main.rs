use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use submit::{Config, Controller, FormInput, HttpClient, Outcome, UiState, View};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Submits one prediction form to a running service and prints what the page
/// would show.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Service base url, overrides PREDICTION_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Endpoint path, overrides PREDICTION_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,

    /// JSON object with the form fields
    #[arg(long)]
    input: Option<PathBuf>,

    /// Extra fields as key=value, applied after --input
    fields: Vec<String>,
}

struct TerminalView;

impl View for TerminalView {
    fn set_submit(&self, enabled: bool, label: &str) {
        let state = if enabled { "enabled" } else { "disabled" };
        println!("[submit {state}] {label}");
    }

    fn show_result(&self, html: &str) {
        println!("{}", html.trim());
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    let mut input = match &args.input {
        Some(path) => read_input(path)?,
        None => FormInput::new(),
    };
    for field in &args.fields {
        let (key, value) = parse_field(field)?;
        input.insert(key, value);
    }

    let client = HttpClient::new(&config)?;
    info!("Submitting {} fields to {}", input.len(), client.url());

    let controller = Controller::new(client, TerminalView, &config);
    let outcome = controller.handle_submit(input).await;

    if let Outcome::Success(response) = &outcome {
        info!("Diagnosis: {}", response.diagnosis);
    }

    Ok(if controller.state() == UiState::Success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(path: &Path) -> Result<FormInput> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let json: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    form_from_json(json)
}

/// Flattens a JSON object into form fields. Scalars are stringified the way
/// a browser form would submit them.
fn form_from_json(json: Value) -> Result<FormInput> {
    let Value::Object(object) = json else {
        bail!("form input must be a JSON object");
    };

    let mut input = FormInput::new();
    for (key, value) in object {
        let value = match value {
            Value::String(s) => s,
            Value::Null => continue,
            scalar @ (Value::Bool(_) | Value::Number(_)) => scalar.to_string(),
            Value::Array(_) | Value::Object(_) => bail!("field {key} is not a scalar"),
        };
        input.insert(key, value);
    }

    Ok(input)
}

fn parse_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("expected key=value, got {field:?}"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{form_from_json, parse_field};

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("name=Budi").unwrap(), ("name", "Budi"));
        assert_eq!(parse_field("note=a=b").unwrap(), ("note", "a=b"));
        assert_eq!(parse_field("gender=").unwrap(), ("gender", ""));
        assert!(parse_field("polyuria").is_err());
        assert!(parse_field("=Ya").is_err());
    }

    #[test]
    fn test_form_from_json() {
        let input = form_from_json(json!({
            "name": "Rina",
            "age": 34,
            "obesity": "Tidak",
            "comment": null
        }))
        .unwrap();

        assert_eq!(input.age(), Some("34"));
        assert_eq!(input.name(), Some("Rina"));
        assert_eq!(input.get("comment"), None);
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_form_from_json_rejects_non_objects() {
        assert!(form_from_json(json!(["name", "Rina"])).is_err());
        assert!(form_from_json(json!({ "symptoms": ["polyuria"] })).is_err());
    }
}
