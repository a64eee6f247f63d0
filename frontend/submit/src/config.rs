use std::env;

use reqwest::Url;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Links rendered into the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub history: String,
    pub statistics: String,
    pub home: String,
}

/// Ids of the three elements the page must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub submit: String,
    pub result: String,
}

/// Submit control labels for the idle and busy states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub idle: String,
    pub busy: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub endpoint: String,
    pub links: Links,
    pub elements: ElementIds,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            endpoint: "/prediksi".to_string(),
            links: Links {
                history: "/riwayat".to_string(),
                statistics: "/statistik".to_string(),
                home: "/".to_string(),
            },
            elements: ElementIds {
                form: "predictionForm".to_string(),
                submit: "submitBtn".to_string(),
                result: "resultContainer".to_string(),
            },
            labels: Labels {
                idle: "Prediksi Sekarang".to_string(),
                busy: "Memproses...".to_string(),
            },
        }
    }
}

impl ElementIds {
    /// Looks up the form, submit control and result region, in that order.
    /// `None` as soon as one of them is missing.
    pub fn resolve<E, F>(&self, lookup: F) -> Option<(E, E, E)>
    where
        F: Fn(&str) -> Option<E>,
    {
        Some((lookup(&self.form)?, lookup(&self.submit)?, lookup(&self.result)?))
    }
}

impl Config {
    /// Reads overrides from the environment. Targets without an environment
    /// (wasm32 in the browser) simply get the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Fails when the base url and endpoint do not make a valid url.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            base_url: load_var(&lookup, "PREDICTION_BASE_URL", defaults.base_url),
            endpoint: load_var(&lookup, "PREDICTION_ENDPOINT", defaults.endpoint),
            links: Links {
                history: load_var(&lookup, "HISTORY_PATH", defaults.links.history),
                statistics: load_var(&lookup, "STATISTICS_PATH", defaults.links.statistics),
                home: load_var(&lookup, "HOME_PATH", defaults.links.home),
            },
            elements: defaults.elements,
            labels: defaults.labels,
        };

        config.prediction_url()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The endpoint resolved under the base url, keeping any path prefix the
    /// base carries (`http://host/api` + `/prediksi` → `http://host/api/prediksi`).
    pub fn prediction_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::Url {
            url: format!("{}{}", self.base_url, self.endpoint),
            reason,
        };

        let mut base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("cannot be a base".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(self.endpoint.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))
    }
}

fn load_var<F>(lookup: &F, key: &'static str, default: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    let value = raw.trim();
    if value.is_empty() {
        warn!("{key} is empty, using default: {default}");
        return default;
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, "/prediksi");
        assert_eq!(config.elements.form, "predictionForm");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PREDICTION_BASE_URL", "https://diabetes.example"),
            ("PREDICTION_ENDPOINT", "/predict"),
            ("HISTORY_PATH", " /history "),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://diabetes.example");
        assert_eq!(config.endpoint, "/predict");
        assert_eq!(config.links.history, "/history");
        assert_eq!(config.links.statistics, "/statistik");
    }

    #[test]
    fn test_blank_value_falls_back() {
        let config = Config::from_lookup(lookup(&[("PREDICTION_ENDPOINT", "   ")])).unwrap();
        assert_eq!(config.endpoint, "/prediksi");
    }

    #[test]
    fn test_prediction_url() {
        let url = Config::default().prediction_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/prediksi");

        let url = Config::default()
            .with_base_url("http://10.0.0.7:8080/")
            .prediction_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.7:8080/prediksi");
    }

    #[test]
    fn test_prediction_url_keeps_base_path() {
        for base in ["http://host/api", "http://host/api/"] {
            let url = Config::default().with_base_url(base).prediction_url().unwrap();
            assert_eq!(url.as_str(), "http://host/api/prediksi", "base {base:?}");
        }

        let mut config = Config::default().with_base_url("http://host/api/v1");
        config.endpoint = "predict".to_string();
        assert_eq!(
            config.prediction_url().unwrap().as_str(),
            "http://host/api/v1/predict"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Config::default().with_base_url("not a url").prediction_url();
        assert!(matches!(result, Err(ConfigError::Url { .. })));

        let result = Config::default().with_base_url("mailto:someone").prediction_url();
        assert!(matches!(result, Err(ConfigError::Url { .. })));

        let result = Config::from_lookup(lookup(&[("PREDICTION_BASE_URL", "localhost:5000/x y")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_elements() {
        let ids = Config::default().elements;
        let page = ["predictionForm", "submitBtn", "resultContainer"];

        let found = ids.resolve(|id| page.iter().any(|&p| p == id).then(|| id.to_string()));
        assert_eq!(
            found,
            Some((
                "predictionForm".to_string(),
                "submitBtn".to_string(),
                "resultContainer".to_string()
            ))
        );

        for missing in page {
            let found = ids.resolve(|id| (id != missing).then(|| id.to_string()));
            assert_eq!(found, None, "missing {missing}");
        }
    }
}
