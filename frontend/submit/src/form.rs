use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// The fourteen yes/no symptom questions on the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symptom {
    Polyuria,
    Polydipsia,
    WeightLoss,
    Weakness,
    Polyphagia,
    GenitalThrush,
    VisualBlurring,
    Itching,
    Irritability,
    DelayedHealing,
    PartialParesis,
    MuscleStiffness,
    Alopecia,
    Obesity,
}

impl Symptom {
    pub const ALL: [Symptom; 14] = [
        Symptom::Polyuria,
        Symptom::Polydipsia,
        Symptom::WeightLoss,
        Symptom::Weakness,
        Symptom::Polyphagia,
        Symptom::GenitalThrush,
        Symptom::VisualBlurring,
        Symptom::Itching,
        Symptom::Irritability,
        Symptom::DelayedHealing,
        Symptom::PartialParesis,
        Symptom::MuscleStiffness,
        Symptom::Alopecia,
        Symptom::Obesity,
    ];

    /// Form field name, also the JSON key sent to the service.
    pub fn key(self) -> &'static str {
        match self {
            Symptom::Polyuria => "polyuria",
            Symptom::Polydipsia => "polydipsia",
            Symptom::WeightLoss => "weight_loss",
            Symptom::Weakness => "weakness",
            Symptom::Polyphagia => "polyphagia",
            Symptom::GenitalThrush => "genital_thrush",
            Symptom::VisualBlurring => "visual_blurring",
            Symptom::Itching => "itching",
            Symptom::Irritability => "irritability",
            Symptom::DelayedHealing => "delayed_healing",
            Symptom::PartialParesis => "partial_paresis",
            Symptom::MuscleStiffness => "muscle_stiffness",
            Symptom::Alopecia => "alopecia",
            Symptom::Obesity => "obesity",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw field values read from the submitted form.
///
/// Serializes as a flat JSON object of strings, which is exactly the request
/// body the prediction service expects. Fields the form carries beyond the
/// known ones are kept and sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the input from raw form entries in document order. Entries
    /// without a text value (file inputs) are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        entries
            .into_iter()
            .filter_map(|(key, value)| Some((key, value?)))
            .collect()
    }

    /// Later values for the same key replace earlier ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    pub fn age(&self) -> Option<&str> {
        self.get("age")
    }

    pub fn gender(&self) -> Option<&str> {
        self.get("gender")
    }

    pub fn symptom(&self, symptom: Symptom) -> Option<&str> {
        self.get(symptom.key())
    }

    /// Symptoms that are absent or left empty, in form order.
    pub fn missing_symptoms(&self) -> Vec<Symptom> {
        Symptom::ALL
            .into_iter()
            .filter(|&symptom| self.symptom(symptom).is_none_or(str::is_empty))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = Self::new();
        for (key, value) in iter {
            input.insert(key, value);
        }
        input
    }
}
