use std::ops::RangeInclusive;

use crate::form::FormInput;

pub const NAME_MESSAGE: &str = "• Nama harus diisi (minimal 2 karakter)";
pub const AGE_MESSAGE: &str = "• Usia harus antara 1-120 tahun";
pub const GENDER_MESSAGE: &str = "• Jenis kelamin harus dipilih";
pub const SYMPTOMS_MESSAGE: &str = "• Semua gejala harus dipilih";

pub const NOTIFICATION_HEADER: &str = "Mohon lengkapi semua field:";

const MIN_NAME_CHARS: usize = 2;
const AGE_RANGE: RangeInclusive<f64> = 1.0..=120.0;

/// Checks the form in a fixed order and returns every violated rule.
///
/// An empty result means the form may be sent. Any number of missing
/// symptoms produces the one shared symptom message.
pub fn validate(input: &FormInput) -> Vec<&'static str> {
    let mut errors = Vec::new();

    if !name_valid(input.name()) {
        errors.push(NAME_MESSAGE);
    }

    if !age_valid(input.age()) {
        errors.push(AGE_MESSAGE);
    }

    if input.gender().is_none_or(str::is_empty) {
        errors.push(GENDER_MESSAGE);
    }

    if !input.missing_symptoms().is_empty() {
        errors.push(SYMPTOMS_MESSAGE);
    }

    errors
}

/// Text of the blocking notification listing all violations.
pub fn notification(errors: &[&str]) -> String {
    format!("{NOTIFICATION_HEADER}\n{}", errors.join("\n"))
}

fn name_valid(name: Option<&str>) -> bool {
    name.is_some_and(|name| name.trim().chars().count() >= MIN_NAME_CHARS)
}

fn age_valid(age: Option<&str>) -> bool {
    age.and_then(|age| age.trim().parse::<f64>().ok())
        .is_some_and(|age| AGE_RANGE.contains(&age))
}
