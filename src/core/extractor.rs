use crate::domain::model::{Labels, Reading};
use crate::utils::error::ExtractionError;

/// Reads the run of ASCII digits immediately following the first occurrence of `label`.
pub fn extract_value(text: &str, label: &str) -> Result<u32, ExtractionError> {
    let start = text
        .find(label)
        .map(|idx| idx + label.len())
        .ok_or_else(|| ExtractionError::LabelNotFound {
            label: label.to_string(),
        })?;

    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Err(ExtractionError::MissingDigits {
            label: label.to_string(),
        });
    }

    digits
        .parse::<u32>()
        .map_err(|_| ExtractionError::OutOfRange {
            label: label.to_string(),
            digits,
        })
}

pub fn extract_reading(text: &str, labels: &Labels) -> Result<Reading, ExtractionError> {
    let temperature = extract_value(text, &labels.temperature)?;
    let humidity = extract_value(text, &labels.humidity)?;
    Ok(Reading {
        temperature,
        humidity,
    })
}
