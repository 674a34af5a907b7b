//! Load the values to histogram from disk.
//!
//! Accepts either a JSON array of numbers or plain text with numbers separated
//! by whitespace, commas or semicolons (one column of a CSV export works too).

use anyhow::{bail, Context, Result};
use std::path::Path;

use rangebrush_core::Domain;

pub fn load_values(path: &Path) -> Result<Vec<f64>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {}", path.display()))?;

    let values = if data.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<f64>>(&data)
            .with_context(|| format!("Failed to parse values JSON: {}", path.display()))?
    } else {
        parse_values(&data)?
    };

    if values.is_empty() {
        bail!("No values found in {}", path.display());
    }
    Ok(values)
}

/// Parse separator-delimited numbers. Reports the first bad token with its line.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
            if token.is_empty() {
                continue;
            }
            let value: f64 = token
                .parse()
                .with_context(|| format!("line {}: not a number: {token:?}", line_no + 1))?;
            if !value.is_finite() {
                bail!("line {}: value is not finite: {token:?}", line_no + 1);
            }
            values.push(value);
        }
    }
    Ok(values)
}

/// Smallest domain covering every value.
pub fn domain_of(values: &[f64]) -> Result<Domain> {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        bail!("cannot derive a domain from zero values");
    };
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Ok(Domain::new(min, max)?)
}
