use std::collections::HashMap;
use anyhow::{anyhow, Result};

use crate::model::workout::Exercise;

/// Turns whatever was typed into a rep count. Empty or non-numeric text is
/// zero, negative numbers are zero, anything past `u32::MAX` saturates.
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim();
    if let Ok(n) = text.parse::<u64>() {
        return n.min(u32::MAX as u64) as u32;
    }
    if text.starts_with('-') && text[1..].chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f.min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub positional: Vec<String>,
    pub metadata: HashMap<String, String>,
}

/// Splits `key:value` arguments from positional ones.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut positional = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_lowercase(), value.to_string());
                continue;
            }
        }
        positional.push(arg.clone());
    }

    ParsedInput {
        positional,
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Exercise counts named in `key:value` metadata, with keys prefix-matched
/// against the exercise names. Unknown keys come back as warnings; having
/// no known key at all is an error.
pub fn exercise_counts(
    metadata: &HashMap<String, String>,
) -> Result<(Vec<(Exercise, String)>, Vec<String>)> {
    let known_keys: Vec<&str> = Exercise::ALL.iter().map(|e| e.key()).collect();
    let mut counts = Vec::new();
    let mut warnings = Vec::new();

    for (key, value) in metadata {
        match expand_key(key, &known_keys) {
            Ok(full_key) => {
                if let Some(exercise) = Exercise::from_key(&full_key) {
                    counts.push((exercise, value.clone()));
                }
            }
            Err(e) => warnings.push(e.to_string()),
        }
    }

    if counts.is_empty() {
        return Err(anyhow!(
            "No exercise counts given (keys: {})",
            known_keys.join(", ")
        ));
    }
    counts.sort_by_key(|(exercise, _)| Exercise::ALL.iter().position(|e| e == exercise));
    warnings.sort();
    Ok((counts, warnings))
}
