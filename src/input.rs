#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter at least one URL")]
    NoTargets,
}

/// Split a comma-separated list into trimmed, non-empty targets.
pub fn parse_targets(raw: &str) -> Result<Vec<String>, ValidationError> {
    let targets: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if targets.is_empty() {
        return Err(ValidationError::NoTargets);
    }
    Ok(targets)
}
