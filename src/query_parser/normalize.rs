use crate::error::QueryError;

/// Trims surrounding whitespace. Case is kept as typed.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() {
        return None;
    }
    Some(word.to_string())
}

/// Parses a search tolerance. Negative values are rejected, not clamped.
pub fn parse_max_distance(raw: &str) -> Result<u32, QueryError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| QueryError::InvalidMaxDistance(trimmed.to_string()))?;
    if value < 0 {
        return Err(QueryError::NegativeMaxDistance(value));
    }
    u32::try_from(value).map_err(|_| QueryError::InvalidMaxDistance(trimmed.to_string()))
}
