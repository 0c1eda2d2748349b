use crate::error::{Result, StampError};

/// Splits a marker line on "=" and returns the trimmed right-hand side
fn value_part(line: &str) -> Result<&str> {
    let parts: Vec<&str> = line.split('=').collect();
    if parts.len() != 2 {
        return Err(StampError::parse(format!(
            "Expected exactly one '=' in line: '{}'",
            line.trim()
        )));
    }
    Ok(parts[1].trim())
}

/// Parses the integer value of a marker line (e.g. `let Build: Int = 42` -> 42)
pub fn int_value(line: &str) -> Result<i64> {
    let value = value_part(line)?;
    value
        .parse::<i64>()
        .map_err(|_| StampError::parse(format!("Invalid integer value: '{}'", value)))
}

/// Parses the string value of a marker line with all double quotes removed
pub fn string_value(line: &str) -> Result<String> {
    Ok(value_part(line)?.replace('"', ""))
}
