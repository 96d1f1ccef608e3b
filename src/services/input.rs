use std::path::Path;

/// Read the whole input file up front and return its trimmed lines in file
/// order. Any read failure propagates and is fatal.
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(raw.lines().map(|l| l.trim().to_string()).collect())
}
