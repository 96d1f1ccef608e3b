use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("line {line}: invalid level '{token}'")]
    InvalidLevel { line: usize, token: String },
    #[error("line {line}: empty report")]
    EmptyReport { line: usize },
}

/// Parse one input line into its levels. `line` is the 1-based line number,
/// used only for diagnostics.
pub fn parse_report(raw: &str, line: usize) -> Result<Vec<i64>, ReportError> {
    let levels = raw
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ReportError::InvalidLevel {
                line,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;
    if levels.is_empty() {
        return Err(ReportError::EmptyReport { line });
    }
    Ok(levels)
}

/// A report is safe when every consecutive step is 1..=3 in magnitude and
/// all steps run in one direction. A single level has no steps to violate.
pub fn is_safe(levels: &[i64]) -> bool {
    let mut increasing = true;
    let mut decreasing = true;
    for pair in levels.windows(2) {
        let diff = pair[1] - pair[0];
        if diff == 0 || diff.abs() > 3 {
            return false;
        }
        if diff > 0 {
            decreasing = false;
        }
        if diff < 0 {
            increasing = false;
        }
    }
    increasing || decreasing
}

/// True when dropping exactly one level (any index, lowest first) leaves a
/// safe report. Quadratic over the report length, which stays puzzle-small.
pub fn safe_with_one_removal(levels: &[i64]) -> bool {
    (0..levels.len()).any(|skip| {
        let reduced: Vec<i64> = levels
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, level)| *level)
            .collect();
        is_safe(&reduced)
    })
}
