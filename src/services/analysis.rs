use crate::domain::models::{ReportEvaluation, TallySummary};
use crate::report::{self, ReportError};

/// Parse and judge every line. Line numbers are 1-based; the first malformed
/// line aborts the whole run.
pub fn evaluate_lines(lines: &[String]) -> Result<Vec<ReportEvaluation>, ReportError> {
    let mut evaluations = Vec::with_capacity(lines.len());
    for (idx, raw) in lines.iter().enumerate() {
        let line = idx + 1;
        let levels = report::parse_report(raw, line)?;
        let safe = report::is_safe(&levels);
        let safe_with_dampener = safe || report::safe_with_one_removal(&levels);
        log::debug!(
            "line {}: {} levels, safe={}, dampener={}",
            line,
            levels.len(),
            safe,
            safe_with_dampener
        );
        evaluations.push(ReportEvaluation {
            line,
            levels,
            safe,
            safe_with_dampener,
        });
    }
    Ok(evaluations)
}

/// Fold evaluations into the two independent counts.
pub fn summarize(evaluations: &[ReportEvaluation]) -> TallySummary {
    let mut summary = TallySummary {
        reports: evaluations.len(),
        safe: 0,
        safe_with_dampener: 0,
    };
    for e in evaluations {
        if e.safe {
            summary.safe += 1;
        }
        if e.safe_with_dampener {
            summary.safe_with_dampener += 1;
        }
    }
    summary
}
