use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Verdicts for one input line.
#[derive(Debug, Serialize, Clone)]
pub struct ReportEvaluation {
    pub line: usize,
    pub levels: Vec<i64>,
    pub safe: bool,
    pub safe_with_dampener: bool,
}

#[derive(Debug, Serialize)]
pub struct TallySummary {
    pub reports: usize,
    pub safe: usize,
    pub safe_with_dampener: usize,
}

#[derive(Serialize)]
pub struct TallyBreakdown {
    pub reports: usize,
    pub safe: usize,
    pub safe_with_dampener: usize,
    pub evaluations: Vec<ReportEvaluation>,
}
