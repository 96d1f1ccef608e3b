use crate::cli::Cli;
use crate::domain::models::{JsonOut, TallyBreakdown};
use crate::services::analysis::{evaluate_lines, summarize};
use crate::services::input::read_lines;

pub fn handle_tally(cli: &Cli) -> anyhow::Result<()> {
    let lines = read_lines(&cli.input)?;
    let evaluations = evaluate_lines(&lines)?;
    let summary = summarize(&evaluations);
    log::debug!(
        "tallied {} reports from {}",
        summary.reports,
        cli.input.display()
    );

    if cli.json {
        if cli.details {
            let breakdown = TallyBreakdown {
                reports: summary.reports,
                safe: summary.safe,
                safe_with_dampener: summary.safe_with_dampener,
                evaluations,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&JsonOut {
                    ok: true,
                    data: breakdown
                })?
            );
        } else {
            println!(
                "{}",
                serde_json::to_string_pretty(&JsonOut {
                    ok: true,
                    data: summary
                })?
            );
        }
        return Ok(());
    }

    if cli.details {
        for e in &evaluations {
            let levels = e
                .levels
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}\t{}\t{}\t{}", e.line, levels, e.safe, e.safe_with_dampener);
        }
    }
    println!("Number of safe reports: {}", summary.safe);
    println!(
        "Number of safe reports with Problem Dampener: {}",
        summary.safe_with_dampener
    );
    Ok(())
}
