//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. Human diagnostic lines
//! are emitted by the sink at record time; this module renders them and
//! prints the trailing summary. The JSON form carries per-issue fields and
//! a top-level summary.

use crate::models::{Issue, Report, Summary};
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};

/// Whether human output should be colorized.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Render one issue as a human-readable line.
pub fn render_issue(issue: &Issue, color: bool) -> String {
    if color {
        format!(
            "{} {} ❲{}❳ — {}",
            "✖".red(),
            issue.file.bold(),
            issue.rule,
            issue.message
        )
    } else {
        format!("✖ {} ❲{}❳ — {}", issue.file, issue.rule, issue.message)
    }
}

/// Print results in the requested format.
///
/// Issues were already echoed in human mode, so only the summary follows;
/// JSON mode prints the whole composed document to stdout.
pub fn print_lint(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(report)).unwrap()
        ),
        _ => {
            let summary = format!(
                "— Summary — problems={} files={}",
                report.count(),
                report.files()
            );
            if use_colors(output) {
                eprintln!("{}", summary.bold());
            } else {
                eprintln!("{}", summary);
            }
        }
    }
}

/// Compose the lint JSON object (pure) for printing and shape tests.
pub fn compose_lint_json(report: &Report) -> JsonVal {
    json!({
        "issues": report.issues(),
        "summary": Summary {
            problems: report.count(),
            files: report.files(),
        },
    })
}
