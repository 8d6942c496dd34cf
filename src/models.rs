//! Shared data models for lint output and the `Report` diagnostic sink.

use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A single reported violation: source identifier, kind label, and message.
pub struct Issue {
    pub file: String,
    pub rule: &'static str,
    pub message: String,
}

#[derive(Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub problems: usize,
    pub files: usize,
}

/// Append-only diagnostic sink.
///
/// One `Report` lives for the whole run and accumulates across every source
/// processed; it is never reset mid-run. The cumulative count is the
/// severity signal the caller turns into an exit status. When constructed
/// with an echo writer, each recorded issue is also written out immediately,
/// in call order.
pub struct Report<'w> {
    issues: Vec<Issue>,
    files: usize,
    echo: Option<&'w mut dyn Write>,
    color: bool,
}

impl<'w> Report<'w> {
    /// Silent sink; issues are only collected.
    pub fn new() -> Self {
        Report {
            issues: Vec::new(),
            files: 0,
            echo: None,
            color: false,
        }
    }

    /// Sink that writes each rendered issue to `out` at record time.
    pub fn with_echo(out: &'w mut dyn Write, color: bool) -> Self {
        Report {
            issues: Vec::new(),
            files: 0,
            echo: Some(out),
            color,
        }
    }

    /// Append a diagnostic and bump the count by one.
    pub fn record(&mut self, file: &str, rule: &'static str, message: impl Into<String>) {
        let issue = Issue {
            file: file.to_string(),
            rule,
            message: message.into(),
        };
        if let Some(out) = self.echo.as_deref_mut() {
            let _ = writeln!(out, "{}", crate::output::render_issue(&issue, self.color));
        }
        self.issues.push(issue);
    }

    /// Count one fully-processed source toward the summary.
    pub fn add_file(&mut self) {
        self.files += 1;
    }

    /// Cumulative diagnostic count across the whole run.
    pub fn count(&self) -> usize {
        self.issues.len()
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl Default for Report<'_> {
    fn default() -> Self {
        Report::new()
    }
}
