//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "html-lint",
    version,
    about = "Analyzes HTML files for style, accessibility, and nesting problems",
    long_about = "html-lint — a small, fast, offline checker for static HTML.\n\nRuns a fixed battery of style and accessibility checks over every node of each document, then verifies tag open/close balance over the raw source. Exits with the total number of reported problems.\n\nConfiguration precedence: CLI > htmlint.toml > defaults.",
    after_help = "Examples:\n  html-lint site/index.html\n  html-lint 'site/**/*.html' --output json\n  cat page.html | html-lint"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Files or glob patterns to analyze; reads standard input when empty
    pub paths: Vec<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
    pub config_root: Option<String>,
}
