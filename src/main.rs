//! html-lint binary entry point.
//! Owns all I/O: argument expansion, file reading, and the exit status.

mod cli;
mod config;
mod dom;
mod lint;
mod models;
mod output;
mod rules;
mod tokens;
mod utils;

use clap::Parser;
use cli::Cli;
use models::Report;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.config_root.as_deref(),
        cli.output.as_deref(),
        &cli.paths,
    );
    if eff.output != "human" && eff.output != "json" {
        eprintln!(
            "{} unknown output mode '{}'; expected human|json",
            utils::error_prefix(),
            eff.output
        );
        std::process::exit(2);
    }

    let color = output::use_colors(&eff.output);
    let mut stderr = io::stderr();
    // One sink for the whole run; every source contributes to the same count.
    let mut report = if eff.output == "json" {
        Report::new()
    } else {
        Report::with_echo(&mut stderr, color)
    };

    if eff.paths.is_empty() {
        // The source is buffered, so stdin gets both passes too.
        let mut source = String::new();
        match io::stdin().read_to_string(&mut source) {
            Ok(_) => lint::lint_source(&mut report, &source, "<stdin>"),
            Err(e) => report.record(
                "<stdin>",
                "read-input",
                format!("cannot read standard input: {e}"),
            ),
        }
    } else {
        for path in expand_paths(&eff.paths) {
            let id = display_id(&path);
            match fs::read_to_string(&path) {
                Ok(source) => lint::lint_source(&mut report, &source, &id),
                Err(e) => report.record(&id, "read-input", format!("cannot read file: {e}")),
            }
        }
    }

    output::print_lint(&report, &eff.output);
    std::process::exit(i32::try_from(report.count()).unwrap_or(i32::MAX));
}

/// Expand CLI arguments: plain paths pass through as given, glob patterns
/// expand in sorted match order.
fn expand_paths(patterns: &[String]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for pat in patterns {
        if !pat.contains(['*', '?', '[']) {
            out.push(PathBuf::from(pat));
            continue;
        }
        match glob::glob(pat) {
            Ok(entries) => {
                let matched: Vec<PathBuf> = entries.flatten().collect();
                if matched.is_empty() {
                    eprintln!("{} pattern matched no files: {}", utils::note_prefix(), pat);
                }
                out.extend(matched);
            }
            Err(e) => eprintln!(
                "{} bad glob pattern '{}': {}",
                utils::error_prefix(),
                pat,
                e
            ),
        }
    }
    out
}

/// Source identifier shown in diagnostics: absolute paths are relativized
/// against the current directory when that yields a local path.
fn display_id(path: &Path) -> String {
    if path.is_absolute() {
        if let Some(rel) = std::env::current_dir()
            .ok()
            .and_then(|cwd| pathdiff::diff_paths(path, &cwd))
        {
            if !rel.as_os_str().is_empty() && !rel.starts_with("..") {
                return rel.display().to_string();
            }
        }
    }
    path.display().to_string()
}
