//! html-lint core library.
//!
//! This crate exposes programmatic APIs for checking parsed HTML documents
//! against a fixed battery of style, accessibility, and structural rules,
//! plus an independent token-stream check of tag open/close balance.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `dom`: Read-only predicates over the parser-owned document tree.
//! - `rules`: The fixed rule battery and the date-format validator.
//! - `tokens`: Tag-event extraction from raw source text.
//! - `lint`: Tree walk and nesting scan drivers.
//! - `models`: Issue/summary data and the `Report` diagnostic sink.
//! - `output`: Human/JSON printers for lint results.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod config;
pub mod dom;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod tokens;
pub mod utils;
