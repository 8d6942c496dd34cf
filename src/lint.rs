//! Lint drivers: the rule-battery tree walk and the nesting scan.
//!
//! `lint_source` runs both passes for one document: the full tree walk
//! first, then the nesting scan over a fresh token stream of the same
//! source text. Both passes record into the same `Report`; neither is ever
//! fatal, no matter how malformed the document is.

use crate::models::Report;
use crate::rules::RULES;
use crate::tokens::{tag_stream, TagToken};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, RcDom};

/// Apply every rule to `node`, then recurse through its children in
/// document order (depth-first, pre-order). Single-threaded, single pass.
pub fn lint_tree(report: &mut Report, node: &Handle, source_id: &str) {
    for rule in RULES {
        rule(report, node, source_id);
    }
    for child in node.children.borrow().iter() {
        lint_tree(report, child, source_id);
    }
}

/// Check tag open/close balance over a raw token stream.
///
/// Keeps an explicit stack of open tag names: pushed on every start tag,
/// popped on every end tag. A close with an empty stack is an underflow
/// (nothing is popped); a close that does not match the top is reported but
/// still pops, so the scan recovers and continues. Names still open at end
/// of stream are reported once, in order.
pub fn lint_nesting<I>(report: &mut Report, tokens: I, source_id: &str)
where
    I: IntoIterator<Item = TagToken>,
{
    let mut stack: Vec<String> = Vec::new();
    for token in tokens {
        match token {
            TagToken::Open(tag) => stack.push(tag),
            TagToken::Close(tag) => match stack.pop() {
                None => report.record(source_id, "nesting", "tag stack underflow"),
                Some(open) if open != tag => {
                    report.record(source_id, "nesting", format!("Unmatched pair {tag} {open}"));
                }
                Some(_) => {}
            },
        }
    }
    if !stack.is_empty() {
        report.record(
            source_id,
            "nesting",
            format!("Unclosed tags [{}]", stack.join(" ")),
        );
    }
}

/// Parse `source` and run both passes under the given source identifier.
pub fn lint_source(report: &mut Report, source: &str, source_id: &str) {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);
    lint_tree(report, &dom.document, source_id);
    lint_nesting(report, tag_stream(source), source_id);
    report.add_file();
}
