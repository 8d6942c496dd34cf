//! The fixed rule battery applied to every document node.
//!
//! Each check inspects exactly one node (plus its ancestors, descendants,
//! or attributes) and records zero or more diagnostics. Checks are
//! independent of one another: nothing here short-circuits across rules,
//! and the walker evaluates every entry for every node. The battery is
//! closed on purpose; the tool checks exactly these conditions and no more.

use crate::dom::{attributes, has_ancestor, has_attribute, has_descendant, is_element, text_content, ANY_VALUE};
use crate::models::Report;
use markup5ever_rcdom::{Handle, NodeData};
use regex::Regex;
use std::sync::OnceLock;

/// One check: looks at the given node and records any violations.
pub type Rule = fn(&mut Report, &Handle, &str);

/// The battery, in evaluation order.
pub const RULES: [Rule; 8] = [
    lazy_loading,
    width_and_height,
    alt_text,
    anchor_name,
    img_in_figure,
    time_formatting,
    figure_caption,
    curly_quotes,
];

/// Expected `<time>` text, e.g. "2 January 2006". The day needs no leading
/// zero; a single leading space is tolerated for space-padded rendering.
pub const DATE_FORMAT: &str = "2 January 2006";

const MONTHS: [(&str, u32); 12] = [
    ("January", 31),
    ("February", 28),
    ("March", 31),
    ("April", 30),
    ("May", 31),
    ("June", 30),
    ("July", 31),
    ("August", 31),
    ("September", 30),
    ("October", 31),
    ("November", 30),
    ("December", 31),
];

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ ?(\d{1,2}) ([A-Za-z]+) (\d{4})$").expect("valid pattern"))
}

/// Validate a date string against [`DATE_FORMAT`], including day-of-month
/// range with leap-year February.
pub fn is_archive_date(text: &str) -> bool {
    let Some(caps) = date_pattern().captures(text) else {
        return false;
    };
    let day: u32 = match caps[1].parse() {
        Ok(d) => d,
        Err(_) => return false,
    };
    let year: i32 = match caps[3].parse() {
        Ok(y) => y,
        Err(_) => return false,
    };
    let Some(&(month, days)) = MONTHS.iter().find(|(name, _)| *name == &caps[2]) else {
        return false;
    };
    let days = if month == "February" && is_leap_year(year) {
        29
    } else {
        days
    };
    (1..=days).contains(&day)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `<img>`/`<iframe>` should load lazily; `<script>` should be a module.
/// These attributes improve loading and rendering performance.
fn lazy_loading(report: &mut Report, node: &Handle, source_id: &str) {
    if is_element(node, "img") || is_element(node, "iframe") {
        let lazy = attributes(node).is_some_and(|attrs| has_attribute(&attrs, "loading", "lazy"));
        if !lazy {
            report.record(source_id, "lazy-loading", "<img>/<iframe> missing loading=lazy");
        }
    } else if is_element(node, "script") {
        let module = attributes(node).is_some_and(|attrs| has_attribute(&attrs, "type", "module"));
        if !module {
            report.record(source_id, "lazy-loading", "<script> missing type=module");
        }
    }
}

/// `<img>` should declare width and height to avoid janky reflows. Missing
/// width and missing height are reported separately.
fn width_and_height(report: &mut Report, node: &Handle, source_id: &str) {
    if !is_element(node, "img") {
        return;
    }
    let Some(attrs) = attributes(node) else {
        return;
    };
    if !has_attribute(&attrs, "width", ANY_VALUE) {
        report.record(source_id, "width-height", "<img> missing width");
    }
    if !has_attribute(&attrs, "height", ANY_VALUE) {
        report.record(source_id, "width-height", "<img> missing height");
    }
}

/// `<img>` needs an alt attribute for accessibility.
fn alt_text(report: &mut Report, node: &Handle, source_id: &str) {
    if is_element(node, "img") {
        let has_alt = attributes(node).is_some_and(|attrs| has_attribute(&attrs, "alt", ANY_VALUE));
        if !has_alt {
            report.record(source_id, "alt-text", "<img> missing alt");
        }
    }
}

/// `<a name=...>` is deprecated in favor of id.
fn anchor_name(report: &mut Report, node: &Handle, source_id: &str) {
    if is_element(node, "a") {
        let named = attributes(node).is_some_and(|attrs| has_attribute(&attrs, "name", ANY_VALUE));
        if named {
            report.record(source_id, "deprecated-name", "<a> has name; should use id");
        }
    }
}

/// `<img>` should be nested inside a `<figure>`.
fn img_in_figure(report: &mut Report, node: &Handle, source_id: &str) {
    if is_element(node, "img") && !has_ancestor(node, "figure") {
        report.record(source_id, "figure-nesting", "<img> not inside <figure>");
    }
}

/// `<time>` must contain exactly one text child holding a date in the
/// fixed long format. Unparseable dates are reported, never fatal.
fn time_formatting(report: &mut Report, node: &Handle, source_id: &str) {
    if !is_element(node, "time") {
        return;
    }
    let text = {
        let children = node.children.borrow();
        if children.len() == 1 {
            text_content(&children[0])
        } else {
            None
        }
    };
    match text {
        None => report.record(source_id, "time-format", "<time> needs exactly 1 text child"),
        Some(t) => {
            if !is_archive_date(&t) {
                report.record(
                    source_id,
                    "time-format",
                    format!("<time> child {t} does not have correct format {DATE_FORMAT}"),
                );
            }
        }
    }
}

/// `<figure>` needs a `<figcaption>` somewhere beneath it.
fn figure_caption(report: &mut Report, node: &Handle, source_id: &str) {
    if is_element(node, "figure") && !has_descendant(node, "figcaption") {
        report.record(source_id, "figure-caption", "<figure> missing <figcaption> child");
    }
}

/// Non-code text nodes, alt attributes, and title attributes should use
/// curly quotes rather than straight ones.
fn curly_quotes(report: &mut Report, node: &Handle, source_id: &str) {
    if let NodeData::Text { contents } = &node.data {
        if !has_ancestor(node, "pre")
            && !has_ancestor(node, "code")
            && !has_ancestor(node, "script")
            && !has_ancestor(node, "style")
        {
            let text = contents.borrow();
            if text.contains(['\'', '"']) {
                report.record(
                    source_id,
                    "curly-quotes",
                    format!("contains non-curly quotes text node {text}"),
                );
            }
        }
    }
    if is_element(node, "img") {
        if let Some(attrs) = attributes(node) {
            for a in attrs.iter() {
                let key = &*a.name.local;
                if (key == "alt" || key == "title") && a.value.contains(['\'', '"']) {
                    report.record(
                        source_id,
                        "curly-quotes",
                        "<img> alt or title contains non-curly quotes",
                    );
                }
            }
        }
    }
}
