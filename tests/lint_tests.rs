//! End-to-end lint tests over small HTML documents.
//!
//! Each case parses a snippet, runs both passes, and checks the expected
//! message fragments plus the exact cumulative count.

use html_lint::lint::lint_source;
use html_lint::models::Report;

fn run_test(text: &str, expected: &[&str], expected_count: usize) {
    let mut report = Report::new();
    lint_source(&mut report, text, "");
    for want in expected {
        assert!(
            report.issues().iter().any(|i| i.message.contains(want)),
            "expected a message containing {want:?}, got {:?}",
            report
                .issues()
                .iter()
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
        );
    }
    assert_eq!(
        report.count(),
        expected_count,
        "unexpected count, issues: {:?}",
        report
            .issues()
            .iter()
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_lazy_loading() {
    let document = r#"
<figure><img src="goat" alt="goat" width="0" height="0"/>
<figcaption>goat</figcaption></figure>
<iframe width="0" height="0"></iframe>
"#;
    run_test(document, &["<img>/<iframe> missing loading=lazy"], 2);
}

#[test]
fn test_lazy_loading_satisfied_only_by_exact_value() {
    let document = r#"
<figure><img src="goat" alt="goat" width="0" height="0" loading="eager"/>
<figcaption>goat</figcaption></figure>
"#;
    run_test(document, &["<img>/<iframe> missing loading=lazy"], 1);
}

#[test]
fn test_script_needs_type_module() {
    let document = r#"<script src="app.js"></script>"#;
    run_test(document, &["<script> missing type=module"], 1);
}

#[test]
fn test_width_and_height() {
    let document = r#"
<figure><img src="goat" alt="goat" height="0" loading="lazy"/>
<figcaption>goat</figcaption></figure>
<figure><img src="goat" alt="goat" width="0" loading="lazy"/>
<figcaption>goat</figcaption></figure>
"#;
    run_test(document, &["<img> missing width", "<img> missing height"], 2);
}

#[test]
fn test_width_and_height_both_missing_reports_twice() {
    let document = r#"
<figure><img src="goat" alt="goat" loading="lazy"/>
<figcaption>goat</figcaption></figure>
"#;
    run_test(document, &["<img> missing width", "<img> missing height"], 2);
}

#[test]
fn test_alt_text() {
    let document = r#"
<figure><img src="goat" width="0" height="0" loading="lazy"/>
<figcaption>goat</figcaption></figure>
"#;
    run_test(document, &["<img> missing alt"], 1);
}

#[test]
fn test_a_name() {
    let document = r#"<a name="florb"></a>"#;
    run_test(document, &["<a> has name; should use id"], 1);
}

#[test]
fn test_img_nested_in_figure() {
    let document = r#"<img src="goat" width="0" height="0" alt="goat" loading="lazy"/>"#;
    run_test(document, &["<img> not inside <figure>"], 1);
}

#[test]
fn test_time_formatting() {
    let document = "
<time></time>
<time>June 99th, 12 BCE</time>
";
    run_test(
        document,
        &["<time> needs exactly 1 text child", "does not have correct format"],
        2,
    );
}

#[test]
fn test_time_formatting_valid_date_is_clean() {
    let document = "<time>2 January 2006</time>";
    run_test(document, &[], 0);
}

#[test]
fn test_figure_has_figcaption() {
    let document = "<figure>hello</figure>";
    run_test(document, &["<figure> missing <figcaption> child"], 1);
}

#[test]
fn test_curly_quotes() {
    let document = r#"
<p>Hello, "World"</p>
<figure><img src="goat" width="0" height="0" alt="Hello, 'World'" loading="lazy"/>
<figcaption>hi</figcaption></figure>
<figure><img src="goat" width="0" height="0" alt="Hello, ‘World’" title="'wow'" loading="lazy"/>
<figcaption>hi</figcaption></figure>
"#;
    run_test(
        document,
        &[
            "contains non-curly quotes text node",
            "<img> alt or title contains non-curly quotes",
        ],
        3,
    );
}

#[test]
fn test_curly_quotes_ignores_code_blocks() {
    let document = r#"<pre>let x = "y";</pre><code>'quoted'</code>"#;
    run_test(document, &[], 0);
}

#[test]
fn test_clean_document_yields_no_issues() {
    let document = r#"<figure><img src="g" alt="g" width="0" height="0" loading="lazy"/><figcaption>g</figcaption></figure>"#;
    run_test(document, &[], 0);
}

#[test]
fn test_lazy_iframe_scenario_counts_one() {
    let document = r#"<figure><img src="g" alt="g" width="0" height="0" loading="lazy"/><figcaption>g</figcaption></figure><iframe width="0" height="0"></iframe>"#;
    run_test(document, &["<img>/<iframe> missing loading=lazy"], 1);
}

#[test]
fn test_nesting_diagnostics_from_raw_source() {
    // The tree builder would repair this, but the token scan sees the raw
    // order and reports both bad closes.
    let mut report = Report::new();
    lint_source(&mut report, "<b><i></b></i>", "");
    let nesting: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.rule == "nesting")
        .collect();
    assert_eq!(nesting.len(), 2);
    assert!(nesting[0].message.contains("Unmatched pair"));
}

#[test]
fn test_unclosed_tags_reported_once() {
    let mut report = Report::new();
    lint_source(&mut report, "<div><p>hello", "");
    let unclosed: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.message.starts_with("Unclosed tags"))
        .collect();
    assert_eq!(unclosed.len(), 1);
    assert_eq!(unclosed[0].message, "Unclosed tags [div p]");
}

#[test]
fn test_stray_close_is_an_underflow() {
    let mut report = Report::new();
    lint_source(&mut report, "</div>", "");
    let underflows: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.message == "tag stack underflow")
        .collect();
    assert_eq!(underflows.len(), 1);
}
