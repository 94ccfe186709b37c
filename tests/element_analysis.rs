//! Element analyzer: section attribution, heading pass, thresholds.

use seo_audit::{analyze_elements, ElementAnalysisResult, Section, Severity};
use strum::IntoEnumIterator;

const GOOD_TITLE: &str = "A well sized page title for tests";

fn page(head: &str, body: &str) -> String {
    format!("<html><head>{head}</head><body>{body}</body></html>")
}

fn good_head() -> String {
    format!(
        r#"<title>{GOOD_TITLE}</title><meta name="description" content="{}">"#,
        "d".repeat(100)
    )
}

fn score(result: &ElementAnalysisResult, section: Section) -> i32 {
    result.section(section).expect("section present").score
}

fn issues_in(result: &ElementAnalysisResult, section: Section) -> Vec<&str> {
    result
        .element_issues
        .iter()
        .filter(|i| i.section == section)
        .map(|i| i.issue.as_str())
        .collect()
}

#[test]
fn test_image_in_footer_and_outside_landmarks() {
    let html = page(
        &good_head(),
        r#"<h1>Title</h1><footer><div><img src="logo.png"></div></footer><img src="stray.png">"#,
    );
    let result = analyze_elements(&html, "https://example.com");

    assert_eq!(issues_in(&result, Section::Footer), vec!["Image is missing an alt attribute"]);
    assert_eq!(issues_in(&result, Section::General), vec!["Image is missing an alt attribute"]);
    assert_eq!(score(&result, Section::Footer), 90);
    assert_eq!(score(&result, Section::General), 90);
    assert_eq!(score(&result, Section::Header), 100);
    assert_eq!(result.url, "https://example.com");
}

#[test]
fn test_landmark_fallback_selectors() {
    let html = page(
        &good_head(),
        r#"<div role="banner"><h1>Brand</h1></div>
           <div class="sidebar"><img src="ad.png"></div>
           <div role="contentinfo"><a href="/x">click here</a></div>"#,
    );
    let result = analyze_elements(&html, "");

    assert_eq!(issues_in(&result, Section::Sidebar).len(), 1);
    assert_eq!(
        issues_in(&result, Section::Footer),
        vec!["Link text \"click here\" is not descriptive"]
    );
    assert!(issues_in(&result, Section::Header).is_empty());
}

#[test]
fn test_first_landmark_of_each_kind_wins() {
    let html = page(
        &good_head(),
        r#"<h1>x</h1><footer></footer><footer><img src="late.png"></footer>"#,
    );
    let result = analyze_elements(&html, "");
    assert!(issues_in(&result, Section::Footer).is_empty());
    assert_eq!(issues_in(&result, Section::General).len(), 1);
}

#[test]
fn test_skipped_heading_level_h1_to_h4() {
    let html = page(&good_head(), "<main><h1>Top</h1><h4>Deep</h4></main>");
    let result = analyze_elements(&html, "");

    let skips: Vec<_> = result
        .element_issues
        .iter()
        .filter(|i| i.issue.contains("skipped"))
        .collect();
    assert_eq!(skips.len(), 1);
    assert_eq!(skips[0].severity, Severity::Low);
    assert_eq!(skips[0].issue, "Heading level skipped from H1 to H4");
    assert_eq!(skips[0].section, Section::Content);
    assert_eq!(score(&result, Section::Content), 95);
}

#[test]
fn test_skip_detection_is_sequential_across_sections() {
    let html = page(&good_head(), "<header><h1>Brand</h1></header><aside><h3>Related</h3></aside>");
    let result = analyze_elements(&html, "");
    assert_eq!(
        issues_in(&result, Section::Sidebar),
        vec!["Heading level skipped from H1 to H3"]
    );
}

#[test]
fn test_two_h1_in_header() {
    let html = page(&good_head(), "<header><h1>One</h1><h1>Two</h1></header>");
    let result = analyze_elements(&html, "");

    let multiple: Vec<_> = result
        .element_issues
        .iter()
        .filter(|i| i.issue == "Multiple H1 headings")
        .collect();
    assert_eq!(multiple.len(), 1);
    assert_eq!(multiple[0].severity, Severity::Medium);
    assert_eq!(score(&result, Section::Header), 85);
}

#[test]
fn test_no_h1_charges_main_content() {
    let html = page(&good_head(), "<main><h2>Only h2</h2></main>");
    let result = analyze_elements(&html, "");

    let synthetic = result
        .element_issues
        .iter()
        .find(|i| i.selector == "body")
        .expect("synthetic finding");
    assert_eq!(synthetic.severity, Severity::High);
    assert_eq!(synthetic.section, Section::Content);
    assert_eq!(score(&result, Section::Content), 80);
}

#[test]
fn test_description_boundaries() {
    let header_issues = |len: usize| {
        let head = format!(
            r#"<title>{GOOD_TITLE}</title><meta name="description" content="{}">"#,
            "d".repeat(len)
        );
        let result = analyze_elements(&page(&head, "<h1>x</h1>"), "");
        issues_in(&result, Section::Header)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(header_issues(69), vec!["Meta description is too short (69 characters)"]);
    assert!(header_issues(70).is_empty());
    assert!(header_issues(71).is_empty());
    assert!(header_issues(160).is_empty());
    assert_eq!(header_issues(161), vec!["Meta description is too long (161 characters)"]);
}

#[test]
fn test_missing_title_and_description_penalties() {
    let result = analyze_elements(&page("", "<h1>x</h1>"), "");
    assert_eq!(
        issues_in(&result, Section::Header),
        vec!["Missing page title", "Missing meta description"]
    );
    assert_eq!(score(&result, Section::Header), 50);
}

#[test]
fn test_long_paragraph_and_links() {
    let html = page(
        &good_head(),
        &format!(
            r#"<h1>x</h1><main><p>{}</p><p>short</p><a href="/a"> </a><a href="/b">READ MORE</a><a href="/c">Pricing</a></main>"#,
            "p".repeat(301)
        ),
    );
    let result = analyze_elements(&html, "");
    let content = issues_in(&result, Section::Content);
    assert_eq!(
        content,
        vec![
            "Link has no text",
            "Link text \"READ MORE\" is not descriptive",
            "Paragraph is very long (301 characters)",
        ]
    );
    assert_eq!(score(&result, Section::Content), 100 - 10 - 10 - 5);
}

#[test]
fn test_scores_clamped_at_zero() {
    let images: String = (0..15).map(|i| format!(r#"<img src="{i}.png">"#)).collect();
    let html = page(&good_head(), &format!("<h1>x</h1><footer>{images}</footer>"));
    let result = analyze_elements(&html, "");
    assert_eq!(score(&result, Section::Footer), 0);
    assert_eq!(issues_in(&result, Section::Footer).len(), 15);
}

#[test]
fn test_six_sections_and_counters() {
    let html = page(&good_head(), r#"<h1>x</h1><img src="a.png" alt="a"><p>text</p><a href="/">home</a>"#);
    let result = analyze_elements(&html, "");

    let sections: Vec<Section> = result.section_analysis.iter().map(|s| s.section).collect();
    assert_eq!(sections, Section::iter().collect::<Vec<_>>());
    let labels: Vec<&str> = result.section_analysis.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Header", "Navigation", "Main Content", "Sidebar", "Footer", "General"]
    );
    assert_eq!(result.total_elements, 2 + 4);
    assert_eq!(result.analyzed_elements, result.total_elements);
    assert!(result.element_issues.is_empty());
}

#[test]
fn test_idempotent() {
    let html = page("", "<h2>a</h2><h5>b</h5><img src=x><a href=#>click here</a>");
    assert_eq!(analyze_elements(&html, "u"), analyze_elements(&html, "u"));
}
