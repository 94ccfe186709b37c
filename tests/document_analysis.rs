//! Document analyzer scenarios and threshold boundaries.

use seo_audit::{analyze_document, Severity};

fn page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

fn titles(html: &str) -> Vec<String> {
    analyze_document(html, None)
        .issues
        .into_iter()
        .map(|i| i.title)
        .collect()
}

#[test]
fn test_missing_title_description_and_alt_scenario() {
    let html = page(
        r#"<meta name="viewport" content="width=device-width">"#,
        r#"<h1>Welcome</h1><img src="hero.png">"#,
    );
    let result = analyze_document(&html, None);

    let summary: Vec<(&str, Severity)> = result
        .issues
        .iter()
        .map(|i| (i.title.as_str(), i.severity))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Missing page title", Severity::High),
            ("Missing meta description", Severity::High),
            ("Images missing alt text", Severity::Medium),
            ("Missing structured data", Severity::Medium),
        ]
    );
    let ids: Vec<u32> = result.issues.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(result.issues[2].description.contains('1'));
    assert!(result.has_viewport);
    assert_eq!(result.heading_counts.h1, 1);
}

#[test]
fn test_title_boundaries() {
    let with_title = |len: usize| page(&format!("<title>{}</title>", "t".repeat(len)), "");

    assert!(titles(&with_title(9)).contains(&"Page title too short".to_string()));
    assert!(!titles(&with_title(10)).iter().any(|t| t.starts_with("Page title")));
    assert!(!titles(&with_title(60)).iter().any(|t| t.starts_with("Page title")));
    assert!(titles(&with_title(61)).contains(&"Page title too long".to_string()));
}

#[test]
fn test_description_boundaries() {
    let with_description = |len: usize| {
        page(
            &format!(r#"<meta name="description" content="{}">"#, "d".repeat(len)),
            "",
        )
    };

    assert!(titles(&with_description(49)).contains(&"Meta description too short".to_string()));
    assert!(!titles(&with_description(50))
        .iter()
        .any(|t| t.starts_with("Meta description")));
    assert!(!titles(&with_description(160))
        .iter()
        .any(|t| t.starts_with("Meta description")));
    assert!(titles(&with_description(161)).contains(&"Meta description too long".to_string()));
}

#[test]
fn test_heading_hierarchy_issues() {
    let html = page("", "<h2>Section</h2><h3>Sub</h3>");
    let issues = titles(&html);
    assert!(issues.contains(&"Missing H1 heading".to_string()));
    assert!(issues.contains(&"H2 headings without H1".to_string()));
    assert!(!issues.contains(&"H3 headings without H2".to_string()));

    let html = page("", "<h1>Top</h1><h3>Sub</h3>");
    let issues = titles(&html);
    assert!(issues.contains(&"H3 headings without H2".to_string()));
    assert!(!issues.contains(&"Missing H1 heading".to_string()));

    let html = page("", "<h1>One</h1><h1>Two</h1>");
    assert!(titles(&html).contains(&"Multiple H1 headings".to_string()));
}

#[test]
fn test_metadata_extraction() {
    let html = page(
        r#"<title>  Example Store  </title>
           <meta name="keywords" content="shoes, , Boots ,socks">
           <meta property="og:title" content="Store">
           <meta property="og:image" content="https://example.com/a.png">
           <meta property="og:type">
           <script type="application/ld+json">{"@type":"Store"}</script>"#,
        r#"<h1>Shoes</h1><h2></h2>"#,
    );
    let result = analyze_document(&html, None);

    assert_eq!(result.title, "Example Store");
    assert_eq!(result.keywords, vec!["shoes", "Boots", "socks"]);
    assert_eq!(result.open_graph.len(), 2);
    assert_eq!(result.open_graph.get("title").map(String::as_str), Some("Store"));
    assert!(result.has_structured_data);
    assert_eq!(result.heading_structure, vec!["H1: Shoes", "H2: Empty heading"]);
    assert!(!titles(&html).contains(&"Missing structured data".to_string()));
}

#[test]
fn test_image_and_link_partitions() {
    let html = page(
        "",
        r##"<img src="a.png" alt="A cat">
            <img src="b.png" alt="">
            <img src="c.png">
            <a href="#top">Top</a>
            <a href="/about">About</a>
            <a href="https://example.com/pricing">Pricing</a>
            <a href="https://other.org/">Other</a>
            <a href="contact.html">   </a>"##,
    );
    let result = analyze_document(&html, Some("https://example.com"));

    assert_eq!(result.images.total, 3);
    assert_eq!(result.images.with_alt, 1);
    assert_eq!(result.images.with_empty_alt, 1);
    assert_eq!(result.images.without_alt, 1);

    assert_eq!(result.links.total, 5);
    assert_eq!(result.links.internal, 4);
    assert_eq!(result.links.external, 1);
    assert_eq!(result.links.empty_text, 1);

    let without_reference = analyze_document(&html, None);
    assert_eq!(without_reference.links.internal, 3);
    assert_eq!(without_reference.links.external, 2);

    let links_issue = result
        .issues
        .iter()
        .find(|i| i.title == "Links without text")
        .expect("empty link issue");
    assert_eq!(links_issue.severity, Severity::Medium);
}

#[test]
fn test_missing_viewport_is_high() {
    let result = analyze_document(&page("", ""), None);
    let viewport = result
        .issues
        .iter()
        .find(|i| i.title == "Missing viewport meta tag")
        .expect("viewport issue");
    assert_eq!(viewport.severity, Severity::High);
}

#[test]
fn test_idempotent_and_ids_restart() {
    let html = page("<title>x</title>", "<h2>a</h2><img src=x>");
    let first = analyze_document(&html, Some("example.com"));
    let second = analyze_document(&html, Some("example.com"));
    assert_eq!(first, second);
    assert_eq!(first.issues.first().map(|i| i.id), Some(1));
}
