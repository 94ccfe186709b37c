//! Page landmark resolution and section attribution.
//!
//! Each landmark section resolves to at most one element: the first match of
//! the first selector in its fallback list that matches anything. Elements are
//! attributed to the first section (in `Section` order) whose landmark contains
//! them, or to `General`.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::models::Section;
use crate::utils::parse_selector_unsafe;

/// Fallback selector lists per landmark section, most specific first.
const LANDMARK_QUERIES: [(Section, &[&str]); 5] = [
    (
        Section::Header,
        &["header", r#"div[role="banner"]"#, ".header"],
    ),
    (Section::Navigation, &["nav", r#"div[role="navigation"]"#]),
    (
        Section::Content,
        &["main", r#"div[role="main"]"#, ".content"],
    ),
    (Section::Sidebar, &["aside", ".sidebar"]),
    (
        Section::Footer,
        &["footer", r#"div[role="contentinfo"]"#, ".footer"],
    ),
];

static LANDMARK_SELECTORS: LazyLock<Vec<(Section, Vec<Selector>)>> = LazyLock::new(|| {
    LANDMARK_QUERIES
        .iter()
        .map(|(section, queries)| {
            let selectors = queries
                .iter()
                .map(|q| parse_selector_unsafe(q, "LANDMARK_SELECTORS"))
                .collect();
            (*section, selectors)
        })
        .collect()
});

/// Resolved landmark element per section for one document.
#[derive(Debug)]
pub struct Landmarks<'a> {
    regions: Vec<(Section, ElementRef<'a>)>,
}

impl<'a> Landmarks<'a> {
    /// Resolves every landmark section against the document.
    pub fn resolve(document: &'a Html) -> Self {
        let regions = LANDMARK_SELECTORS
            .iter()
            .filter_map(|(section, selectors)| {
                selectors
                    .iter()
                    .find_map(|selector| document.select(selector).next())
                    .map(|element| (*section, element))
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Resolved landmarks: {:?}",
            regions.iter().map(|(s, _)| s.key()).collect::<Vec<_>>()
        );

        Self { regions }
    }

    /// Landmark element resolved for a section, if any.
    pub fn get(&self, section: Section) -> Option<ElementRef<'a>> {
        self.regions
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, element)| *element)
    }

    /// Section an element belongs to.
    pub fn section_of(&self, element: &ElementRef<'_>) -> Section {
        self.regions
            .iter()
            .find(|(_, landmark)| contains(landmark, element))
            .map(|(section, _)| *section)
            .unwrap_or(Section::General)
    }
}

/// Ancestor-or-self containment.
fn contains(ancestor: &ElementRef<'_>, element: &ElementRef<'_>) -> bool {
    element.id() == ancestor.id() || element.ancestors().any(|node| node.id() == ancestor.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_first<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
        let selector = parse_selector_unsafe(selector, "test");
        document.select(&selector).next().expect("element present")
    }

    #[test]
    fn test_resolves_semantic_landmarks() {
        let html = r#"<body><header></header><nav></nav><main></main><aside></aside><footer></footer></body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        for section in Section::landmarks() {
            assert!(landmarks.get(section).is_some(), "{section} missing");
        }
        assert!(landmarks.get(Section::General).is_none());
    }

    #[test]
    fn test_resolves_role_and_class_fallbacks() {
        let html = r#"<body>
            <div role="banner"></div>
            <div role="navigation"></div>
            <div class="content"></div>
            <div class="sidebar"></div>
            <div role="contentinfo"></div>
        </body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        let header = landmarks.get(Section::Header).expect("header");
        assert_eq!(header.value().attr("role"), Some("banner"));
        let content = landmarks.get(Section::Content).expect("content");
        assert!(content.value().classes().any(|c| c == "content"));
        assert!(landmarks.get(Section::Sidebar).is_some());
        assert!(landmarks.get(Section::Footer).is_some());
    }

    #[test]
    fn test_semantic_element_wins_over_fallback() {
        let html = r#"<body><div class="header" id="fallback"></div><header id="real"></header></body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        let header = landmarks.get(Section::Header).expect("header");
        assert_eq!(header.value().id(), Some("real"));
    }

    #[test]
    fn test_section_of_nested_element() {
        let html = r#"<body><footer><div><img id="f" src="a.png"></div></footer><img id="g" src="b.png"></body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        assert_eq!(
            landmarks.section_of(&select_first(&document, "#f")),
            Section::Footer
        );
        assert_eq!(
            landmarks.section_of(&select_first(&document, "#g")),
            Section::General
        );
    }

    #[test]
    fn test_landmark_itself_is_contained() {
        let html = r#"<body><nav id="n"></nav></body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        assert_eq!(
            landmarks.section_of(&select_first(&document, "#n")),
            Section::Navigation
        );
    }

    #[test]
    fn test_first_containing_landmark_in_fixed_order_wins() {
        // nav inside header: header is tested first
        let html = r#"<body><header><nav><a id="l" href="/">Home</a></nav></header></body>"#;
        let document = Html::parse_document(html);
        let landmarks = Landmarks::resolve(&document);
        assert_eq!(
            landmarks.section_of(&select_first(&document, "#l")),
            Section::Header
        );
    }
}
