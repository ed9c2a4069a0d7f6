//! Section extractor for Sphinx-generated pages
//!
//! A Sphinx page is a flat-looking document whose content lives in `<div>`
//! containers carrying a `section` class and a stable `id`. This module
//! slices one parsed page into per-section text records and finds the
//! "next page" navigation link that chains the document tree together.

use crate::ExtractionError;
use scraper::{ElementRef, Html, Node, Selector};

/// One extracted section, in fragment form
///
/// The `id` becomes the URL fragment once the caller combines it with the
/// page's public URL; the extractor itself never sees absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The section container's id attribute
    pub id: String,

    /// Composed title: the page title alone, or `"{page} - {section}"`
    pub title: String,

    /// Newline-joined, whitespace-normalized section content
    pub text: String,
}

/// Everything extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Sections in document order
    pub sections: Vec<Section>,

    /// Raw href of the "next page" link, if the chain continues
    pub next: Option<String>,
}

/// Extracts all sections and the next-page link from one page's HTML
///
/// The page title is only required once the page has at least one section;
/// a sectionless page without a `<title>` still succeeds and still reports
/// its next link.
pub fn extract_page(html: &str) -> Result<ExtractedPage, ExtractionError> {
    let mut document = Html::parse_document(html);

    // Script and style bodies must never leak into section text.
    strip_elements(&mut document, &["script", "style"]);

    let page_title = page_title(&document);
    let mut sections = Vec::new();

    for (index, container) in section_containers(&document).into_iter().enumerate() {
        let id = container
            .value()
            .attr("id")
            .ok_or(ExtractionError::MissingSectionId { index })?;

        let text = section_text(&container);

        let page_title = page_title
            .as_deref()
            .ok_or(ExtractionError::MissingTitle)?;

        let section_title =
            section_heading(&container).ok_or_else(|| ExtractionError::MissingHeading {
                section_id: id.to_string(),
            })?;

        let title = if section_title == page_title {
            page_title.to_string()
        } else {
            format!("{} - {}", page_title, section_title)
        };

        sections.push(Section {
            id: id.to_string(),
            title,
            text,
        });
    }

    let next = next_link(&document);

    Ok(ExtractedPage { sections, next })
}

/// Detaches every element with one of the given names from the parsed tree
fn strip_elements(document: &mut Html, names: &[&str]) {
    let doomed: Vec<_> = document
        .tree
        .nodes()
        .filter(|node| {
            node.value()
                .as_element()
                .map_or(false, |element| names.contains(&element.name()))
        })
        .map(|node| node.id())
        .collect();

    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Reads the page title: `<title>` text before the first em dash, trimmed
///
/// Sphinx renders titles as `Page Name — Project Documentation`; only the
/// first separator splits, because page names may contain further dashes.
fn page_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect();
    let before_dash = text.split('—').next().unwrap_or("");
    Some(before_dash.trim().to_string())
}

/// Collects all section containers in document order
///
/// A container is any `<div>` whose class attribute contains `section` (the
/// generator also emits nested sub-section divs, which this matches at their
/// own position in document order). Generated `expandjson` blocks carry the
/// section class too but are never emitted as records.
fn section_containers<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    let mut containers = Vec::new();

    if let Ok(selector) = Selector::parse("div[class*='section']") {
        for element in document.select(&selector) {
            if class_contains(&element, "expandjson") {
                continue;
            }
            containers.push(element);
        }
    }

    containers
}

/// Returns true if the element's class attribute contains the needle
fn class_contains(element: &ElementRef, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |class| class.contains(needle))
}

/// Collects a section's own text from its direct children
///
/// This is deliberately not a recursive text dump of the subtree: a child
/// that is itself a section container is skipped entirely, because the main
/// enumeration reaches it on its own and a recursive dump would duplicate
/// its text in the parent. Every chunk, including empty ones, takes a slot
/// in the newline join, so inter-element whitespace shows up as blank lines
/// exactly as it does in the generator's own output.
fn section_text(section: &ElementRef) -> String {
    let mut chunks = Vec::new();

    for child in section.children() {
        let text = match child.value() {
            Node::Text(text) => text.text.to_string(),
            Node::Element(element) => {
                if element
                    .attr("class")
                    .map_or(false, |class| class.contains("section"))
                {
                    // Nested sub-section: collected independently.
                    continue;
                }
                match ElementRef::wrap(child) {
                    Some(element) => element.text().collect::<String>(),
                    None => continue,
                }
            }
            _ => continue,
        };

        chunks.push(normalize_chunk(&text));
    }

    chunks.join("\n")
}

/// Normalizes one chunk of rendered text
///
/// Per line: trim, strip trailing pilcrows (the generator's anchor-link
/// glyph), split on two-space runs (the generator pads adjacent inline
/// elements with wide gaps), trim each phrase, drop empty phrases. The
/// surviving phrases are rejoined with single newlines.
fn normalize_chunk(text: &str) -> String {
    let mut phrases = Vec::new();

    for line in text.lines() {
        let line = line.trim().trim_end_matches('¶');
        for phrase in line.split("  ") {
            let phrase = phrase.trim();
            if !phrase.is_empty() {
                phrases.push(phrase);
            }
        }
    }

    phrases.join("\n")
}

/// Finds the section's own heading among its direct children
///
/// Prefers the highest heading rank (`h1` before `h2`, down to `h5`) and
/// strips any trailing pilcrow from its text.
fn section_heading(section: &ElementRef) -> Option<String> {
    for rank in ["h1", "h2", "h3", "h4", "h5"] {
        for child in section.children() {
            if let Some(element) = ElementRef::wrap(child) {
                if element.value().name() == rank {
                    let text: String = element.text().collect();
                    return Some(text.trim_end_matches('¶').to_string());
                }
            }
        }
    }

    None
}

/// Finds the "next page" navigation link
///
/// Sphinx marks it with the `n` access key; its raw (usually relative) href
/// is returned untouched for the driver to resolve.
fn next_link(document: &Html) -> Option<String> {
    let selector = Selector::parse("a[accesskey='n']").ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.to_string())
}
