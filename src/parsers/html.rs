use crate::parsers::text;
use crate::parsers::{Anchor, ParseResult};
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never renders
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Parses HTML and collects the text and anchors of the first element matching `region`.
///
/// Falls back to the whole document when nothing matches. html5ever recovers from any
/// malformed input, so this never fails; garbage in yields an empty result.
pub fn parse(html: &str, region: &Selector) -> ParseResult {
    let doc = Html::parse_document(html);

    let (root, region_found) = match doc.select(region).next() {
        Some(element) => (element, true),
        None => {
            ::log::debug!("Content region not found, falling back to whole document");
            (doc.root_element(), false)
        }
    };

    let content = visible_text(root);
    let anchors = anchors(root);

    ::log::debug!(
        "HTML parser found {} chars of text and {} anchors",
        content.len(),
        anchors.len()
    );

    ParseResult {
        content,
        anchors,
        region_found,
    }
}

/// Joins every rendered text node below `root` with single spaces
pub fn visible_text(root: ElementRef<'_>) -> String {
    let pieces = root.descendants().filter_map(|node| match node.value() {
        Node::Text(t) => {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
            });
            (!hidden).then_some(&**t)
        }
        _ => None,
    });

    text::join_fragments(pieces)
}

/// Collects `<a href>` elements below `root` in document order
pub fn anchors(root: ElementRef<'_>) -> Vec<Anchor> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
        .filter_map(|el| {
            el.value().attr("href").map(|href| Anchor {
                text: text::join_fragments(el.text()),
                href: href.trim().to_string(),
            })
        })
        .collect()
}
