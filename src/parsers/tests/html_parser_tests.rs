use crate::parsers::{Anchor, html};
use scraper::Selector;

fn region() -> Selector {
    Selector::parse("section#signup").unwrap()
}

#[test]
fn test_region_text_and_anchors() {
    let page = r#"
        <html><body>
          <p>Outside the region</p>
          <section id="signup">
            <h2>Sign up   for classes</h2>
            <p>Registration opens <b>May 1</b>.</p>
            <a href=" /esl/register ">Register
               here</a>
            <a>No href</a>
          </section>
        </body></html>"#;

    let result = html::parse(page, &region());
    assert!(result.region_found);
    assert_eq!(
        result.content,
        "Sign up for classes Registration opens May 1 . Register here No href"
    );
    assert_eq!(
        result.anchors,
        vec![Anchor {
            text: "Register here".to_string(),
            href: "/esl/register".to_string(),
        }]
    );
}

#[test]
fn test_falls_back_to_whole_document() {
    let page = r#"<html><body><p>Enroll today</p><a href="/enroll">Enroll</a></body></html>"#;

    let result = html::parse(page, &region());
    assert!(!result.region_found);
    assert_eq!(result.content, "Enroll today Enroll");
    assert_eq!(result.anchors.len(), 1);
}

#[test]
fn test_hidden_text_is_skipped() {
    let page = r#"
        <section id="signup">
          <script>var registration = "opens";</script>
          <style>.register { color: red }</style>
          <p>Visible</p>
        </section>"#;

    let result = html::parse(page, &region());
    assert_eq!(result.content, "Visible");
}

#[test]
fn test_malformed_markup_does_not_fail() {
    let result = html::parse("<section id=signup><p>Register <a href='/x'>now</p", &region());
    assert!(result.region_found);
    assert!(result.content.contains("Register"));
    assert_eq!(result.anchors[0].href, "/x");

    let empty = html::parse("", &region());
    assert!(empty.content.is_empty());
    assert!(empty.anchors.is_empty());
}

#[test]
fn test_inline_break_joins_anchor_text_with_space() {
    let result = html::parse(
        r#"<section id="signup"><a href="/r">Sign<br>Up</a></section>"#,
        &region(),
    );
    assert_eq!(result.anchors[0].text, "Sign Up");
    assert_eq!(result.content, "Sign Up");
}
