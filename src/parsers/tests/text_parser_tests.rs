use crate::parsers::text;

#[test]
fn test_join_fragments_drops_blank_pieces() {
    let joined = text::join_fragments(["Registration ", "\n  ", " opens", "in\nMay"]);
    assert_eq!(joined, "Registration opens in May");
}

#[test]
fn test_sentences_split_on_every_period() {
    let parts: Vec<&str> =
        text::sentences("Classes start soon. Registration opens May 1. Visit www.example.com")
            .collect();
    assert_eq!(
        parts,
        vec![
            "Classes start soon",
            "Registration opens May 1",
            "Visit www",
            "example",
            "com"
        ]
    );
}

#[test]
fn test_sentences_keep_empty_fragments() {
    let parts: Vec<&str> = text::sentences("a..b.").collect();
    assert_eq!(parts, vec!["a", "", "b", ""]);
}
