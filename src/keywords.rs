use regex::{Regex, RegexBuilder};

/// A keyword compiled into a case-insensitive substring matcher
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    pattern: Regex,
}

impl Keyword {
    pub fn new(phrase: &str) -> Result<Self, regex::Error> {
        let phrase = phrase.trim().to_lowercase();
        let pattern = RegexBuilder::new(&regex::escape(&phrase))
            .case_insensitive(true)
            .build()?;

        Ok(Self { phrase, pattern })
    }

    /// The keyword as configured, lowercased
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// True if the keyword occurs anywhere in `text`, ignoring case
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// An ordered list of keywords. Order matters: extraction walks keywords in list order.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Compile a keyword set. Blank entries are skipped.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self, regex::Error> {
        let mut keywords = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if phrase.as_ref().trim().is_empty() {
                continue;
            }
            keywords.push(Keyword::new(phrase.as_ref())?);
        }

        Ok(Self { keywords })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// True if any keyword occurs in any of the given texts
    pub fn matches_any(&self, texts: &[&str]) -> bool {
        self.keywords
            .iter()
            .any(|kw| texts.iter().any(|text| kw.is_match(text)))
    }
}
