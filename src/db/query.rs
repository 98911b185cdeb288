//! Query filters for document lookups
//!
//! A [`DocumentFilter`] selects the documents a paged query walks over.
//! Text search matches the title or the author case-insensitively; the
//! search text is used as a regular expression when it is one, and as a
//! literal substring otherwise.

use crate::Document;
use regex::{Regex, RegexBuilder};

/// Selector applied by [`DocumentStore::query`](super::DocumentStore::query)
#[derive(Debug, Clone)]
pub enum DocumentFilter {
    /// Every document, in natural order
    All,
    /// Documents whose title or author matches the pattern
    TitleOrAuthor(Regex),
}

impl DocumentFilter {
    /// Filter matching every document
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Case-insensitive match over title and author
    ///
    /// # Examples
    /// ```
    /// use nautilus::{db::DocumentFilter, Document};
    ///
    /// let filter = DocumentFilter::title_or_author("hugo");
    /// let doc = Document::new("00000", "Les Misérables", vec![]).with_author("Victor Hugo");
    /// assert!(filter.matches(&doc));
    /// ```
    #[must_use]
    pub fn title_or_author(text: &str) -> Self {
        let regex = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(text))
                    .case_insensitive(true)
                    .build()
            });

        match regex {
            Ok(regex) => Self::TitleOrAuthor(regex),
            // An escaped pattern only fails on the size limit
            Err(e) => {
                tracing::warn!("Search pattern rejected ({e}), matching everything");
                Self::All
            }
        }
    }

    /// Whether the document passes this filter
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::All => true,
            Self::TitleOrAuthor(regex) => {
                regex.is_match(&document.title) || regex.is_match(&document.author)
            }
        }
    }
}

impl Default for DocumentFilter {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, author: &str) -> Document {
        Document::new("00000", title, vec!["a.pdf".into()]).with_author(author)
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(DocumentFilter::all().matches(&doc("", "")));
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let filter = DocumentFilter::title_or_author("NAUTILUS");
        assert!(filter.matches(&doc("Twenty Thousand Leagues: the nautilus", "")));
    }

    #[test]
    fn test_matches_author() {
        let filter = DocumentFilter::title_or_author("verne");
        assert!(filter.matches(&doc("Twenty Thousand Leagues", "Jules Verne")));
        assert!(!filter.matches(&doc("Twenty Thousand Leagues", "Anonymous")));
    }

    #[test]
    fn test_description_is_not_searched() {
        let filter = DocumentFilter::title_or_author("ocean");
        let d = doc("Title", "Author").with_description("ocean voyage");
        assert!(!filter.matches(&d));
    }

    #[test]
    fn test_pattern_is_used_as_regex() {
        let filter = DocumentFilter::title_or_author("^chap.*2$");
        assert!(filter.matches(&doc("Chapter 2", "")));
        assert!(!filter.matches(&doc("Chapter 3", "")));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let filter = DocumentFilter::title_or_author("(draft");
        assert!(matches!(filter, DocumentFilter::TitleOrAuthor(_)));
        assert!(filter.matches(&doc("Report (draft v2)", "")));
        assert!(!filter.matches(&doc("Report draft", "")));
    }

    #[test]
    fn test_empty_text_matches_everything() {
        let filter = DocumentFilter::title_or_author("");
        assert!(filter.matches(&doc("anything", "anyone")));
    }
}
