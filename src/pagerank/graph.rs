//! Link graph model built from raw corpus data.
//!
//! The corpus loader (external to this crate) supplies a map from page to
//! the set of pages it links to. Construction filters that raw data into
//! the invariant the ranking algorithms rely on: no self-links, and every
//! link target is itself a page of the graph.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Opaque page identifier (typically a document name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    /// Create a new page identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridrank::pagerank::PageId;
    ///
    /// let page = PageId::new("index.html");
    /// assert_eq!(page.as_str(), "index.html");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Directed graph of pages and the pages they link to.
///
/// Invariants, established at construction and never broken afterwards:
/// - every link target is itself a key of the graph
/// - no page links to itself
/// - the graph contains at least one page
///
/// A page whose link set ends up empty after filtering is a *dangling*
/// page; the two rank estimators give dangling pages special (and
/// intentionally different) treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkGraph {
    links: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl LinkGraph {
    /// Build a link graph from raw corpus data.
    ///
    /// Self-links and links to pages outside the corpus are dropped, not
    /// retained as dead ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] if the corpus has no pages.
    pub fn from_corpus(corpus: BTreeMap<PageId, BTreeSet<PageId>>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let universe: BTreeSet<PageId> = corpus.keys().cloned().collect();
        let links = corpus
            .into_iter()
            .map(|(page, targets)| {
                let filtered = targets
                    .into_iter()
                    .filter(|target| *target != page && universe.contains(target))
                    .collect();
                (page, filtered)
            })
            .collect();

        Ok(LinkGraph { links })
    }

    /// All pages in the graph, in sorted order.
    pub fn pages(&self) -> impl Iterator<Item = &PageId> {
        self.links.keys()
    }

    /// Number of pages in the universe; always at least 1.
    pub fn page_count(&self) -> usize {
        self.links.len()
    }

    /// The set of pages linked from `page`, or `None` for an unknown page.
    pub fn links(&self, page: &PageId) -> Option<&BTreeSet<PageId>> {
        self.links.get(page)
    }

    /// Whether the graph contains `page`.
    pub fn contains(&self, page: &PageId) -> bool {
        self.links.contains_key(page)
    }

    /// Iterate over `(page, links)` pairs in sorted page order.
    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &BTreeSet<PageId>)> {
        self.links.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a corpus map from `page -> [targets]` literals.
    pub(crate) fn corpus(entries: &[(&str, &[&str])]) -> BTreeMap<PageId, BTreeSet<PageId>> {
        entries
            .iter()
            .map(|(page, targets)| {
                (
                    PageId::from(*page),
                    targets.iter().map(|t| PageId::from(*t)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let result = LinkGraph::from_corpus(BTreeMap::new());
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_self_links_are_dropped() {
        let graph = LinkGraph::from_corpus(corpus(&[("a", &["a", "b"]), ("b", &[])])).unwrap();
        let links = graph.links(&PageId::from("a")).unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.contains("b"));
    }

    #[test]
    fn test_external_links_are_dropped() {
        let graph =
            LinkGraph::from_corpus(corpus(&[("a", &["b", "missing.html"]), ("b", &["a"])]))
                .unwrap();
        let links = graph.links(&PageId::from("a")).unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.contains("b"));
    }

    #[test]
    fn test_page_filtered_to_dangling() {
        // All of a's links point outside the corpus, leaving it dangling
        let graph = LinkGraph::from_corpus(corpus(&[("a", &["x", "y"]), ("b", &["a"])])).unwrap();
        assert!(graph.links(&PageId::from("a")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_page_lookup() {
        let graph = LinkGraph::from_corpus(corpus(&[("a", &[])])).unwrap();
        assert!(graph.links(&PageId::from("zzz")).is_none());
        assert!(!graph.contains(&PageId::from("zzz")));
    }

    #[test]
    fn test_pages_are_sorted() {
        let graph =
            LinkGraph::from_corpus(corpus(&[("c", &[]), ("a", &[]), ("b", &[])])).unwrap();
        let pages: Vec<&str> = graph.pages().map(PageId::as_str).collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }
}
