use std::collections::HashSet;

/// Insertion-ordered string set.
///
/// First-insert order is load-bearing: the response echoes the first 10
/// expanded keywords, so discovery order must survive deduplication.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword; returns false if it was already present.
    pub fn insert(&mut self, keyword: String) -> bool {
        if self.seen.contains(&keyword) {
            return false;
        }
        self.seen.insert(keyword.clone());
        self.ordered.push(keyword);
        true
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.seen.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// First `n` keywords in insertion order, cloned.
    pub fn sample(&self, n: usize) -> Vec<String> {
        self.ordered.iter().take(n).cloned().collect()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
