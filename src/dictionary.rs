use crate::replacement::Replacement;
use crate::Map;
use std::collections::hash_map::Entry;

/// Patterns to look for, each with its [`Replacement`].
///
/// Patterns are matched case-insensitively as whole words. They may contain the wildcard
/// character (`%` by default), which matches any run of characters other than whitespace and
/// `<`, so a pattern made of just the wildcard replaces every word. Other characters are
/// interpreted as regular expression syntax unless [`crate::Censor::with_escape_patterns`] is
/// enabled.
///
/// Insertion order is kept. When a matched word fits several patterns, the earliest one wins.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: Vec<(String, Replacement)>,
    /// Position of each pattern in `entries`.
    index: Map<String, usize>,
}

impl Dictionary {
    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern. Re-inserting an identical pattern replaces its replacement but keeps its
    /// original position.
    pub fn insert(&mut self, pattern: impl Into<String>, replacement: impl Into<Replacement>) {
        let replacement = replacement.into();
        match self.index.entry(pattern.into()) {
            Entry::Occupied(occupied) => self.entries[*occupied.get()].1 = replacement,
            Entry::Vacant(vacant) => {
                self.entries.push((vacant.key().clone(), replacement));
                vacant.insert(self.entries.len() - 1);
            }
        }
    }

    /// Chainable version of [`Self::insert`].
    pub fn with(mut self, pattern: impl Into<String>, replacement: impl Into<Replacement>) -> Self {
        self.insert(pattern, replacement);
        self
    }

    /// Removes a pattern (compared exactly, not case-insensitively).
    pub fn remove(&mut self, pattern: &str) -> Option<Replacement> {
        let position = self.index.remove(pattern)?;
        let (_, replacement) = self.entries.remove(position);
        for later in self.index.values_mut() {
            if *later > position {
                *later -= 1;
            }
        }
        Some(replacement)
    }

    pub fn get(&self, pattern: &str) -> Option<&Replacement> {
        self.index.get(pattern).map(|&position| &self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Replacement)> {
        self.entries
            .iter()
            .map(|(pattern, replacement)| (pattern.as_str(), replacement))
    }

    /// Lowercases every pattern. Patterns that become equal collapse into one, at the position of
    /// the first and with the replacement of the last. Empty patterns are dropped, since they
    /// would match at every word boundary. A pattern that is only the wildcard is kept, and
    /// matches every word.
    pub(crate) fn normalized(&self) -> Vec<(String, &Replacement)> {
        let mut normalized: Vec<(String, &Replacement)> = Vec::with_capacity(self.entries.len());
        let mut positions = Map::<String, usize>::default();
        for (pattern, replacement) in &self.entries {
            if pattern.is_empty() {
                tracing::warn!("ignoring empty dictionary pattern");
                continue;
            }
            let folded = pattern.to_lowercase();
            match positions.entry(folded) {
                Entry::Occupied(occupied) => normalized[*occupied.get()].1 = replacement,
                Entry::Vacant(vacant) => {
                    normalized.push((vacant.key().clone(), replacement));
                    vacant.insert(normalized.len() - 1);
                }
            }
        }
        normalized
    }
}

impl<K: Into<String>, V: Into<Replacement>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Into<String>, V: Into<Replacement>> Extend<(K, V)> for Dictionary {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (pattern, replacement) in iter {
            self.insert(pattern, replacement);
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a str, &'a Replacement);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::{Replacement, StarReplacer};

    fn literal(replacement: &Replacement) -> &str {
        match replacement {
            Replacement::Literal(literal) => literal.as_str(),
            Replacement::Strategy(_) => panic!("expected literal"),
        }
    }

    #[test]
    fn insertion_order() {
        let dictionary = Dictionary::new()
            .with("Wordpress", "WordPress")
            .with("blog%", "blogs")
            .with("May 27, 2003", "June 25, 2006");
        assert_eq!(dictionary.len(), 3);
        assert_eq!(
            dictionary.iter().map(|(p, _)| p).collect::<Vec<_>>(),
            ["Wordpress", "blog%", "May 27, 2003"]
        );
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut dictionary: Dictionary = [("a", "1"), ("b", "2")].into_iter().collect();
        dictionary.insert("a", "3");
        let entries = dictionary
            .iter()
            .map(|(p, r)| (p, literal(r)))
            .collect::<Vec<_>>();
        assert_eq!(entries, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn remove() {
        let mut dictionary: Dictionary = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(dictionary.remove("a").as_ref().map(literal), Some("1"));
        assert!(dictionary.remove("a").is_none());
        assert_eq!(dictionary.get("c").map(literal), Some("3"));
        dictionary.insert("c", "4");
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("c").map(literal), Some("4"));
        assert!(dictionary.get("C").is_none());
    }

    #[test]
    fn normalized_case_collision() {
        let dictionary = Dictionary::new()
            .with("Net", "first")
            .with("mail", "email")
            .with("NET", "second")
            .with("", "nothing")
            .with("blog", Replacement::strategy(StarReplacer::default()));
        let normalized = dictionary.normalized();
        let patterns = normalized.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>();
        assert_eq!(patterns, ["net", "mail", "blog"]);
        assert_eq!(literal(normalized[0].1), "second");
    }

    #[test]
    fn normalized_unicode() {
        let dictionary = Dictionary::new().with("ÉCOLE", "school");
        assert_eq!(dictionary.normalized()[0].0, "école");
    }
}
