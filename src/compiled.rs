use crate::censor::Options;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::replacement::Replacement;
use crate::wildcard::{expand, expand_escaped};
use itertools::Itertools;
use regex::{Captures, Regex};

/// A [`Dictionary`] turned into patterns, ready to censor any number of texts.
///
/// Obtain one from [`crate::Censor::compile`].
#[derive(Clone, Debug)]
pub struct CompiledDictionary {
    /// Alternation of every entry, bounded by word boundaries. `None` if there are no entries.
    scanner: Option<Regex>,
    entries: Vec<CompiledEntry>,
}

#[derive(Clone, Debug)]
struct CompiledEntry {
    /// Normalized, wildcard-expanded pattern. Both `matcher` and the scanner are built from it.
    pattern: String,
    /// `pattern` anchored to the whole matched word.
    matcher: Regex,
    replacement: Replacement,
}

impl CompiledDictionary {
    pub(crate) fn new(dictionary: &Dictionary, options: &Options) -> Result<Self> {
        let entries = dictionary
            .normalized()
            .into_iter()
            .map(|(key, replacement)| {
                let pattern = if options.escape_patterns {
                    expand_escaped(&key, options.wildcard)
                } else {
                    expand(&key, options.wildcard)
                };
                let matcher = match Regex::new(&format!("(?i)^(?:{})$", pattern)) {
                    Ok(matcher) => matcher,
                    Err(source) => return Err(Error::InvalidPattern { pattern, source }),
                };
                Ok(CompiledEntry {
                    pattern,
                    matcher,
                    replacement: replacement.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let scanner = if entries.is_empty() {
            None
        } else {
            let alternation = entries
                .iter()
                .map(|entry| format!("(?:{})", entry.pattern))
                .join("|");
            let scanner = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                .map_err(Error::CombinedPattern)?;
            Some(scanner)
        };

        tracing::debug!(patterns = entries.len(), "compiled dictionary");

        Ok(Self { scanner, entries })
    }

    /// Number of distinct patterns after case folding.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The expanded patterns, in the order they are tried.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.pattern.as_str())
    }

    /// Censors `text` in a single left to right pass. Replacements are never themselves censored.
    pub fn replace(&self, text: &str) -> String {
        self.replace_and_count(text).0
    }

    /// See [`Self::replace`]. Also returns how many words were replaced.
    pub fn replace_and_count(&self, text: &str) -> (String, usize) {
        let scanner = match &self.scanner {
            Some(scanner) => scanner,
            None => return (text.to_owned(), 0),
        };

        let mut count = 0;
        let replaced = scanner.replace_all(text, |captures: &Captures<'_>| {
            let word = &captures[0];
            match self.resolve(word) {
                Some(entry) => {
                    count += 1;
                    tracing::trace!(word, pattern = %entry.pattern, "replacing");
                    entry.replacement.apply(word).into_owned()
                }
                None => {
                    tracing::debug!(word, "no pattern matched the whole word, leaving it");
                    word.to_owned()
                }
            }
        });
        (replaced.into_owned(), count)
    }

    /// Finds the first entry, in dictionary order, whose pattern accepts the entire word. The
    /// scanner can't say which alternative matched, and with wildcards the word itself is not
    /// a key.
    fn resolve(&self, word: &str) -> Option<&CompiledEntry> {
        let lowered = word.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.matcher.is_match(&lowered))
    }
}
