use crate::dictionary::Dictionary;
use crate::replacement::Replacement;
use crate::Map;
use lazy_static::lazy_static;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

lazy_static! {
    static ref BUILTIN: Strategies = {
        let mut strategies = Strategies::new();
        strategies.insert(StarReplacer::NAME, StarReplacer::default());
        strategies.insert(TokenReplacer::NAME, TokenReplacer::default());
        strategies
    };
}

/// Computes the replacement for a matched word.
///
/// Implementations must be deterministic: the same word always yields the same replacement.
/// Closures of the form `Fn(&str) -> String` are replacers too.
pub trait Replacer: Send + Sync {
    /// Returns the text to substitute for `word`, which is passed with its original case.
    fn replace(&self, word: &str) -> String;
}

impl<F: Fn(&str) -> String + Send + Sync> Replacer for F {
    fn replace(&self, word: &str) -> String {
        self(word)
    }
}

/// Masks every character of the word, so `"blogging"` becomes `"********"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StarReplacer {
    mask: char,
}

impl StarReplacer {
    /// Name under which the default [`Strategies`] registers this replacer.
    pub const NAME: &'static str = "star";

    pub fn new(mask: char) -> Self {
        Self { mask }
    }

    pub fn mask(&self) -> char {
        self.mask
    }
}

impl Default for StarReplacer {
    fn default() -> Self {
        Self::new('*')
    }
}

impl Replacer for StarReplacer {
    fn replace(&self, word: &str) -> String {
        std::iter::repeat(self.mask)
            .take(word.chars().count())
            .collect()
    }
}

/// Replaces any word with the same token, hiding its length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenReplacer {
    token: String,
}

impl TokenReplacer {
    /// Name under which the default [`Strategies`] registers this replacer.
    pub const NAME: &'static str = "token";
    /// The default token.
    pub const DEFAULT_TOKEN: &'static str = "@)%#!#^&*";

    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Default for TokenReplacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKEN)
    }
}

impl Replacer for TokenReplacer {
    fn replace(&self, _word: &str) -> String {
        self.token.clone()
    }
}

/// Named replacers, for building dictionaries out of plain strings (e.g. a config file) where
/// some values name a strategy rather than a literal replacement.
///
/// The default set contains [`StarReplacer`] as `"star"` and [`TokenReplacer`] as `"token"`.
#[derive(Clone)]
pub struct Strategies(Map<String, Arc<dyn Replacer>>);

impl Default for Strategies {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl Debug for Strategies {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names = self.0.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_tuple("Strategies").field(&names).finish()
    }
}

impl Strategies {
    /// Empty.
    pub fn new() -> Self {
        Self(Map::default())
    }

    /// Registers a replacer, overwriting any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, replacer: impl Replacer + 'static) {
        self.0.insert(name.into(), Arc::new(replacer));
    }

    /// Unregisters a replacer, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Replacer>> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Replacer>> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets a dictionary value. A registered name resolves to its replacer, and anything
    /// else (including misspelled names) is a literal replacement.
    pub fn resolve(&self, value: &str) -> Replacement {
        match self.get(value) {
            Some(replacer) => Replacement::Strategy(Arc::clone(replacer)),
            None => Replacement::Literal(value.to_owned()),
        }
    }

    /// Builds a dictionary from string pairs, resolving each value with [`Self::resolve`].
    pub fn resolve_dictionary<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Dictionary
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|(pattern, value)| (pattern, self.resolve(value.as_ref())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Replacer, StarReplacer, Strategies, TokenReplacer};
    use crate::Replacement;
    use rand::distributions::{Alphanumeric, DistString};
    use rand::{thread_rng, Rng};

    #[test]
    fn star_preserves_length() {
        let star = StarReplacer::default();
        assert_eq!(star.replace("blogging"), "********");
        assert_eq!(star.replace(""), "");
        // Characters, not bytes.
        assert_eq!(star.replace("Ünïcödé"), "*******");
        assert_eq!(StarReplacer::new('#').replace("abc"), "###");

        let mut rng = thread_rng();
        for _ in 0..100 {
            let len = rng.gen_range(0..32);
            let word = Alphanumeric.sample_string(&mut rng, len);
            assert_eq!(star.replace(&word).chars().count(), len);
        }
    }

    #[test]
    fn token_ignores_word() {
        let token = TokenReplacer::default();
        assert_eq!(token.replace("2003"), "@)%#!#^&*");
        assert_eq!(token.replace("a much longer word"), "@)%#!#^&*");
        assert_eq!(TokenReplacer::new("[redacted]").replace("x"), "[redacted]");
    }

    #[test]
    fn closure() {
        let upper = |word: &str| word.to_uppercase();
        assert_eq!(Replacer::replace(&upper, "shout"), "SHOUT");
    }

    #[test]
    fn resolve() {
        let strategies = Strategies::default();
        assert!(strategies.contains(StarReplacer::NAME));
        assert!(strategies.contains(TokenReplacer::NAME));

        assert!(matches!(strategies.resolve("star"), Replacement::Strategy(_)));
        assert!(matches!(
            strategies.resolve("StarReplacer"),
            Replacement::Literal(ref s) if s == "StarReplacer"
        ));
        assert!(matches!(
            Strategies::new().resolve("star"),
            Replacement::Literal(ref s) if s == "star"
        ));
    }

    #[test]
    fn customize() {
        let mut strategies = Strategies::default();
        strategies.insert("reverse", |word: &str| word.chars().rev().collect::<String>());
        strategies.remove(TokenReplacer::NAME);
        assert_eq!(strategies.len(), 2);

        assert_eq!(strategies.resolve("reverse").apply("abc"), "cba");
        assert_eq!(strategies.resolve("token").apply("abc"), "token");

        // The shared default is unaffected.
        assert!(Strategies::default().contains(TokenReplacer::NAME));
    }
}
