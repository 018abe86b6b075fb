use crate::compiled::CompiledDictionary;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::wildcard::DEFAULT_WILDCARD;

/// Settings that affect how dictionary patterns are compiled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Stands for any run of non-whitespace characters other than `<`.
    ///
    /// Any character is accepted. Choosing one that also appears as regex syntax in your
    /// patterns means it will be expanded there too. Patterns are lowercased before the
    /// wildcard is expanded, so an uppercase letter never acts as a wildcard and only matches
    /// itself (case-insensitively).
    pub wildcard: char,
    /// Treat patterns as literal text (apart from the wildcard) instead of regular expressions.
    pub escape_patterns: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            escape_patterns: false,
        }
    }
}

/// Censor replaces dictionary patterns in text, matching whole words regardless of case.
///
/// ```
/// use recensor::{Censor, Dictionary, Replacement, StarReplacer};
///
/// let dictionary = Dictionary::new()
///     .with("Wordpress", "WordPress")
///     .with("blog%", Replacement::strategy(StarReplacer::default()));
///
/// let censored = Censor::new()
///     .replace(&dictionary, "I run a wordpress blog.")
///     .unwrap();
/// assert_eq!(censored, "I run a WordPress ****.");
/// ```
///
/// A `Censor` only carries [`Options`]; each call compiles the dictionary anew. Use
/// [`Censor::compile`] to censor many texts with the same dictionary.
#[derive(Clone, Debug, Default)]
pub struct Censor {
    options: Options,
}

impl Censor {
    /// A censor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Sets the wildcard character.
    ///
    /// The default is `'%'`.
    pub fn with_wildcard_character(&mut self, wildcard: char) -> &mut Self {
        self.options.wildcard = wildcard;
        self
    }

    /// Non-chaining version of [`Self::with_wildcard_character`].
    pub fn set_wildcard_character(&mut self, wildcard: char) {
        self.options.wildcard = wildcard;
    }

    pub fn wildcard_character(&self) -> char {
        self.options.wildcard
    }

    /// Escape regular expression syntax in patterns, so that `"a.c"` no longer matches `"abc"`.
    ///
    /// The default is `false`.
    pub fn with_escape_patterns(&mut self, escape_patterns: bool) -> &mut Self {
        self.options.escape_patterns = escape_patterns;
        self
    }

    /// Compiles `dictionary` for repeated use.
    ///
    /// # Errors
    ///
    /// If a pattern is not a valid regular expression after wildcard expansion.
    pub fn compile(&self, dictionary: &Dictionary) -> Result<CompiledDictionary> {
        CompiledDictionary::new(dictionary, &self.options)
    }

    /// Returns `text` with every whole-word match of a dictionary pattern replaced. Text that
    /// doesn't match is returned verbatim.
    ///
    /// # Errors
    ///
    /// See [`Self::compile`].
    pub fn replace(&self, dictionary: &Dictionary, text: &str) -> Result<String> {
        Ok(self.replace_and_count(dictionary, text)?.0)
    }

    /// See the documentation of replace. Also returns how many words were replaced.
    pub fn replace_and_count(
        &self,
        dictionary: &Dictionary,
        text: &str,
    ) -> Result<(String, usize)> {
        if dictionary.is_empty() {
            return Ok((text.to_owned(), 0));
        }
        Ok(self.compile(dictionary)?.replace_and_count(text))
    }
}

/// CensorStr makes it easy to censor a `&str` by calling `.censor_with(&dictionary)`.
pub trait CensorStr: Sized {
    /// The output is a newly allocated, censored string, using default [`Options`].
    fn censor_with(self, dictionary: &Dictionary) -> Result<String>;
}

impl CensorStr for &str {
    fn censor_with(self, dictionary: &Dictionary) -> Result<String> {
        Censor::new().replace(dictionary, self)
    }
}
