use itertools::Itertools;

/// What the wildcard character expands to: any run of characters that are neither whitespace nor
/// `<`, so a wildcard never reaches across words or into HTML tags.
pub const WILDCARD_PATTERN: &str = r"(?:[^<\s]*)";

/// The default wildcard character.
pub const DEFAULT_WILDCARD: char = '%';

/// Substitutes [`WILDCARD_PATTERN`] for every `wildcard` in `pattern`. The rest of `pattern` is
/// left as regular expression syntax.
pub fn expand(pattern: &str, wildcard: char) -> String {
    pattern.replace(wildcard, WILDCARD_PATTERN)
}

/// Like [`expand`], but the text between wildcards is escaped so it only matches itself.
pub fn expand_escaped(pattern: &str, wildcard: char) -> String {
    pattern
        .split(wildcard)
        .map(regex::escape)
        .join(WILDCARD_PATTERN)
}
