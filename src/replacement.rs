use crate::replacer::Replacer;
use std::borrow::Cow;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// What a dictionary pattern is replaced with.
#[derive(Clone)]
pub enum Replacement {
    /// Substituted verbatim.
    Literal(String),
    /// Computed from the matched word.
    Strategy(Arc<dyn Replacer>),
}

impl Replacement {
    /// Wraps a [`Replacer`], such as [`crate::StarReplacer`] or a closure.
    pub fn strategy(replacer: impl Replacer + 'static) -> Self {
        Self::Strategy(Arc::new(replacer))
    }

    /// Produces the text that takes the place of `word`.
    pub fn apply<'a>(&'a self, word: &str) -> Cow<'a, str> {
        match self {
            Self::Literal(literal) => Cow::Borrowed(literal.as_str()),
            Self::Strategy(replacer) => Cow::Owned(replacer.replace(word)),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl Debug for Replacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Strategy(_) => f.write_str("Strategy(..)"),
        }
    }
}

impl From<&str> for Replacement {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_owned())
    }
}

impl From<String> for Replacement {
    fn from(literal: String) -> Self {
        Self::Literal(literal)
    }
}

impl From<Arc<dyn Replacer>> for Replacement {
    fn from(replacer: Arc<dyn Replacer>) -> Self {
        Self::Strategy(replacer)
    }
}

#[cfg(test)]
mod tests {
    use super::Replacement;
    use crate::{StarReplacer, TokenReplacer};

    #[test]
    fn apply() {
        let literal = Replacement::from("WordPress");
        assert!(literal.is_literal());
        assert_eq!(literal.apply("wordpress"), "WordPress");

        let star = Replacement::strategy(StarReplacer::default());
        assert!(!star.is_literal());
        assert_eq!(star.apply("Blogging"), "********");

        let token = Replacement::strategy(TokenReplacer::default());
        assert_eq!(token.apply("2003"), TokenReplacer::DEFAULT_TOKEN);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Replacement::from("x")), "Literal(\"x\")");
        assert_eq!(
            format!("{:?}", Replacement::strategy(StarReplacer::default())),
            "Strategy(..)"
        );
    }
}
