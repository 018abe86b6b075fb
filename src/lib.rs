//! recensor replaces words and phrases in text according to a dictionary.
//!
//! Each dictionary pattern is matched as a whole word, case-insensitively, and may contain a
//! wildcard (`%` by default). Matches are replaced either by a literal string or by a
//! [`Replacer`] computed from the matched word.

mod censor;
mod compiled;
mod dictionary;
mod error;
mod replacement;
mod replacer;
mod wildcard;

pub use censor::{Censor, CensorStr, Options};
pub use compiled::CompiledDictionary;
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use replacement::Replacement;
pub use replacer::{Replacer, StarReplacer, Strategies, TokenReplacer};
pub use wildcard::{expand, expand_escaped, DEFAULT_WILDCARD, WILDCARD_PATTERN};

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;

use doc_comment::doctest;
doctest!("../README.md");
