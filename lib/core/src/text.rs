//! Text normalization and tokenization
//!
//! Every set-based comparison goes through [`normalize`] first, then one of
//! the [`Tokenization`] strategies turns the cleaned text into a [`TokenSet`].

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default window size for n-gram tokenization
pub const DEFAULT_NGRAM_SIZE: usize = 3;

// Unicode \w covers letters, marks, digits, connector punctuation and joiners
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Lowercase the text and drop everything that is neither a Unicode word
/// character nor whitespace.
///
/// ```
/// use textsim_core::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "hello world");
/// ```
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "").into_owned()
}

/// How normalized text is split into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "n")]
pub enum Tokenization {
    /// One token per character, whitespace included
    Character,
    /// Runs of non-whitespace
    Word,
    /// Sliding window of `n` characters, step 1
    NGram(usize),
}

impl Tokenization {
    /// N-gram tokenization with the default window
    pub const fn ngram() -> Self {
        Tokenization::NGram(DEFAULT_NGRAM_SIZE)
    }
}

/// A deduplicated set of tokens, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Character tokens of the normalized text
    pub fn characters(text: &str) -> Self {
        normalize(text).chars().map(String::from).collect()
    }

    /// Whitespace-separated words of the normalized text
    pub fn words(text: &str) -> Self {
        normalize(text)
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// Character n-grams of the normalized text.
    ///
    /// Text shorter than `n` produces an empty set.
    pub fn ngrams(text: &str, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidNgramSize(n));
        }
        let chars: Vec<char> = normalize(text).chars().collect();
        Ok(chars
            .windows(n)
            .map(|window| window.iter().collect::<String>())
            .collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Tokens present in both sets, sorted
    pub fn intersection<'a>(&'a self, other: &'a TokenSet) -> impl Iterator<Item = &'a str> {
        self.tokens.intersection(&other.tokens).map(String::as_str)
    }

    /// Number of distinct tokens across both sets
    pub fn union_len(&self, other: &TokenSet) -> usize {
        self.tokens.union(&other.tokens).count()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

/// Tokenize `text` under the given strategy
pub fn tokenize(text: &str, strategy: Tokenization) -> Result<TokenSet> {
    match strategy {
        Tokenization::Character => Ok(TokenSet::characters(text)),
        Tokenization::Word => Ok(TokenSet::words(text)),
        Tokenization::NGram(n) => TokenSet::ngrams(text, n),
    }
}
