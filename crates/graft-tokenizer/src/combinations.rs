use std::collections::BTreeSet;
use std::ops::Bound;

/// Outcome of testing a provisionally extended operator against the known
/// multi-character lexemes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MatchResult {
    /// No known lexeme starts with the candidate; keep the shorter token.
    Nothing,
    /// A longer lexeme starts with the candidate; extend provisionally.
    Start,
    /// The candidate is itself a known lexeme; commit the extension.
    Combination,
}

/// Ordered set of multi-character operator lexemes the tokenizer may munch.
/// Single-character operators are always legal and never consult the set.
#[derive(Clone, Debug)]
pub struct Combinations {
    lexemes: BTreeSet<Box<str>>,
}

const DEFAULT_COMBINATIONS: &[&str] = &[
    "::", "->", "--", "++", "<<", ">>", "<=>", "<=", ">=", "==", "!=", "&&", "||", "+=", "-=",
    "*=", "/=", "%=", ">>=", "<<=", "&=", "|=", "^=",
];

impl Default for Combinations {
    fn default() -> Self {
        Self::from_lexemes(DEFAULT_COMBINATIONS.iter().copied())
    }
}

impl Combinations {
    pub fn from_lexemes<'a>(lexemes: impl IntoIterator<Item = &'a str>) -> Self {
        Self { lexemes: lexemes.into_iter().map(Box::from).collect() }
    }

    /// Lower-bound search: the first lexeme ordered at or after `candidate`
    /// decides whether the candidate is dead, a prefix, or an exact match.
    pub fn lookup(&self, candidate: &str) -> MatchResult {
        let mut at_or_after =
            self.lexemes.range::<str, _>((Bound::Included(candidate), Bound::Unbounded));
        let Some(entry) = at_or_after.next() else {
            return MatchResult::Nothing;
        };
        if !entry.starts_with(candidate) {
            return MatchResult::Nothing;
        }
        if entry.len() == candidate.len() { MatchResult::Combination } else { MatchResult::Start }
    }
}
