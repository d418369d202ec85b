use std::collections::BTreeMap;

use graft_syntax::Priority;
use graft_tokenizer::Combinations;

/// How an operator groups with neighbours of equal priority. `Left` keeps
/// the flat chain `a + b + c` in one container; `Right` re-captures the
/// trailing operand so `a = b = c` nests to the right.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Assoc {
    Left,
    Right,
}

/// Whether line-break tokens are plain whitespace or statement separators.
/// With `Terminators`, a line break ends the current expression unless it
/// immediately follows an operator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineBreaks {
    #[default]
    Ignored,
    Terminators,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    pub line_breaks: LineBreaks,
}

/// Operator tables injected into the parser: lexeme priorities and
/// associativity, the tokenizer's combination set, and the priority bounds
/// containers are created and demoted at. Lower priority binds tighter.
#[derive(Clone, Debug)]
pub struct Grammar {
    operators: BTreeMap<Box<str>, (Priority, Assoc)>,
    combinations: Combinations,
    min_priority: Priority,
    max_priority: Priority,
    line_break_priority: Priority,
}

#[rustfmt::skip]
const DEFAULT_OPERATORS: &[(&str, u8)] = &[
    ("::", 1),
    (".", 2), ("->", 2), ("--", 2), ("++", 2),
    ("!", 3), ("~", 3),
    ("*", 4), ("/", 4), ("%", 4),
    ("+", 5), ("-", 5),
    ("<<", 6), (">>", 6),
    ("<=>", 7),
    ("<", 8), ("<=", 8), (">", 8), (">=", 8),
    ("==", 9), ("!=", 9),
    ("&", 10),
    ("^", 11),
    ("|", 12),
    ("&&", 13),
    ("||", 14),
    (",", 15),
    ("=", 16), ("+=", 16), ("-=", 16), ("*=", 16), ("/=", 16), ("%=", 16),
    (">>=", 16), ("<<=", 16), ("&=", 16), ("|=", 16), ("^=", 16),
    (";", 17),
    ("(", 0), ("[", 0), ("{", 0),
    (")", 18), ("]", 18), ("}", 18),
];

impl Default for Grammar {
    /// Conventional binary-operator precedence: scope resolution binds
    /// tightest, assignment and sequencing loosest. Openers sit at the
    /// minimum so they never bubble; closers at the maximum so they ascend
    /// back to their brace group.
    fn default() -> Self {
        let operators = DEFAULT_OPERATORS
            .iter()
            .map(|&(lexeme, priority)| (Box::from(lexeme), (Priority(priority), Assoc::Left)))
            .collect();

        Self {
            operators,
            combinations: Combinations::default(),
            min_priority: Priority(0),
            max_priority: Priority(18),
            line_break_priority: Priority(17),
        }
    }
}

impl Grammar {
    /// Adds or overrides a single operator entry.
    pub fn with_operator(mut self, lexeme: &str, priority: Priority, assoc: Assoc) -> Self {
        self.operators.insert(Box::from(lexeme), (priority, assoc));
        self
    }

    pub fn with_combinations(mut self, combinations: Combinations) -> Self {
        self.combinations = combinations;
        self
    }

    /// Priority of a lexeme. Unknown lexemes bind tightest: atoms and
    /// unlisted single-character operators all land on the minimum.
    pub fn priority(&self, lexeme: &str) -> Priority {
        match self.operators.get(lexeme) {
            Some(&(priority, _)) => priority,
            None => self.min_priority,
        }
    }

    pub fn assoc(&self, lexeme: &str) -> Assoc {
        match self.operators.get(lexeme) {
            Some(&(_, assoc)) => assoc,
            None => Assoc::Left,
        }
    }

    pub fn min_priority(&self) -> Priority {
        self.min_priority
    }

    pub fn max_priority(&self) -> Priority {
        self.max_priority
    }

    /// Priority a line break separates at when line breaks terminate
    /// statements; defaults to the `;` level.
    pub fn line_break_priority(&self) -> Priority {
        self.line_break_priority
    }

    pub fn combinations(&self) -> &Combinations {
        &self.combinations
    }
}
