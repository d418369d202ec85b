//! Maximal-munch tokenizer over fixed character classes.
//!
//! Every input character classifies to some token kind, so the tokenizer
//! itself never fails; unknown characters fall back to `STRING`.

mod combinations;
mod cursor;

pub use combinations::{Combinations, MatchResult};
use cursor::Cursor;
pub use graft_syntax::SyntaxKind;
use graft_syntax::Token;
use text_size::{TextRange, TextSize};

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    combinations: Combinations,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_combinations(text, Combinations::default())
    }

    pub fn with_combinations(text: &'a str, combinations: Combinations) -> Self {
        Self { text, cursor: Cursor::new(text), combinations }
    }

    /// Produces the next token. At end of input (or at a NUL byte) this
    /// returns a zero-width `EOF` token and keeps returning it.
    pub fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();
        let kind = classify(self.cursor.peek());
        if kind == SyntaxKind::EOF {
            return Token::empty(SyntaxKind::EOF, start);
        }
        self.cursor.advance();

        match kind {
            // Quotes, braces and line terminators are always one character.
            SyntaxKind::QUOTE
            | SyntaxKind::OPEN_BRACE
            | SyntaxKind::CLOSE_BRACE
            | SyntaxKind::LINE => {}
            SyntaxKind::STRING | SyntaxKind::SPACE => {
                while classify(self.cursor.peek()) == kind {
                    self.cursor.advance();
                }
            }
            SyntaxKind::OPERATOR => self.munch_operator(start),
            _ => unreachable!("character classes produce only token kinds"),
        }

        Token::new(kind, TextRange::new(start, self.cursor.pos()))
    }

    /// Extends a one-character operator while the combination set allows it.
    /// `Start` consumes provisionally; only `Combination` moves the committed
    /// end, and the cursor rewinds to it once no further match is possible.
    fn munch_operator(&mut self, start: TextSize) {
        let mut committed = self.cursor.pos();
        while classify(self.cursor.peek()) == SyntaxKind::OPERATOR {
            let next = self.cursor.peek();
            let candidate_end = self.cursor.pos() + TextSize::of(next);
            let candidate = &self.text[TextRange::new(start, candidate_end)];
            match self.combinations.lookup(candidate) {
                MatchResult::Combination => {
                    self.cursor.advance();
                    committed = self.cursor.pos();
                }
                MatchResult::Start => {
                    self.cursor.advance();
                }
                MatchResult::Nothing => break,
            }
        }
        self.cursor.set_pos(committed);
    }
}

fn classify(c: char) -> SyntaxKind {
    match c {
        ' ' | '\t' => SyntaxKind::SPACE,

        '+' | '-' | '*' | '/' | '%' | '<' | '>' | '&' | '|' | '~' | '^' | '!' | '=' | '.'
        | ',' | ':' | ';' | '@' | '$' | '#' | '?' | '\\' => SyntaxKind::OPERATOR,

        '\'' | '"' | '`' => SyntaxKind::QUOTE,

        '(' | '{' | '[' => SyntaxKind::OPEN_BRACE,
        ')' | '}' | ']' => SyntaxKind::CLOSE_BRACE,

        '\n' | '\r' => SyntaxKind::LINE,

        '\0' => SyntaxKind::EOF,
        _ => SyntaxKind::STRING,
    }
}

#[cfg(test)]
mod tests {
    use graft_syntax::SyntaxKind::*;

    use super::*;

    fn token_text<'a>(token: &Token, text: &'a str) -> &'a str {
        &text[token.range]
    }

    #[test]
    fn identifiers_and_operators() {
        let text = "a+b";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "a");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "+");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "b");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, EOF);
        assert!(token.range.is_empty());
    }

    #[test]
    fn string_runs_are_maximal() {
        let text = "abc123 x";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "abc123");
    }

    #[test]
    fn spaces_and_tabs_combine() {
        let text = "a \t b";
        let mut tokenizer = Tokenizer::new(text);

        tokenizer.next_token();
        let token = tokenizer.next_token();
        assert_eq!(token.kind, SPACE);
        assert_eq!(token_text(&token, text), " \t ");
    }

    #[test]
    fn line_terminators_stay_single() {
        let text = "\r\n";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, LINE);
        assert_eq!(token_text(&token, text), "\r");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, LINE);
        assert_eq!(token_text(&token, text), "\n");
    }

    #[test]
    fn shift_assign_munches_to_three_characters() {
        let text = "<<=";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "<<=");

        assert_eq!(tokenizer.next_token().kind, EOF);
    }

    #[test]
    fn shift_before_identifier_stays_two_characters() {
        let text = "<<a";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "<<");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "a");
    }

    #[test]
    fn unknown_operator_characters_stay_single() {
        let text = "@@";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "@");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "@");
    }

    #[test]
    fn dots_do_not_combine() {
        let text = "..";
        let mut tokenizer = Tokenizer::new(text);

        assert_eq!(token_text(&tokenizer.next_token(), text), ".");
        assert_eq!(token_text(&tokenizer.next_token(), text), ".");
    }

    #[test]
    fn spaceship_munches_through_its_prefix() {
        let text = "a<=>b";
        let mut tokenizer = Tokenizer::new(text);

        tokenizer.next_token();
        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "<=>");
    }

    #[test]
    fn failed_provisional_extension_rewinds() {
        // Only "<=>" is known, so "<=" extends provisionally and must give
        // the "=" back when the ">" never arrives.
        let text = "<=x";
        let mut tokenizer = Tokenizer::with_combinations(text, Combinations::from_lexemes(["<=>"]));

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "<");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "=");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "x");
    }

    #[test]
    fn braces_and_quotes_never_combine() {
        let text = "((''";
        let mut tokenizer = Tokenizer::new(text);

        assert_eq!(tokenizer.next_token().kind, OPEN_BRACE);
        assert_eq!(tokenizer.next_token().kind, OPEN_BRACE);
        assert_eq!(tokenizer.next_token().kind, QUOTE);
        assert_eq!(tokenizer.next_token().kind, QUOTE);
    }

    #[test]
    fn nul_byte_ends_the_stream() {
        let text = "a\0b";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "a");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, EOF);
        assert!(token.range.is_empty());

        // The tokenizer parks on the terminator.
        assert_eq!(tokenizer.next_token().kind, EOF);
    }

    #[test]
    fn non_ascii_text_is_string_kind() {
        let text = "αβ+1";
        let mut tokenizer = Tokenizer::new(text);

        let token = tokenizer.next_token();
        assert_eq!(token.kind, STRING);
        assert_eq!(token_text(&token, text), "αβ");

        let token = tokenizer.next_token();
        assert_eq!(token.kind, OPERATOR);
        assert_eq!(token_text(&token, text), "+");
    }
}
