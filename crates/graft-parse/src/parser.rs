use graft_syntax::{NodeId, Priority, SyntaxKind, SyntaxTree, Token, Walker};
use graft_tokenizer::Tokenizer;
use text_size::TextRange;

use crate::grammar::{Assoc, Grammar, LineBreaks, ParseOptions};
use crate::{Parse, ParseError};

/// Single-pass, pull-based parser. Tokens arrive in textual order; operator
/// priority is honored by reshaping the tree as each token lands: bubble the
/// walker up to a compatible container, then capture the trailing siblings
/// the new operator scopes over.
pub struct Parser<'a> {
    text: &'a str,
    tokenizer: Tokenizer<'a>,
    grammar: Grammar,
    options: ParseOptions,
    walker: Walker,
    current: Token,
    current_priority: Priority,
    pending_spaces: Option<NodeId>,
    eat_lines: bool,
    error: Option<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_grammar(text, Grammar::default(), ParseOptions::default())
    }

    pub fn with_grammar(text: &'a str, grammar: Grammar, options: ParseOptions) -> Self {
        let tokenizer = Tokenizer::with_combinations(text, grammar.combinations().clone());
        Self {
            text,
            tokenizer,
            grammar,
            options,
            walker: Walker::new(SyntaxTree::new()),
            current: Token::empty(SyntaxKind::EOF, 0.into()),
            current_priority: Priority(0),
            pending_spaces: None,
            eat_lines: true,
            error: None,
        }
    }

    pub fn parse(mut self) -> Parse {
        self.walker
            .create_select(Token::empty(SyntaxKind::ROOT, 0.into()), self.grammar.min_priority());

        while self.error.is_none() {
            self.eat_spaces();
            self.bubble_priority();

            match self.current.kind {
                SyntaxKind::EOF => {
                    self.finish();
                    break;
                }
                SyntaxKind::OPERATOR => self.parse_operator(),
                SyntaxKind::OPEN_BRACE => self.parse_opening(),
                SyntaxKind::CLOSE_BRACE => self.parse_closure(),
                SyntaxKind::STRING => self.parse_string(),
                SyntaxKind::QUOTE => self.parse_quote(),
                SyntaxKind::LINE => self.parse_line_break(),
                kind => self.err(format!("unexpected token {kind:?}"), self.current.range),
            }
        }

        Parse { tree: self.walker.into_tree(), error: self.error }
    }

    fn advance(&mut self) {
        self.current = self.tokenizer.next_token();
    }

    fn text_of(&self, token: Token) -> &'a str {
        &self.text[token.range]
    }

    fn err(&mut self, message: String, range: TextRange) {
        if self.error.is_none() {
            self.error = Some(ParseError { message, range });
        }
    }

    /// Collects the run of whitespace (and, when insignificant, line break)
    /// tokens before the next real token into a pending `SPACE_GROUP`. The
    /// group is attached by whichever handler consumes the token, as a
    /// sibling just before it, so captures carry the whitespace along with
    /// the operand it precedes. An empty group is discarded under the
    /// pool's LIFO rule.
    fn eat_spaces(&mut self) {
        debug_assert!(self.pending_spaces.is_none());
        let min = self.grammar.min_priority();
        let group = self
            .walker
            .create(Token::empty(SyntaxKind::SPACE_GROUP, self.current.range.end()), min);

        self.advance();
        while self.current.kind == SyntaxKind::SPACE
            || (self.eat_lines && self.current.kind == SyntaxKind::LINE)
        {
            let leaf = self.walker.create(self.current, min);
            self.walker.tree_mut().node_mut(group).children.push(leaf);
            self.advance();
        }

        if self.walker.tree().node(group).is_leaf() {
            self.walker.tree_mut().delete_node(group);
        } else {
            self.pending_spaces = Some(group);
        }

        self.eat_lines = self.options.line_breaks == LineBreaks::Ignored;
    }

    fn push_spaces(&mut self) {
        if let Some(group) = self.pending_spaces.take() {
            self.walker.push(group);
        }
    }

    /// Resolves the current token's priority and ascends while the selected
    /// container binds tighter. Non-operators resolve to the minimum, so
    /// only operators and brace closers actually move the selection.
    fn bubble_priority(&mut self) {
        self.current_priority = self.grammar.priority(self.text_of(self.current));
        self.bubble();
    }

    fn bubble(&mut self) {
        while self.current_priority > self.walker.node().priority && self.walker.try_go_up() {}
    }

    fn parse_string(&mut self) {
        self.push_spaces();
        self.walker.create_push(self.current, self.current_priority);
    }

    fn parse_operator(&mut self) {
        let assoc = self.grammar.assoc(self.text_of(self.current));
        self.operator_at(self.current_priority, assoc);
    }

    /// Line breaks only reach the dispatch when they terminate statements;
    /// they then behave as a sequence operator.
    fn parse_line_break(&mut self) {
        match self.options.line_breaks {
            LineBreaks::Ignored => {
                self.err(format!("unexpected token {:?}", self.current.kind), self.current.range);
            }
            LineBreaks::Terminators => {
                self.current_priority = self.grammar.line_break_priority();
                self.bubble();
                self.operator_at(self.current_priority, Assoc::Left);
            }
        }
    }

    fn operator_at(&mut self, priority: Priority, assoc: Assoc) {
        let selected = self.walker.node().priority;
        let right_at_equal = assoc == Assoc::Right && priority == selected;
        if (priority != selected || right_at_equal) && !self.walker.node().children.is_empty() {
            let start = self.capture_start(priority, right_at_equal);
            let token = Token::empty(SyntaxKind::OPERATOR_GROUP, self.current.range.start());
            self.walker.capture_trailing(start, token, priority);
        }

        self.push_spaces();
        self.walker.create_push(self.current, priority);
        self.eat_lines = true;
    }

    /// Backward scan over the selected node's children: the capture takes
    /// the trailing run the new operator scopes over and stops at the first
    /// child that binds looser.
    fn capture_start(&self, limit: Priority, strict: bool) -> usize {
        let node = self.walker.node();
        let mut start = node.children.len();
        while start > 0 {
            let child = self.walker.get(node.children[start - 1]);
            let captured = if strict { child.priority < limit } else { child.priority <= limit };
            if !captured {
                break;
            }
            start -= 1;
        }
        start
    }

    /// Opens a brace group at the maximum priority; the opening token itself
    /// also gets the maximum so no later capture can pull it out.
    fn parse_opening(&mut self) {
        self.push_spaces();
        let max = self.grammar.max_priority();
        self.walker
            .create_push_select(Token::empty(SyntaxKind::BRACE_GROUP, self.current.range.start()), max);
        self.walker.create_push(self.current, max);
    }

    /// Closers carry the maximum priority, so bubbling has already returned
    /// the selection to the enclosing brace group. Closing demotes the group
    /// to the minimum: the bracketed whole becomes an atomic value.
    fn parse_closure(&mut self) {
        let close_text = self.text_of(self.current);
        let opening = match self.walker.node() {
            node if node.kind() == SyntaxKind::BRACE_GROUP => node.children.first().copied(),
            _ => None,
        };
        let Some(opening) = opening else {
            return self.err(format!("unmatched {close_text}"), self.current.range);
        };

        let open_text = self.text_of(self.walker.get(opening).token);
        if !braces_match(open_text, close_text) {
            return self.err(
                format!("{open_text} does not match {close_text}"),
                self.current.range,
            );
        }

        self.push_spaces();
        self.walker.create_push(self.current, self.current_priority);
        self.walker.node_mut().priority = self.grammar.min_priority();
        self.walker.go_up();
    }

    /// Quoted text is scanned verbatim: a backslash token and the token
    /// after it are skipped as one escaped unit, and only a token equal to
    /// the opening quote closes the group. The inner span becomes a single
    /// string leaf.
    fn parse_quote(&mut self) {
        self.push_spaces();
        self.walker.create_push_select(
            Token::empty(SyntaxKind::QUOTE_GROUP, self.current.range.start()),
            self.current_priority,
        );
        let opening = self.current;
        self.walker.create_push(opening, self.current_priority);
        let literal = self.walker.create_push(
            Token::empty(SyntaxKind::STRING, opening.range.end()),
            self.grammar.min_priority(),
        );

        loop {
            self.advance();
            match self.current.kind {
                SyntaxKind::EOF => {
                    return self.err("quote is not closed".to_string(), self.current.range);
                }
                SyntaxKind::QUOTE if self.text_of(self.current) == self.text_of(opening) => break,
                _ if self.text_of(self.current).starts_with('\\') => {
                    self.advance();
                }
                _ => {}
            }
        }

        let inner = TextRange::new(opening.range.end(), self.current.range.start());
        self.walker.tree_mut().node_mut(literal).token.range = inner;
        self.walker.create_push(self.current, self.grammar.min_priority());
        self.walker.go_up();
    }

    /// End of input: return to the root and flush any trailing whitespace.
    /// A brace group still on the selection stack was never closed.
    fn finish(&mut self) {
        let mut unclosed: Option<(String, TextRange)> = None;
        while self.walker.depth() > 1 {
            let node = self.walker.node();
            if node.kind() == SyntaxKind::BRACE_GROUP && unclosed.is_none() {
                if let Some(&open) = node.children.first() {
                    let token = self.walker.get(open).token;
                    unclosed = Some((self.text_of(token).to_string(), token.range));
                }
            }
            self.walker.go_up();
        }

        self.push_spaces();

        if let Some((open, range)) = unclosed {
            self.err(format!("{open} is not closed"), range);
        }
    }
}

fn braces_match(open: &str, close: &str) -> bool {
    matches!(
        (open.chars().next(), close.chars().next()),
        (Some('('), Some(')')) | (Some('{'), Some('}')) | (Some('['), Some(']'))
    )
}
