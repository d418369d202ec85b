//! Priority-climbing parser: builds a whitespace-preserving syntax tree in a
//! single left-to-right pass, reshaping already-placed subtrees as tighter-
//! or looser-binding operators arrive.

mod grammar;
mod parser;

pub use grammar::{Assoc, Grammar, LineBreaks, ParseOptions};
use graft_errors::Diagnostic;
use graft_inputs::File;
use graft_syntax::SyntaxTree;
pub use parser::Parser;
use text_size::TextRange;

/// First structural error of a parse. Parsing stops where it occurred; the
/// tree built up to that point is still returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub range: TextRange,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parse {
    pub tree: SyntaxTree,
    pub error: Option<ParseError>,
}

/// Parses with the default grammar and options.
pub fn parse_text(text: &str) -> Parse {
    Parser::new(text).parse()
}

/// Tracked parse of a [`File`]; the error, if any, is also accumulated as a
/// [`Diagnostic`] for rendering.
#[salsa::tracked(returns(ref), no_eq)]
pub fn parse_file(db: &dyn salsa::Database, file: File) -> Parse {
    use salsa::Accumulator as _;

    let parse = Parser::new(file.text(db)).parse();
    if let Some(error) = &parse.error {
        Diagnostic::error(error.message.clone(), error.range).accumulate(db);
    }
    parse
}
