pub mod ast;
pub mod builder;
pub mod lexer;
pub mod token;

use crate::error::Error;
use ast::Node;
use builder::Builder;
use lexer::Lexer;

/// Lex and build the tree of one right-hand side
pub fn parse(code: &str, require_sigil: bool) -> Result<Node, Error> {
    let tokens = Lexer::new(code).require_sigil(require_sigil).parse()?;
    Builder::new().build(tokens)
}
