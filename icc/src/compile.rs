use crate::config::Config;
use crate::emit::{Backend, PcodeEmitter, QuadEmitter, TripleEmitter};
use crate::error::Error;
use crate::grammer::{self, ast::Node, lexer::Lexer, token::TokenKind};
use ir::{Inst, Quad, Triple};
use serde::Serialize;

/// `dest = rhs`, as handed over by the statement recognizer.
/// A bare expression has no destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub dest: Option<String>,
    pub rhs: String,
    /// Column of `rhs` inside the statement text
    pub offset: usize,
}

impl Assignment {
    pub fn expr(rhs: &str) -> Self {
        Assignment {
            dest: None,
            rhs: rhs.to_string(),
            offset: 0,
        }
    }

    /// Split a statement at its first `=`
    pub fn parse(stmt: &str) -> Self {
        match stmt.split_once('=') {
            Some((dest, rhs)) => Assignment {
                dest: Some(dest.trim().to_string()),
                rhs: rhs.to_string(),
                offset: dest.chars().count() + 1,
            },
            None => Assignment::expr(stmt),
        }
    }
}

/// Output of one back end for one statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Listing {
    Quad(Vec<Quad>),
    Triple(Vec<Triple>),
    Pcode(Vec<Inst>),
}

impl Listing {
    pub fn backend(&self) -> Backend {
        match self {
            Listing::Quad(_) => Backend::Quad,
            Listing::Triple(_) => Backend::Triple,
            Listing::Pcode(_) => Backend::Pcode,
        }
    }

    /// Plain text, one record per line
    pub fn lines(&self) -> Vec<String> {
        match self {
            Listing::Quad(quads) => quads.iter().map(|q| q.to_string()).collect(),
            Listing::Triple(triples) => triples
                .iter()
                .enumerate()
                .map(|(idx, t)| format!("[{}] {}, {}, {}", idx, t.op, t.arg1, t.arg2))
                .collect(),
            Listing::Pcode(insts) => insts.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Colored table for the terminal
    pub fn cformat(&self) -> Vec<String> {
        match self {
            Listing::Quad(quads) => {
                let mut rows = vec![
                    format!("{:^8} | {:^6} | {:^6} | {:^8}", "op", "arg1", "arg2", "result"),
                    format!("{:-<8}-+-{:-<6}-+-{:-<6}-+-{:-<8}", "", "", "", ""),
                ];
                rows.extend(quads.iter().map(|q| q.cformat()));
                rows
            }
            Listing::Triple(triples) => triples
                .iter()
                .enumerate()
                .map(|(idx, t)| t.cformat(idx))
                .collect(),
            Listing::Pcode(insts) => insts.iter().map(|i| i.cformat()).collect(),
        }
    }
}

pub struct Compiler {
    config: Config,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Compiler { config }
    }

    pub fn tree(&self, rhs: &str) -> Result<Node, Error> {
        grammer::parse(rhs, self.config.require_sigil)
    }

    /// The destination must be exactly one identifier
    pub fn check_dest(&self, dest: &str) -> Result<(), Error> {
        let tokens = Lexer::new(dest)
            .require_sigil(self.config.require_sigil)
            .parse()
            .map_err(|_| Error::InvalidDestination(dest.to_string()))?;
        match tokens.as_slice() {
            [token] if matches!(token.kind, TokenKind::Ident(_)) => Ok(()),
            _ => Err(Error::InvalidDestination(dest.to_string())),
        }
    }

    /// Lower an already built tree with one back end
    pub fn lower(&self, tree: &Node, dest: Option<&str>, backend: Backend) -> Result<Listing, Error> {
        match backend {
            Backend::Quad => {
                let emitter = QuadEmitter::new(&self.config.temp_prefix, &self.config.placeholder);
                Ok(Listing::Quad(emitter.emit(tree, dest)?))
            }
            Backend::Triple => {
                let dest = dest.ok_or(Error::MissingDestination(backend))?;
                Ok(Listing::Triple(TripleEmitter::new().emit(tree, dest)?))
            }
            Backend::Pcode => {
                let dest = dest.ok_or(Error::MissingDestination(backend))?;
                Ok(Listing::Pcode(PcodeEmitter::new().emit(tree, dest)?))
            }
        }
    }

    pub fn compile(&self, stmt: &Assignment, backend: Backend) -> Result<Listing, Error> {
        let mut listings = self.compile_all(stmt, &[backend])?;
        listings.pop().ok_or_else(|| {
            Error::InternalInvariantViolation(format!("no listing produced for {}", backend))
        })
    }

    /// Build the tree once and hand it to every requested back end
    pub fn compile_all(&self, stmt: &Assignment, backends: &[Backend]) -> Result<Vec<Listing>, Error> {
        self.compile_each(stmt, backends)?.into_iter().collect()
    }

    /// Like `compile_all`, but one failing back end does not hide the others.
    /// The outer error covers the destination, the lexer and the tree builder.
    pub fn compile_each(
        &self,
        stmt: &Assignment,
        backends: &[Backend],
    ) -> Result<Vec<Result<Listing, Error>>, Error> {
        if let Some(dest) = &stmt.dest {
            self.check_dest(dest)?;
        }
        let tree = self.tree(&stmt.rhs)?;
        Ok(backends
            .iter()
            .map(|backend| self.lower(&tree, stmt.dest.as_deref(), *backend))
            .collect())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
