use crate::emit::Backend;
use ir::Operator;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Lexical errors
    #[error("Unexpected character `{0}` at column {1}")]
    UnexpectedChar(char, usize),

    #[error("Malformed number `{0}` at column {1}")]
    MalformedNumber(String, usize),

    #[error("`$` must be followed by a letter or `_` at column {0}")]
    MalformedIdent(usize),

    #[error("Identifier `{0}` must start with `$` at column {1}")]
    MissingSigil(String, usize),

    // Build errors
    #[error("Unbalanced `{0}` at column {1}")]
    UnbalancedBrackets(char, usize),

    #[error("Missing operand for `{0}` at column {1}")]
    MissingOperand(Operator, usize),

    #[error("Operator `{0}` is not in prefix position at column {1}")]
    MisplacedOperator(Operator, usize),

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Operand `{0}` is not connected by an operator")]
    DanglingOperand(String),

    // Emission errors
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    #[error("Operator `{0}` is not supported by the {1} back end")]
    UnsupportedOperator(Operator, Backend),

    // Statement errors
    #[error("Invalid destination: `{0}`")]
    InvalidDestination(String),

    #[error("The {0} back end needs a destination (`$x = ...`)")]
    MissingDestination(Backend),

    // Driver errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    #[strum(serialize = "lexical error")]
    Lexical,
    #[strum(serialize = "unbalanced brackets")]
    UnbalancedBrackets,
    #[strum(serialize = "invalid expression")]
    InvalidExpression,
    #[strum(serialize = "internal invariant violation")]
    InternalInvariantViolation,
    #[strum(serialize = "invalid statement")]
    Statement,
    #[strum(serialize = "driver error")]
    Driver,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            UnexpectedChar(..) | MalformedNumber(..) | MalformedIdent(_) | MissingSigil(..) => {
                ErrorKind::Lexical
            }
            UnbalancedBrackets(..) => ErrorKind::UnbalancedBrackets,
            MissingOperand(..) | MisplacedOperator(..) | EmptyExpression | DanglingOperand(_) => {
                ErrorKind::InvalidExpression
            }
            InternalInvariantViolation(_) => ErrorKind::InternalInvariantViolation,
            UnsupportedOperator(..) | InvalidDestination(_) | MissingDestination(_) => {
                ErrorKind::Statement
            }
            Io(_) | Config(_) => ErrorKind::Driver,
        }
    }

    /// Column of the offending character in the expression text
    pub fn column(&self) -> Option<usize> {
        use Error::*;
        match self {
            UnexpectedChar(_, col)
            | MalformedNumber(_, col)
            | MalformedIdent(col)
            | MissingSigil(_, col)
            | UnbalancedBrackets(_, col)
            | MissingOperand(_, col)
            | MisplacedOperator(_, col) => Some(*col),
            _ => None,
        }
    }
}
