use std::fmt;

use bimap::BiMap;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::pcode::Mnemonic;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Assoc {
    Left,
    Right,
}

static OP_STR: Lazy<BiMap<Operator, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Operator, &'static str> = BiMap::new();
    map.insert(Operator::Add, "+");
    map.insert(Operator::Sub, "-");
    map.insert(Operator::Mul, "*");
    map.insert(Operator::Div, "/");
    map.insert(Operator::Pow, "^");
    map.insert(Operator::Root, "√");
    map
});

impl Operator {
    pub fn parse(s: &str) -> Result<Operator, String> {
        match OP_STR.get_by_right(s) {
            Some(op) => Ok(*op),
            None => Err(format!("Unknown Operator: `{}`", s)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        OP_STR.get_by_left(self).copied().unwrap_or("?")
    }

    /// Binding strength: `+ -` < `* /` < `^ √`
    pub fn prec(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Pow | Operator::Root => 3,
        }
    }

    pub fn assoc(&self) -> Assoc {
        match self {
            Operator::Pow | Operator::Root => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Root)
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }

    /// Stack machine instruction for this operator.
    /// The root is raised to the one-half power, so it shares `exp` with `^`.
    pub fn mnemonic(&self) -> Mnemonic {
        match self {
            Operator::Add => Mnemonic::Adi,
            Operator::Sub => Mnemonic::Sbi,
            Operator::Mul => Mnemonic::Mpi,
            Operator::Div => Mnemonic::Div,
            Operator::Pow | Operator::Root => Mnemonic::Exp,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// Operator field of a quadruple or a triple
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Opcode {
    Arith(Operator),
    Assign,
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Arith(op) => write!(f, "{}", op),
            Opcode::Assign => write!(f, "="),
        }
    }
}

impl From<Operator> for Opcode {
    fn from(op: Operator) -> Self {
        Opcode::Arith(op)
    }
}

impl Serialize for Opcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
