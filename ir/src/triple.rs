use std::fmt;

use color_print::cformat;
use serde::{Serialize, Serializer};

use crate::op::Opcode;

/// Operand of a triple: a literal lexeme or the position of an earlier triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    Lit(String),
    At(usize),
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ref::Lit(text) => write!(f, "{}", text),
            Ref::At(idx) => write!(f, "[{}]", idx),
        }
    }
}

impl Serialize for Ref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triple {
    pub op: Opcode,
    pub arg1: Ref,
    pub arg2: Ref,
}

impl Triple {
    pub fn new<O: Into<Opcode>>(op: O, arg1: Ref, arg2: Ref) -> Self {
        Triple {
            op: op.into(),
            arg1,
            arg2,
        }
    }

    pub fn fields(&self) -> (String, String, String) {
        (
            self.op.to_string(),
            self.arg1.to_string(),
            self.arg2.to_string(),
        )
    }

    pub fn cformat(&self, idx: usize) -> String {
        cformat!(
            "<m>[{}]</> <y>{}</>, {}, {}",
            idx,
            self.op,
            self.arg1,
            self.arg2
        )
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.op, self.arg1, self.arg2)
    }
}
