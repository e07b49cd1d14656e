use std::fmt;

use color_print::cformat;
use serde::Serialize;

use crate::op::Opcode;

/// Four-address record: `(op, arg1, arg2, result)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quad {
    pub op: Opcode,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl Quad {
    pub fn new<O: Into<Opcode>>(op: O, arg1: &str, arg2: &str, result: &str) -> Self {
        Quad {
            op: op.into(),
            arg1: arg1.to_string(),
            arg2: arg2.to_string(),
            result: result.to_string(),
        }
    }

    pub fn fields(&self) -> (String, String, String, String) {
        (
            self.op.to_string(),
            self.arg1.clone(),
            self.arg2.clone(),
            self.result.clone(),
        )
    }

    /// One row of the quadruple table
    pub fn cformat(&self) -> String {
        cformat!(
            "<y>{:^8}</> | {:^6} | {:^6} | <g>{:^8}</>",
            self.op.to_string(),
            self.arg1,
            self.arg2,
            self.result
        )
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.op, self.arg1, self.arg2, self.result
        )
    }
}
