use std::fmt;

use color_print::cformat;
use serde::Serialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    Lda, // load address of destination
    Ldc, // load constant
    Lod, // load variable
    Adi,
    Sbi,
    Mpi,
    Div,
    Exp,
    Sto, // store top of stack to last loaded address
}

impl Mnemonic {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().parse::<Self>() {
            Ok(m) => Ok(m),
            Err(_) => Err(format!("Undefined Mnemonic: {s}")),
        }
    }
}

/// Stack machine instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inst {
    pub mnemonic: Mnemonic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand: Option<String>,
}

impl Inst {
    pub fn op(mnemonic: Mnemonic) -> Self {
        Inst {
            mnemonic,
            operand: None,
        }
    }

    pub fn with(mnemonic: Mnemonic, operand: &str) -> Self {
        Inst {
            mnemonic,
            operand: Some(operand.to_string()),
        }
    }

    pub fn cformat(&self) -> String {
        match &self.operand {
            Some(operand) => cformat!("<c>{}</> {}", self.mnemonic, operand),
            None => cformat!("<c>{}</>", self.mnemonic),
        }
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            Some(operand) => write!(f, "{} {}", self.mnemonic, operand),
            None => write!(f, "{}", self.mnemonic),
        }
    }
}
