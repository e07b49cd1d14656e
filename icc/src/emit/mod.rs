pub mod pcode;
pub mod quad;
pub mod triple;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use pcode::PcodeEmitter;
pub use quad::QuadEmitter;
pub use triple::TripleEmitter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Quad,
    Triple,
    Pcode,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Quad, Backend::Triple, Backend::Pcode];
}

/// Fresh temporary names (`v1`, `v2`, ...) for one statement
#[derive(Debug)]
pub struct Temps {
    prefix: String,
    next: usize,
}

impl Temps {
    pub fn new(prefix: &str) -> Self {
        Temps {
            prefix: prefix.to_string(),
            next: 1,
        }
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        name
    }
}
