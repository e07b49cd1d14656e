pub mod op;
pub mod pcode;
pub mod quad;
pub mod triple;

pub use op::{Assoc, Opcode, Operator};
pub use pcode::{Inst, Mnemonic};
pub use quad::Quad;
pub use triple::{Ref, Triple};
