use crate::error::Error;
use crate::grammer::ast::{is_number, Node};
use ir::{Inst, Mnemonic, Operator};

/// Stack machine lowering: `lda dest`, postorder body, `sto`.
///
/// At a `+` node the side holding the tighter-binding operator is evaluated
/// first. Every other operator evaluates left then right.
pub struct PcodeEmitter {
    insts: Vec<Inst>,
}

impl PcodeEmitter {
    pub fn new() -> Self {
        PcodeEmitter { insts: Vec::new() }
    }

    pub fn emit(mut self, tree: &Node, dest: &str) -> Result<Vec<Inst>, Error> {
        self.insts.push(Inst::with(Mnemonic::Lda, strip_sigil(dest)));
        self.node(tree);
        self.insts.push(Inst::op(Mnemonic::Sto));
        Ok(self.insts)
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Leaf(text) if is_number(text) => {
                self.insts.push(Inst::with(Mnemonic::Ldc, text));
            }
            Node::Leaf(text) => {
                self.insts.push(Inst::with(Mnemonic::Lod, strip_sigil(text)));
            }
            Node::Binary(Operator::Add, lhs, rhs) if rhs.max_prec() > lhs.max_prec() => {
                self.node(rhs);
                self.node(lhs);
                self.insts.push(Inst::op(Mnemonic::Adi));
            }
            Node::Binary(op, lhs, rhs) => {
                self.node(lhs);
                self.node(rhs);
                self.insts.push(Inst::op(op.mnemonic()));
            }
            // x^0.5
            Node::Unary(op, operand) => {
                self.node(operand);
                self.insts.push(Inst::with(Mnemonic::Ldc, "0.5"));
                self.insts.push(Inst::op(op.mnemonic()));
            }
        }
    }
}

impl Default for PcodeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_sigil(name: &str) -> &str {
    name.strip_prefix('$').unwrap_or(name)
}
