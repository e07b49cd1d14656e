use super::{Backend, Temps};
use crate::error::Error;
use crate::grammer::ast::Node;
use ir::{Opcode, Quad};

/// Two-phase quadruple lowering.
///
/// Phase 1 collapses every multiplicative (`*` `/` `^`) subtree into a
/// temporary, bottom-up. Phase 2 walks the remaining additive skeleton.
/// The emitter is consumed by `emit`, so temporaries restart at 1 per statement.
pub struct QuadEmitter {
    temps: Temps,
    placeholder: String,
    quads: Vec<Quad>,
}

impl QuadEmitter {
    pub fn new(prefix: &str, placeholder: &str) -> Self {
        QuadEmitter {
            temps: Temps::new(prefix),
            placeholder: placeholder.to_string(),
            quads: Vec::new(),
        }
    }

    pub fn emit(mut self, tree: &Node, dest: Option<&str>) -> Result<Vec<Quad>, Error> {
        let skeleton = self.collapse(tree)?;
        let last = self.additive(&skeleton)?;
        if let Some(dest) = dest {
            let assign = Quad::new(Opcode::Assign, &last, &self.placeholder, dest);
            self.quads.push(assign);
        }
        Ok(self.quads)
    }

    fn collapse(&mut self, node: &Node) -> Result<Node, Error> {
        match node {
            Node::Leaf(_) => Ok(node.clone()),
            Node::Binary(op, lhs, rhs) if op.is_additive() => {
                let lhs = self.collapse(lhs)?;
                let rhs = self.collapse(rhs)?;
                Ok(Node::binary(*op, lhs, rhs))
            }
            Node::Binary(op, lhs, rhs) => {
                let lhs = self.collapse(lhs)?;
                let rhs = self.collapse(rhs)?;
                let (Some(arg1), Some(arg2)) = (lhs.text(), rhs.text()) else {
                    return Err(Error::InternalInvariantViolation(format!(
                        "`{}` operands did not collapse to leaves; \
                         quadruples do not support `+`/`-` operands under `*`, `/` or `^`",
                        op
                    )));
                };
                let result = self.temps.fresh();
                self.quads.push(Quad::new(*op, arg1, arg2, &result));
                Ok(Node::Leaf(result))
            }
            Node::Unary(op, _) => Err(Error::UnsupportedOperator(*op, Backend::Quad)),
        }
    }

    fn additive(&mut self, node: &Node) -> Result<String, Error> {
        match node {
            Node::Leaf(text) => Ok(text.clone()),
            Node::Binary(op, lhs, rhs) if op.is_additive() => {
                let arg1 = self.additive(lhs)?;
                let arg2 = self.additive(rhs)?;
                let result = self.temps.fresh();
                self.quads.push(Quad::new(*op, &arg1, &arg2, &result));
                Ok(result)
            }
            Node::Binary(op, ..) | Node::Unary(op, _) => Err(Error::InternalInvariantViolation(
                format!("`{}` survived the multiplicative collapse", op),
            )),
        }
    }
}
