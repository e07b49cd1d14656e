use super::Backend;
use crate::error::Error;
use crate::grammer::ast::Node;
use bimap::BiMap;
use indexmap::IndexMap;
use ir::{Opcode, Operator, Ref, Triple};
use std::cmp::Reverse;

/// Child of an operator node, by in-order index when it is an operator itself
#[derive(Debug, Clone)]
enum Slot {
    Leaf(String),
    Inner(usize),
}

#[derive(Debug, Clone)]
struct Pending {
    op: Operator,
    lhs: Slot,
    rhs: Slot,
}

/// Ready-worklist scheduler over the operator nodes of one tree.
///
/// A node is ready once both children are leaves or already emitted.
/// Among ready nodes the highest precedence wins, then the smallest in-order index.
pub struct Scheduler {
    pending: IndexMap<usize, Pending>,
    resolved: BiMap<usize, usize>, // in-order index <-> triple position
    root: Slot,
}

impl Scheduler {
    pub fn new(tree: &Node) -> Result<Self, Error> {
        let mut pending = IndexMap::new();
        let mut counter = 0;
        let root = number(tree, &mut counter, &mut pending)?;
        Ok(Scheduler {
            pending,
            resolved: BiMap::new(),
            root,
        })
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// In-order indices of the ready nodes, best candidate first
    pub fn ready(&self) -> Vec<usize> {
        let mut ready: Vec<(usize, &Pending)> = self
            .pending
            .iter()
            .filter(|(_, node)| self.is_resolved(&node.lhs) && self.is_resolved(&node.rhs))
            .map(|(idx, node)| (*idx, node))
            .collect();
        ready.sort_by_key(|(idx, node)| (Reverse(node.op.prec()), *idx));
        ready.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Emit the best ready node as the triple at position `at`
    pub fn next(&mut self, at: usize) -> Result<Triple, Error> {
        let Some(&idx) = self.ready().first() else {
            return Err(Error::InternalInvariantViolation(format!(
                "{} operator nodes pending but none is ready",
                self.pending.len()
            )));
        };
        let node = self.pending.shift_remove(&idx).ok_or_else(|| {
            Error::InternalInvariantViolation(format!("node {} vanished from the worklist", idx))
        })?;
        let triple = Triple::new(node.op, self.reference(&node.lhs)?, self.reference(&node.rhs)?);
        self.resolved.insert(idx, at);
        Ok(triple)
    }

    /// In-order index of the node that produced triple `at`
    pub fn origin(&self, at: usize) -> Option<usize> {
        self.resolved.get_by_right(&at).copied()
    }

    pub fn result(&self) -> Result<Ref, Error> {
        self.reference(&self.root)
    }

    fn is_resolved(&self, slot: &Slot) -> bool {
        match slot {
            Slot::Leaf(_) => true,
            Slot::Inner(idx) => self.resolved.contains_left(idx),
        }
    }

    fn reference(&self, slot: &Slot) -> Result<Ref, Error> {
        match slot {
            Slot::Leaf(text) => Ok(Ref::Lit(text.clone())),
            Slot::Inner(idx) => match self.resolved.get_by_left(idx) {
                Some(at) => Ok(Ref::At(*at)),
                None => Err(Error::InternalInvariantViolation(format!(
                    "node {} referenced before it was emitted",
                    idx
                ))),
            },
        }
    }
}

// left, root, right
fn number(
    node: &Node,
    counter: &mut usize,
    pending: &mut IndexMap<usize, Pending>,
) -> Result<Slot, Error> {
    match node {
        Node::Leaf(text) => {
            *counter += 1;
            Ok(Slot::Leaf(text.clone()))
        }
        Node::Binary(op, lhs, rhs) => {
            let lhs = number(lhs, counter, pending)?;
            let idx = *counter;
            *counter += 1;
            let rhs = number(rhs, counter, pending)?;
            pending.insert(idx, Pending { op: *op, lhs, rhs });
            Ok(Slot::Inner(idx))
        }
        Node::Unary(op, _) => Err(Error::UnsupportedOperator(*op, Backend::Triple)),
    }
}

pub struct TripleEmitter {
    triples: Vec<Triple>,
}

impl TripleEmitter {
    pub fn new() -> Self {
        TripleEmitter {
            triples: Vec::new(),
        }
    }

    pub fn emit(mut self, tree: &Node, dest: &str) -> Result<Vec<Triple>, Error> {
        let mut scheduler = Scheduler::new(tree)?;
        while !scheduler.is_done() {
            let triple = scheduler.next(self.triples.len())?;
            self.triples.push(triple);
        }
        let result = scheduler.result()?;
        self.triples
            .push(Triple::new(Opcode::Assign, Ref::Lit(dest.to_string()), result));
        Ok(self.triples)
    }
}

impl Default for TripleEmitter {
    fn default() -> Self {
        Self::new()
    }
}
