use super::token::Bracket;
use ir::Operator;
use std::fmt;

/// Expression tree. Built once per statement and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(String),                           // number | ident
    Binary(Operator, Box<Node>, Box<Node>), // expr op expr
    Unary(Operator, Box<Node>),             // "√" expr
}

impl Node {
    pub fn leaf(text: &str) -> Node {
        Node::Leaf(text.to_string())
    }

    pub fn binary(op: Operator, lhs: Node, rhs: Node) -> Node {
        Node::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn unary(op: Operator, operand: Node) -> Node {
        Node::Unary(op, Box::new(operand))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Leaf(text) => Some(text),
            _ => None,
        }
    }

    pub fn leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Binary(_, lhs, rhs) => lhs.leaves() + rhs.leaves(),
            Node::Unary(_, operand) => operand.leaves(),
        }
    }

    pub fn operators(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Binary(_, lhs, rhs) => 1 + lhs.operators() + rhs.operators(),
            Node::Unary(_, operand) => 1 + operand.operators(),
        }
    }

    /// Highest operator precedence anywhere in this subtree (`None` for a leaf)
    pub fn max_prec(&self) -> Option<u8> {
        match self {
            Node::Leaf(_) => None,
            Node::Binary(op, lhs, rhs) => [Some(op.prec()), lhs.max_prec(), rhs.max_prec()]
                .into_iter()
                .flatten()
                .max(),
            Node::Unary(op, operand) => [Some(op.prec()), operand.max_prec()]
                .into_iter()
                .flatten()
                .max(),
        }
    }

    /// Fully parenthesized form, alternating `()` `[]` `{}` by depth
    pub fn grouping(&self) -> String {
        let mut out = String::new();
        self.group(0, &mut out);
        out
    }

    fn group(&self, depth: usize, out: &mut String) {
        let bracket = Bracket::nth(depth);
        match self {
            Node::Leaf(text) => out.push_str(text),
            Node::Binary(op, lhs, rhs) => {
                out.push(bracket.open());
                lhs.group(depth + 1, out);
                out.push_str(op.symbol());
                rhs.group(depth + 1, out);
                out.push(bracket.close());
            }
            Node::Unary(op, operand) => {
                out.push(bracket.open());
                out.push_str(op.symbol());
                operand.group(depth + 1, out);
                out.push(bracket.close());
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grouping())
    }
}

/// Numeric lexemes start with a digit or a decimal point
pub fn is_number(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}
