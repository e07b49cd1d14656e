use super::ast::Node;
use super::token::{Bracket, Token, TokenKind};
use crate::error::Error;
use ir::{Assoc, Operator};

/// Entry of the operator stack
#[derive(Debug, Clone, Copy)]
enum Stacked {
    Op(Operator, usize),
    Open(Bracket, usize),
}

/// Operator-precedence (shunting-yard) tree builder
pub struct Builder {
    operands: Vec<Node>,
    operators: Vec<Stacked>,
    expect_operand: bool,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            operands: Vec::new(),
            operators: Vec::new(),
            expect_operand: true,
        }
    }

    pub fn build(mut self, tokens: Vec<Token>) -> Result<Node, Error> {
        for token in tokens {
            match token.kind {
                TokenKind::Number(text) | TokenKind::Ident(text) => {
                    if !self.expect_operand {
                        return Err(Error::DanglingOperand(text));
                    }
                    self.operands.push(Node::Leaf(text));
                    self.expect_operand = false;
                }
                TokenKind::Open(bracket) => {
                    if !self.expect_operand {
                        return Err(Error::DanglingOperand(bracket.open().to_string()));
                    }
                    self.operators.push(Stacked::Open(bracket, token.pos));
                    self.expect_operand = true;
                }
                TokenKind::Close(bracket) => {
                    self.close(bracket, token.pos)?;
                    self.expect_operand = false;
                }
                TokenKind::Op(op) => {
                    match (op.is_unary(), self.expect_operand) {
                        (true, false) => return Err(Error::MisplacedOperator(op, token.pos)),
                        (false, true) => return Err(Error::MissingOperand(op, token.pos)),
                        _ => {}
                    }
                    self.shift(op, token.pos)?;
                    self.expect_operand = true;
                }
            }
        }

        // Reduce the rest
        while let Some(top) = self.operators.pop() {
            match top {
                Stacked::Op(op, pos) => self.reduce(op, pos)?,
                Stacked::Open(bracket, pos) => {
                    return Err(Error::UnbalancedBrackets(bracket.open(), pos))
                }
            }
        }

        let mut operands = self.operands.into_iter();
        match (operands.next(), operands.next()) {
            (Some(root), None) => Ok(root),
            (None, _) => Err(Error::EmptyExpression),
            (Some(_), Some(extra)) => Err(Error::DanglingOperand(extra.to_string())),
        }
    }

    /// Reduce stacked operators that bind at least as tight as `op`, then push it
    fn shift(&mut self, op: Operator, pos: usize) -> Result<(), Error> {
        while let Some(&Stacked::Op(top, top_pos)) = self.operators.last() {
            let reduce = match op.assoc() {
                Assoc::Left => top.prec() >= op.prec(),
                Assoc::Right => top.prec() > op.prec(),
            };
            if !reduce {
                break;
            }
            self.operators.pop();
            self.reduce(top, top_pos)?;
        }
        self.operators.push(Stacked::Op(op, pos));
        Ok(())
    }

    /// Reduce until the open bracket of the same family
    fn close(&mut self, bracket: Bracket, pos: usize) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some(Stacked::Op(op, op_pos)) => self.reduce(op, op_pos)?,
                Some(Stacked::Open(open, _)) if open == bracket => return Ok(()),
                Some(Stacked::Open(..)) | None => {
                    return Err(Error::UnbalancedBrackets(bracket.close(), pos))
                }
            }
        }
    }

    fn reduce(&mut self, op: Operator, pos: usize) -> Result<(), Error> {
        let node = if op.is_unary() {
            let operand = self.pop_operand(op, pos)?;
            Node::unary(op, operand)
        } else {
            let rhs = self.pop_operand(op, pos)?;
            let lhs = self.pop_operand(op, pos)?;
            Node::binary(op, lhs, rhs)
        };
        self.operands.push(node);
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator, pos: usize) -> Result<Node, Error> {
        self.operands.pop().ok_or(Error::MissingOperand(op, pos))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
