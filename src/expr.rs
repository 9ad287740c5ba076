//! Arithmetic expression trees.
//!
//! An expression is either an integer literal or a binary operation over two
//! sub-expressions. Evaluation is recursive and reports failures as `Error`
//! values instead of panicking.

use std::convert::TryFrom;
use std::fmt;

use crate::{Error, Result};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, truncating toward zero
    Divide,
}

impl Operator {
    /// Returns the character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator with checked `i32` arithmetic.
    pub fn apply(self, left: i32, right: i32) -> Result<i32> {
        let value = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 {
                    return Err(Error::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        value.ok_or(Error::Overflow)
    }
}

impl TryFrom<char> for Operator {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(Error::UnsupportedOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of an arithmetic expression tree.
///
/// # Examples
///
/// ```
/// use word_trie::Expr;
///
/// let sum = Expr::binary('+', Expr::Number(1), Expr::Number(2)).unwrap();
/// let product = Expr::binary('*', sum, Expr::Number(3)).unwrap();
///
/// assert_eq!(product.evaluate(), Ok(9));
/// assert_eq!(product.to_string(), "(* (+ 1 2) 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal
    Number(i32),
    /// An operator applied to two sub-expressions
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a binary node, failing if `op` is not a supported operator.
    pub fn binary(op: char, left: Expr, right: Expr) -> Result<Self> {
        Ok(Expr::Binary {
            op: Operator::try_from(op)?,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Evaluates the expression, left operand first.
    pub fn evaluate(&self) -> Result<i32> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", op, left, right),
        }
    }
}
