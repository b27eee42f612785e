// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Core IR expressions and constants.

/// A variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var {
    pub name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Core IR expression
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Integer(i64),
    Float(f64),
    String(String),
    Atom(String),
    Var(Var),
    /// Call of a function value in the current module
    Application {
        func: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `call Module:Func(Args)`; `func` is an atom name
    InterModuleCall {
        module: Box<Expr>,
        func: String,
        args: Vec<Expr>,
    },
    ConstTuple(Vec<Const>),
}

impl Expr {
    pub fn atom(name: impl Into<String>) -> Self {
        Expr::Atom(name.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(Var::new(name))
    }
}

/// Constant term
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Const {
    Atom(String),
    Integer(i64),
    Float(f64),
    String(String),
    Tuple(Vec<Const>),
}
