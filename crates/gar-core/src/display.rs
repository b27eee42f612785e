// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Display implementations for Core IR types, in Core Erlang notation.

use std::fmt;

use crate::{Const, Expr, FuncName, Var};

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for FuncName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Const::Atom(a) => write!(f, "'{}'", a),
            Const::Integer(v) => write!(f, "{}", v),
            Const::Float(v) => write!(f, "{:?}", v),
            Const::String(s) => write!(f, "{:?}", s),
            Const::Tuple(elems) => {
                write!(f, "{{")?;
                write_list(f, elems)?;
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(v) => write!(f, "{}", v),
            Expr::Float(v) => write!(f, "{:?}", v),
            Expr::String(s) => write!(f, "{:?}", s),
            Expr::Atom(a) => write!(f, "'{}'", a),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Application { func, args } => {
                write!(f, "apply {}(", func)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expr::InterModuleCall { module, func, args } => {
                write!(f, "call {}:'{}'(", module, func)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expr::ConstTuple(elems) => {
                write!(f, "{{")?;
                write_list(f, elems)?;
                write!(f, "}}")
            }
        }
    }
}
