// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Modules and functions.

use crate::{Const, Expr, Var};

/// A compiled module.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub name: String,
    /// Exported functions, in function order
    pub exports: Vec<FuncName>,
    pub functions: Vec<Func>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), exports: Vec::new(), functions: Vec::new() }
    }

    pub fn function(&self, name: &str, arity: usize) -> Option<&Func> {
        self.functions.iter().find(|f| f.name.name == name && f.name.arity == arity)
    }

    pub fn is_exported(&self, name: &str, arity: usize) -> bool {
        self.exports.iter().any(|e| e.name == name && e.arity == arity)
    }
}

/// Function identity in the target runtime: `name/arity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuncName {
    pub name: String,
    pub arity: usize,
}

impl FuncName {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self { name: name.into(), arity }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Func {
    pub name: FuncName,
    pub params: Vec<Var>,
    /// `None` for a function that never returns a value
    pub body: Option<Expr>,
    pub annotation: Annotation,
}

/// Constant attributes attached to a function definition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub attrs: Vec<Const>,
}

impl Annotation {
    /// The `{function, {Name, Arity}}` attribute every definition carries.
    pub fn function(name: &FuncName) -> Self {
        let arity = i64::try_from(name.arity).unwrap_or(i64::MAX);
        Self {
            attrs: vec![Const::Tuple(vec![
                Const::Atom("function".to_string()),
                Const::Tuple(vec![Const::Atom(name.name.clone()), Const::Integer(arity)]),
            ])],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_annotation() {
        let ann = Annotation::function(&FuncName::new("main", 2));
        assert_eq!(ann.attrs.len(), 1);
        assert_eq!(ann.attrs[0].to_string(), "{'function', {'main', 2}}");
    }

    #[test]
    fn lookup_by_name_and_arity() {
        let mut module = Module::new("m");
        let name = FuncName::new("f", 1);
        module.functions.push(Func {
            name: name.clone(),
            params: vec![Var::new("X")],
            body: None,
            annotation: Annotation::function(&name),
        });
        module.exports.push(name);

        assert!(module.function("f", 1).is_some());
        assert!(module.function("f", 0).is_none());
        assert!(module.is_exported("f", 1));
        assert!(!module.is_exported("g", 1));
    }
}
