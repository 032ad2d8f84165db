//! Bindings and the binding environment.
//!
//! The environment is a flat map from name to binding; there is no scope
//! stack. A subroutine call runs against the caller's map with the formal
//! parameters bound on top, then `restore_after_call` removes the formals
//! and reinstates whatever they masked.

use std::fmt;

use rustc_hash::FxHashMap;

use aqa_ir::{ExprId, Name};

use crate::Value;

/// An environment entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Variable {
        value: Value,
        constant: bool,
    },
    Subroutine {
        body: Option<ExprId>,
        params: Vec<Name>,
        ret: Option<ExprId>,
    },
}

impl Binding {
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self, Binding::Variable { .. })
    }

    #[inline]
    pub fn is_subroutine(&self) -> bool {
        matches!(self, Binding::Subroutine { .. })
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Binding::Variable { constant: true, .. })
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Variable {
                value,
                constant: false,
            } => write!(f, "{value}"),
            Binding::Variable {
                value,
                constant: true,
            } => write!(f, "{value} (constant)"),
            Binding::Subroutine { params, .. } => {
                f.write_str("SUBROUTINE(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Why an assignment was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The name is bound to a constant variable.
    Immutable,
    /// The name is bound to a subroutine.
    Subroutine,
}

/// Name to binding map threaded through evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<Name, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `name` to a variable, replacing any previous binding.
    pub fn define_variable(&mut self, name: Name, value: Value, constant: bool) {
        self.bindings.insert(name, Binding::Variable { value, constant });
    }

    /// Bind `name` to a subroutine, replacing any previous binding.
    pub fn define_subroutine(
        &mut self,
        name: Name,
        body: Option<ExprId>,
        params: Vec<Name>,
        ret: Option<ExprId>,
    ) {
        self.bindings.insert(name, Binding::Subroutine { body, params, ret });
    }

    /// Assign through `name`. Unbound names and mutable variables accept
    /// the new value; constants and subroutines refuse it and are left
    /// untouched.
    pub fn assign(&mut self, name: &Name, value: Value, constant: bool) -> Result<(), AssignError> {
        match self.bindings.get(name.as_str()) {
            Some(Binding::Subroutine { .. }) => Err(AssignError::Subroutine),
            Some(Binding::Variable { constant: true, .. }) => Err(AssignError::Immutable),
            Some(Binding::Variable { .. }) | None => {
                self.define_variable(name.clone(), value, constant);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    /// Undo the parameter masking of a finished call.
    ///
    /// Removes every formal parameter from `self`, then copies back from
    /// `caller` each binding whose name is no longer present. Other
    /// changes the body made to caller-visible names are kept.
    pub fn restore_after_call(&mut self, caller: &Environment, params: &[Name]) {
        for param in params {
            self.bindings.remove(param.as_str());
        }
        for (name, binding) in &caller.bindings {
            if !self.bindings.contains_key(name.as_str()) {
                self.bindings.insert(name.clone(), binding.clone());
            }
        }
    }

    /// Bindings sorted by name.
    pub fn snapshot(&self) -> Vec<(&Name, &Binding)> {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

#[cfg(test)]
mod tests;
