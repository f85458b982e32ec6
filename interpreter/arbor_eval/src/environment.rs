//! Environment for variable scoping.
//!
//! Uses a scope stack (not cloning) so entering and leaving a block is
//! a push/pop. Every variable slot is mutable; shadowing is layering a
//! new binding in an inner scope, never overwriting the outer one.

// Rc is the intentional implementation detail of LocalScope<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of LocalScope<T>"
)]

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use arbor_ir::Name;

use crate::Value;

/// Error returned by `Scope::assign` when the target is not bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any enclosing scope.
    Unbound,
}

/// A single-threaded scope wrapper for reference-counted interior
/// mutability.
///
/// Wraps `Rc<RefCell<T>>` so that all scope allocations go through the
/// `LocalScope::new()` factory method. `Rc`, not `Arc`: evaluation is
/// single-threaded and scopes never cross threads.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Variable bindings in this scope (`FxHashMap` for faster hashing
    /// with `Name` keys).
    bindings: FxHashMap<Name, Value>,
    /// Parent scope (for lexical scoping).
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define a variable in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable by name, walking parent scopes.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(*value);
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Assign to a variable in the nearest scope that binds it.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Unbound)
    }
}

/// Environment for one evaluation call, using a scope stack.
///
/// Created fresh per top-level evaluation; nodes never own an
/// environment, they receive it by reference during the walk.
pub struct Environment {
    /// Stack of scopes, with the current scope at the top.
    scopes: Vec<LocalScope<Scope>>,
    /// Base scope (always at the bottom; holds initial bindings).
    base: LocalScope<Scope>,
}

impl Environment {
    /// Create a new environment with an empty base scope.
    pub fn new() -> Self {
        let base = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![base.clone()],
            base,
        }
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Push a new scope onto the stack.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope();
        let new_scope = LocalScope::new(Scope::with_parent(parent));
        self.scopes.push(new_scope);
    }

    /// Pop the current scope from the stack. The base scope stays.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Get the current scope.
    #[inline]
    fn current_scope(&self) -> LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.base).clone()
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.scopes
            .last()
            .unwrap_or(&self.base)
            .borrow_mut()
            .define(name, value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes
            .last()
            .unwrap_or(&self.base)
            .borrow()
            .lookup(name)
    }

    /// Assign to a variable in the nearest scope that binds it.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), AssignError> {
        self.scopes
            .last()
            .unwrap_or(&self.base)
            .borrow_mut()
            .assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_ir::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scope_define_lookup() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let mut scope = Scope::new();
        scope.define(x, Value::Int(42));
        assert_eq!(scope.lookup(x), Some(Value::Int(42)));
    }

    #[test]
    fn test_scope_shadowing() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let parent = LocalScope::new(Scope::new());
        parent.borrow_mut().define(x, Value::Int(1));

        let mut child = Scope::with_parent(parent);
        child.define(x, Value::Int(2));

        // Child's binding shadows parent's
        assert_eq!(child.lookup(x), Some(Value::Int(2)));
    }

    #[test]
    fn test_assign_writes_nearest_binding() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let parent = LocalScope::new(Scope::new());
        parent.borrow_mut().define(x, Value::Int(1));

        let mut child = Scope::with_parent(parent.clone());
        assert!(child.assign(x, Value::Int(5)).is_ok());

        // No binding in child, so the parent's slot was updated
        assert_eq!(parent.borrow().lookup(x), Some(Value::Int(5)));
    }

    #[test]
    fn test_environment_push_pop() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.define(x, Value::Int(1));

        env.push_scope();
        env.define(x, Value::Int(2));
        assert_eq!(env.lookup(x), Some(Value::Int(2)));

        env.pop_scope();
        assert_eq!(env.lookup(x), Some(Value::Int(1)));
    }

    #[test]
    fn test_environment_assign_unbound() {
        let mut interner = StringInterner::new();
        let missing = interner.intern("missing");

        let mut env = Environment::new();
        assert_eq!(
            env.assign(missing, Value::Int(1)),
            Err(AssignError::Unbound)
        );
    }

    #[test]
    fn test_inner_assignment_does_not_touch_shadowed_outer() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.define(x, Value::Int(10));

        env.push_scope();
        env.define(x, Value::Int(0));
        assert!(env.assign(x, Value::Int(99)).is_ok());
        env.pop_scope();

        // The outer binding never saw the inner writes
        assert_eq!(env.lookup(x), Some(Value::Int(10)));
    }

    #[test]
    fn test_pop_keeps_base_scope() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let mut env = Environment::new();
        env.define(x, Value::Int(1));
        env.pop_scope();
        env.pop_scope();
        assert_eq!(env.depth(), 1);
        assert_eq!(env.lookup(x), Some(Value::Int(1)));
    }
}
