use std::{cell::RefCell, rc::Rc};

use rustc_hash::FxHashMap;

use crate::{error::RuntimeError, interpreter::value::core::Object};

/// A shared handle to an [`Environment`].
///
/// Scopes are reference counted: a child scope holds its parent, and a
/// function value holds the scope it was defined in, so a scope lives as long
/// as the longest-lived closure that captured it.
pub type Env = Rc<RefCell<Environment>>;

/// One lexical scope: a mutable name-to-value map plus an optional link to the
/// enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: FxHashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn global() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope nested inside `outer`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Object, environment::Environment};
    ///
    /// let global = Environment::global();
    /// global.borrow_mut().define("x", Object::Integer(1));
    ///
    /// let inner = Environment::enclosed(&global);
    /// inner.borrow_mut().define("x", Object::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
    /// assert_eq!(global.borrow().get("x"), Some(Object::Integer(1)));
    /// ```
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: FxHashMap::default(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks `name` up in this scope, then outward through the chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope, shadowing any outer binding and replacing
    /// an existing binding of the same scope.
    pub fn define(&mut self, name: &str, value: Object) {
        self.store.insert(name.to_string(), value);
    }

    /// Updates the nearest scope that already binds `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownIdentifier` when no scope in the chain
    /// binds `name`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Object, environment::Environment};
    ///
    /// let global = Environment::global();
    /// global.borrow_mut().define("count", Object::Integer(1));
    /// let inner = Environment::enclosed(&global);
    ///
    /// inner.borrow_mut().assign("count", Object::Integer(2)).unwrap();
    /// assert_eq!(global.borrow().get("count"), Some(Object::Integer(2)));
    ///
    /// assert!(inner.borrow_mut().assign("missing", Object::Null).is_err());
    /// ```
    pub fn assign(&mut self, name: &str, value: Object) -> Result<(), RuntimeError> {
        if let Some(slot) = self.store.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.outer {
            Some(outer) => outer.borrow_mut().assign(name, value),
            None => Err(RuntimeError::UnknownIdentifier { name: name.to_string() }),
        }
    }
}
