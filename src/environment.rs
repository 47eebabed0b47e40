//! Compile-scoped naming and parameter registry.
//!
//! One `Environment` tree exists per `build()` call. Scope records form a
//! parent-linked chain (subquery bodies compile in child scopes) while the
//! name counters and the output parameter table live in a single shared
//! state owned by the root, so generated names stay globally unique across
//! the whole compiled statement and every parameter surfaces in one flat map.
//!
//! Resolution order for a variable name:
//! 1. Explicit caller-supplied name → emitted verbatim, never counted
//! 2. Memoized allocation in this scope or any ancestor scope
//! 3. Fresh allocation from the shared per-prefix counter

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use log::trace;

use crate::expression::{Parameter, ParameterInner, Variable, VariableInner};
use crate::renderer::errors::RenderError;
use crate::value::Value;

/// Identity key for AST node handles.
///
/// Two handles compare equal only when they share the same allocation, so
/// memoization is by reference identity, never by structural equality. The
/// wrapped `Rc` keeps the referent alive for as long as the key is held.
pub(crate) struct RefId<T>(Rc<T>);

impl<T> RefId<T> {
    pub(crate) fn new(inner: Rc<T>) -> Self {
        Self(inner)
    }
}

impl<T> Clone for RefId<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for RefId<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for RefId<T> {}

impl<T> Hash for RefId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

/// Counter and parameter state shared across every scope of one compile pass.
struct SharedScope {
    /// Next index per name prefix ("this", "var", "p", ...)
    name_counters: HashMap<&'static str, usize>,
    /// Next auto-generated parameter index
    parameter_counter: usize,
    /// Parameter identity → allocated name (idempotent registration)
    parameter_names: HashMap<RefId<ParameterInner>, String>,
    /// The output parameter map accumulated during rendering
    parameters: Vec<(String, Value)>,
}

impl SharedScope {
    fn next_name(&mut self, prefix: &'static str) -> String {
        let counter = self.name_counters.entry(prefix).or_insert(0);
        let name = format!("{}{}", prefix, counter);
        *counter += 1;
        name
    }

    fn contains_parameter(&self, key: &str) -> bool {
        self.parameters.iter().any(|(name, _)| name == key)
    }
}

/// Per-scope name memoization, parent-linked for subquery compilation.
struct ScopeRecord {
    names: HashMap<RefId<VariableInner>, String>,
    parent: Option<Rc<RefCell<ScopeRecord>>>,
}

/// The naming and parameter scope handed to every render step.
///
/// `child()` opens a nested scope for a subquery body; the child shares the
/// counters and parameter table with its parent (names remain globally
/// unique within one compiled statement) but can be discarded independently
/// once the body has rendered.
pub struct Environment {
    record: Rc<RefCell<ScopeRecord>>,
    shared: Rc<RefCell<SharedScope>>,
}

impl Environment {
    /// Fresh root scope. `build()` creates one per call; constructing one
    /// directly is only useful for driving `Render` by hand.
    pub fn new() -> Self {
        Self {
            record: Rc::new(RefCell::new(ScopeRecord {
                names: HashMap::new(),
                parent: None,
            })),
            shared: Rc::new(RefCell::new(SharedScope {
                name_counters: HashMap::new(),
                parameter_counter: 0,
                parameter_names: HashMap::new(),
                parameters: Vec::new(),
            })),
        }
    }

    /// Open a child scope for compiling a nested subquery body.
    pub fn child(&self) -> Environment {
        Environment {
            record: Rc::new(RefCell::new(ScopeRecord {
                names: HashMap::new(),
                parent: Some(Rc::clone(&self.record)),
            })),
            shared: Rc::clone(&self.shared),
        }
    }

    /// Stable name for a variable within this compile pass.
    ///
    /// Explicit names are returned verbatim without touching the counters;
    /// anonymous variables are allocated a `{prefix}{n}` name on first sight
    /// and memoized by identity, falling back through ancestor scopes so a
    /// node referenced from both an outer clause and a subquery body renders
    /// the same name everywhere.
    pub fn variable_name(&mut self, variable: &Variable) -> String {
        if let Some(name) = variable.explicit_name() {
            return name.to_string();
        }
        let id = variable.ref_id();
        if let Some(existing) = self.lookup(&id) {
            return existing;
        }
        let name = self.shared.borrow_mut().next_name(variable.prefix());
        trace!("allocated variable name {}", name);
        self.record.borrow_mut().names.insert(id, name.clone());
        name
    }

    fn lookup(&self, id: &RefId<VariableInner>) -> Option<String> {
        let mut current = Some(Rc::clone(&self.record));
        while let Some(record) = current {
            let next = {
                let borrowed = record.borrow();
                if let Some(name) = borrowed.names.get(id) {
                    return Some(name.clone());
                }
                borrowed.parent.clone()
            };
            current = next;
        }
        None
    }

    /// Stable parameter name for a parameter instance, registering its bound
    /// value in the output map on first sight. Idempotent by identity: the
    /// same instance referenced from K places yields one entry.
    ///
    /// Registration fails when the resolved key is already occupied by a
    /// different registration (an explicit name reused across distinct
    /// instances, or a raw fragment that claimed the slot first).
    pub fn parameter(&mut self, parameter: &Parameter) -> Result<String, RenderError> {
        let id = parameter.ref_id();
        let mut shared = self.shared.borrow_mut();
        if let Some(existing) = shared.parameter_names.get(&id) {
            return Ok(existing.clone());
        }
        let name = match parameter.explicit_name() {
            Some(explicit) => explicit.to_string(),
            None => {
                let name = format!("param{}", shared.parameter_counter);
                shared.parameter_counter += 1;
                name
            }
        };
        if shared.contains_parameter(&name) {
            return Err(RenderError::ParameterKeyCollision(name));
        }
        trace!("registered parameter {}", name);
        shared
            .parameters
            .push((name.clone(), parameter.value().clone()));
        shared.parameter_names.insert(id, name.clone());
        Ok(name)
    }

    /// Merge a parameter produced by a raw fragment under its caller-chosen
    /// key. The key must not already be bound in this compilation.
    pub fn add_raw_parameter(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), RenderError> {
        let key = key.into();
        let mut shared = self.shared.borrow_mut();
        if shared.contains_parameter(&key) {
            return Err(RenderError::ParameterKeyCollision(key));
        }
        shared.parameters.push((key, value.into()));
        Ok(())
    }

    /// Snapshot of the parameter map accumulated so far, in allocation order.
    pub fn parameters(&self) -> Vec<(String, Value)> {
        self.shared.borrow().parameters.clone()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
