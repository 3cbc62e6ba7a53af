use std::{
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: a stack of variable scopes and a
/// flat table of user-defined functions.
///
/// ## Scoping
///
/// The bottom of the stack is the global scope. It always exists and is
/// never popped. Blocks push a scope on entry and pop it on exit. A function
/// call hides every scope above the global one for its duration, so a function
/// body sees only its own parameters, its nested scopes and the globals.
pub struct Context {
    scope_stack: Vec<HashMap<String, Value>>,
    functions:   HashMap<String, Rc<FunctionDef>>,
}

/// The scopes of a caller that are hidden while a function body runs.
///
/// Returned by [`Context::enter_call`] and handed back to
/// [`Context::exit_call`] to restore them.
#[must_use = "hidden scopes must be restored with `Context::exit_call`"]
pub struct HiddenScopes(Vec<HashMap<String, Value>>);

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a new evaluation context with an empty global scope and no
    /// user-defined functions.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions:   HashMap::new(), }
    }

    /// Adds a fresh empty scope on top of the scope stack.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::context::Context;
    ///
    /// let mut context = Context::new();
    /// let initial = context.scope_depth();
    ///
    /// context.push_scope();
    ///
    /// assert_eq!(context.scope_depth(), initial + 1);
    /// ```
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Removes the innermost local scope.
    ///
    /// The global scope is never removed; popping with only the global scope
    /// left does nothing.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::context::Context;
    ///
    /// let mut context = Context::new();
    /// context.pop_scope();
    ///
    /// assert_eq!(context.scope_depth(), 1);
    /// ```
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Returns the number of live scopes, including the global scope.
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Retrieves a variable from the current scope stack.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope. Returns `None` if the variable is not defined in any
    /// active scope.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::{context::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Number(5.0));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Returns `true` if the variable is visible in any active scope.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.get_variable(name).is_some()
    }

    /// Defines a variable in the current (innermost) scope, shadowing any
    /// outer variable of the same name.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::{context::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("a", Value::Number(1.0));
    /// context.push_scope();
    /// context.define_local("a", Value::Number(2.0));
    ///
    /// assert_eq!(context.get_variable("a"), Some(&Value::Number(2.0)));
    /// context.pop_scope();
    /// assert_eq!(context.get_variable("a"), Some(&Value::Number(1.0)));
    /// ```
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Assigns a value to the nearest scope containing the variable.
    ///
    /// Search proceeds from the innermost scope outward.
    /// If the variable is not found, it is inserted into the current scope.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::{context::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("y", Value::Number(1.0));
    /// context.push_scope();
    ///
    /// context.assign_nearest("y", Value::Number(5.0));
    /// context.pop_scope();
    ///
    /// assert_eq!(context.get_variable("y"), Some(&Value::Number(5.0)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.scope_stack
                                .iter_mut()
                                .rev()
                                .find_map(|scope| scope.get_mut(name))
        {
            *slot = value;
            return;
        }
        self.define_local(name, value);
    }

    /// Starts a user function call.
    ///
    /// Every scope above the global one is hidden and a new scope holding
    /// `bindings` is pushed in their place.
    ///
    /// # Returns
    /// The hidden scopes, which must be passed to [`Context::exit_call`] when
    /// the call finishes.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use calcscript::interpreter::{context::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.push_scope();
    /// context.define_local("local", Value::Number(1.0));
    ///
    /// let hidden = context.enter_call(HashMap::from([("n".to_string(), Value::Number(3.0))]));
    /// assert!(context.get_variable("local").is_none());
    /// assert_eq!(context.get_variable("n"), Some(&Value::Number(3.0)));
    ///
    /// context.exit_call(hidden);
    /// assert!(context.get_variable("n").is_none());
    /// assert_eq!(context.get_variable("local"), Some(&Value::Number(1.0)));
    /// ```
    pub fn enter_call(&mut self, bindings: HashMap<String, Value>) -> HiddenScopes {
        let hidden = self.scope_stack.split_off(1);
        self.scope_stack.push(bindings);
        HiddenScopes(hidden)
    }

    /// Finishes a user function call, discarding the call's scopes and
    /// restoring the caller's.
    pub fn exit_call(&mut self, hidden: HiddenScopes) {
        self.scope_stack.truncate(1);
        self.scope_stack.extend(hidden.0);
    }

    /// Registers a user-defined function, replacing any previous definition
    /// with the same name.
    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Looks up a user-defined function by name.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Returns `true` if a user-defined function with this name exists.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the sorted, de-duplicated names of all variables in every live
    /// scope together with all user-defined function names.
    ///
    /// # Example
    /// ```
    /// use calcscript::interpreter::{context::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("b", Value::Null);
    /// context.push_scope();
    /// context.define_local("a", Value::Null);
    /// context.define_local("b", Value::Null);
    ///
    /// assert_eq!(context.identifiers(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.scope_stack
            .iter()
            .flat_map(HashMap::keys)
            .chain(self.functions.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns the variables of the global scope with their values, sorted by
    /// name.
    #[must_use]
    pub fn global_variables(&self) -> Vec<(String, Value)> {
        let mut variables = self.scope_stack
                                .first()
                                .map(|scope| {
                                    scope.iter()
                                         .map(|(name, value)| (name.clone(), value.clone()))
                                         .collect::<Vec<_>>()
                                })
                                .unwrap_or_default();
        variables.sort_by(|a, b| a.0.cmp(&b.0));
        variables
    }

    /// Returns the sorted user-defined functions.
    #[must_use]
    pub fn functions(&self) -> Vec<Rc<FunctionDef>> {
        let mut functions = self.functions.values().cloned().collect::<Vec<_>>();
        functions.sort_by(|a, b| a.name.cmp(&b.name));
        functions
    }

    /// Discards all variables and functions, leaving a single empty global
    /// scope.
    pub fn clear(&mut self) {
        self.scope_stack.clear();
        self.scope_stack.push(HashMap::new());
        self.functions.clear();
    }
}
