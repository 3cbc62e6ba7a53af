use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Flow},
            function::{builtin, log, min_max, root, trig},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line
/// number, and returns the resulting value.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"  => { arity: Arity::Exact(1), func: trig::asin },
    "acos"  => { arity: Arity::Exact(1), func: trig::acos },
    "atan"  => { arity: Arity::Exact(1), func: builtin::atan },
    "log"   => { arity: Arity::Exact(1), func: |args, line| log::log("log", args, line) },
    "ln"    => { arity: Arity::Exact(1), func: |args, line| log::log("ln", args, line) },
    "log10" => { arity: Arity::Exact(1), func: |args, line| log::log("log10", args, line) },
    "log2"  => { arity: Arity::Exact(1), func: |args, line| log::log("log2", args, line) },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "sqrt"  => { arity: Arity::Exact(1), func: root::sqrt },
    "cbrt"  => { arity: Arity::Exact(1), func: builtin::cbrt },
    "root"  => { arity: Arity::Exact(2), func: root::root },
    "pow"   => { arity: Arity::Exact(2), func: builtin::pow },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "min"   => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("min", args, line) },
    "max"   => { arity: Arity::AtLeast(1), func: |args, line| min_max::min_max("max", args, line) },
    "floor" => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("floor", args, line) },
    "ceil"  => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("ceil", args, line) },
    "round" => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("round", args, line) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// Returns `true` if `name` is a builtin function.
///
/// # Example
/// ```
/// use calcscript::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("sqrt"));
/// assert!(!is_builtin("square"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The callee must be a plain name. Arguments are evaluated left to
    /// right before the name is resolved. Builtins are looked up first, then
    /// user-defined functions.
    ///
    /// # Parameters
    /// - `callee`: The expression in call position.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function_call(&mut self,
                                     callee: &Expr,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let Expr::Identifier { name, .. } = callee else {
            return Err(RuntimeError::InvalidCallee { line });
        };

        let args = arguments.iter()
                            .map(|argument| self.eval(argument))
                            .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            if !builtin.arity.check(args.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.clone(),
                                                                 expected: builtin.arity.describe(),
                                                                 found: args.len(),
                                                                 line });
            }
            tracing::trace!(function = builtin.name, args = args.len(), "calling builtin");
            return (builtin.func)(&args, line);
        }

        let Some(function) = self.context.get_function(name) else {
            return Err(RuntimeError::UnknownFunction { name: name.clone(),
                                                       line });
        };

        self.call_user_function(&function, args, line)
    }

    /// Executes a user-defined function.
    ///
    /// The caller's local scopes are hidden and the parameters are bound in
    /// a fresh scope on top of the globals. The body runs until it finishes
    /// or executes `return`. The caller's scopes and the call depth are
    /// restored whatever the outcome.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `RecursionLimit` if the call would exceed the configured depth.
    /// - Any error raised by the body.
    ///
    /// # Returns
    /// The returned value, or `Null` if the body ends without `return`.
    fn call_user_function(&mut self,
                          function: &FunctionDef,
                          args: Vec<Value>,
                          line: usize)
                          -> EvalResult<Value> {
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: function.name.clone(),
                                                             expected: function.params.len().to_string(),
                                                             found: args.len(),
                                                             line });
        }
        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_call_depth,
                                                      line });
        }
        self.tick(line)?;

        tracing::trace!(function = %function.name, depth = self.call_depth + 1, "calling user function");

        let bindings = function.params
                               .iter()
                               .cloned()
                               .zip(args)
                               .collect::<HashMap<_, _>>();

        let hidden = self.context.enter_call(bindings);
        self.call_depth += 1;
        let result = self.eval_statement(&function.body);
        self.call_depth -= 1;
        self.context.exit_call(hidden);

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal(_) => Ok(Value::Null),
        }
    }

    /// Registers a user-defined function.
    ///
    /// A later definition with the same name replaces the earlier one.
    ///
    /// # Errors
    /// Returns `BuiltinRedefinition` if the name belongs to a builtin, since
    /// builtins are resolved first and the definition could never be called.
    pub(crate) fn define_function(&mut self, def: &Rc<FunctionDef>) -> EvalResult<()> {
        if is_builtin(&def.name) {
            return Err(RuntimeError::BuiltinRedefinition { name: def.name.clone(),
                                                           line: def.line, });
        }

        tracing::debug!(function = %def.name, params = def.params.len(), "defining function");
        self.context.define_function(Rc::clone(def));
        Ok(())
    }
}
