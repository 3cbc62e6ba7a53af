use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{context::Context, stack::ensure_sufficient_stack, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Return` travels outward through blocks and loops until a user function
/// call consumes it. At the top level it ends the program like a normal
/// completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// The statement completed and produced this value.
    Normal(Value),
    /// A `return` was executed with this payload.
    Return(Value),
}

/// Walks the syntax tree and executes it against a [`Context`].
///
/// An evaluator borrows everything it needs for the duration of one run: the
/// context holding variables and functions, the sink `print` writes to, and
/// the execution limits. It also counts active calls and executed steps so
/// that both limits can be enforced.
///
/// ## Usage
///
/// A fresh `Evaluator` is created for every `execute` call of the
/// interpreter; the state that must survive between calls lives in the
/// `Context`.
pub struct Evaluator<'a> {
    pub(crate) context:    &'a mut Context,
    pub(crate) output:     &'a mut dyn Write,
    pub(crate) config:     &'a Config,
    pub(crate) call_depth: usize,
    pub(crate) steps:      u64,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over the given context, output sink and limits.
    pub fn new(context: &'a mut Context, output: &'a mut dyn Write, config: &'a Config) -> Self {
        Self { context,
               output,
               config,
               call_depth: 0,
               steps: 0 }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations, function calls and
    /// conditional expressions.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use calcscript::{
    ///     Config,
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{context::Context, evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let mut output = Vec::new();
    /// let config = Config::default();
    /// let mut evaluator = Evaluator::new(&mut context, &mut output, &config);
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: Value::Number(2.0),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Add,
    ///                             right: Box::new(Expr::Literal { value: Value::from("x"),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(evaluator.eval(&expr).unwrap(), Value::from("2x"));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr(expr))
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.clone()),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line),
            Expr::UnaryOp { op, operand, line } => self.eval_unary_op(*op, operand, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::FunctionCall { callee,
                                 arguments,
                                 line, } => self.eval_function_call(callee, arguments, *line),
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                if self.eval(condition)?.to_bool() {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// Expression statements produce their value; `print`, function
    /// definitions and loops that never ran produce `Null`. A `return`
    /// produces [`Flow::Return`], which every enclosing construct forwards
    /// unchanged until a function call consumes it.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// How the statement finished, together with its value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.eval_statement_inner(statement))
    }

    fn eval_statement_inner(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Flow::Normal(self.eval(expr)?)),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body, line } => self.eval_while(condition, body, *line),
            Statement::For { init,
                             condition,
                             update,
                             body,
                             line, } => self.eval_for(init, condition, update, body, *line),
            Statement::Block { statements, .. } => self.eval_block(statements),
            Statement::Function(def) => {
                self.define_function(def)?;
                Ok(Flow::Normal(Value::Null))
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            Statement::Print { arguments, line } => {
                self.eval_print(arguments, *line)?;
                Ok(Flow::Normal(Value::Null))
            },
        }
    }

    /// Evaluates a sequence of top-level statements.
    ///
    /// Statements run in order until one fails or returns. A top-level
    /// `return` ends the program and its value becomes the result. Otherwise
    /// the result is the value of the last statement, but only when that
    /// statement is an expression; loops, blocks, `print` and definitions
    /// yield no result.
    ///
    /// # Parameters
    /// - `statements`: Slice of top-level statements.
    ///
    /// # Returns
    /// The value to show for the program, if any.
    ///
    /// # Example
    /// ```
    /// use calcscript::{
    ///     Config,
    ///     interpreter::{
    ///         context::Context, evaluator::core::Evaluator, lexer::tokenize, parser::parse,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut context = Context::new();
    /// let mut output = Vec::new();
    /// let config = Config::default();
    /// let mut evaluator = Evaluator::new(&mut context, &mut output, &config);
    ///
    /// let program = parse(&tokenize("x = 4; x * 2").unwrap()).unwrap();
    /// assert_eq!(evaluator.eval_program(&program).unwrap(), Some(Value::Number(8.0)));
    ///
    /// let program = parse(&tokenize("while (x > 0) x--").unwrap()).unwrap();
    /// assert_eq!(evaluator.eval_program(&program).unwrap(), None);
    /// ```
    pub fn eval_program(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut shown = None;
        for statement in statements {
            match self.eval_statement(statement)? {
                Flow::Return(value) => return Ok(Some(value)),
                Flow::Normal(value) => {
                    shown = matches!(statement, Statement::Expression { .. }).then_some(value);
                },
            }
        }
        Ok(shown)
    }

    /// Looks a variable up in the context.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if no visible scope defines the name.
    pub(crate) fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.context
            .get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
