use std::rc::Rc;

use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every construct that produces a value: literals, variable
/// references, operators, function calls and the conditional expression.
/// Each variant carries the source line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable, with its original spelling.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation, including assignment and compound assignment.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation, logical not, increment, decrement).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// The expression naming the function. Only identifiers are callable.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Conditional expression: `if (cond) a else b`.
    IfExpr {
        /// The condition expression.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use calcscript::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::IfExpr { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// Definitions are shared between the syntax tree that declared them and the
/// function table of the context, so a function stays callable after the
/// source that defined it has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in call order.
    pub params: Vec<String>,
    /// The statement executed when the function is called.
    pub body:   Statement,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
///
/// A program is a sequence of statements. Only expression statements and
/// `return` produce a value that is shown to the user; every other statement
/// runs for its effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if (cond) statement else statement`, with an optional else branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (cond) statement`.
    While {
        /// The loop condition, checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for (init; cond; update) statement`.
    For {
        /// Expression evaluated once before the loop.
        init:      Expr,
        /// The loop condition, checked before every iteration.
        condition: Expr,
        /// Expression evaluated after every iteration.
        update:    Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A braced sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// `return` with an optional value.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print a, b, ...`
    Print {
        /// The expressions whose display forms are printed.
        arguments: Vec<Expr>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Block { line, .. }
            | Self::Return { line, .. }
            | Self::Print { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, logical connectives and
/// the assignment family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
    /// Remainder (`mod` or `%`)
    Mod,
    /// Integer division truncating toward zero (`div`)
    IntDiv,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
    /// Assignment (`=`)
    Assign,
    /// Compound addition (`+=`)
    AddAssign,
    /// Compound subtraction (`-=`)
    SubAssign,
    /// Compound multiplication (`*=`)
    MulAssign,
    /// Compound division (`/=`)
    DivAssign,
}

impl BinaryOperator {
    /// Returns the arithmetic operator a compound assignment applies, or
    /// `None` for every other operator.
    ///
    /// # Example
    /// ```
    /// use calcscript::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::MulAssign.compound_base(), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::Assign.compound_base(), None);
    /// ```
    #[must_use]
    pub const fn compound_base(self) -> Option<Self> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubAssign => Some(Self::Sub),
            Self::MulAssign => Some(Self::Mul),
            Self::DivAssign => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns `true` for `=` and the compound assignments.
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(self,
                 Self::Assign | Self::AddAssign | Self::SubAssign | Self::MulAssign | Self::DivAssign)
    }
}

/// Represents a unary operator.
///
/// Unary operators include negation, logical NOT, and the prefix and postfix
/// forms of increment and decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x` or `!x`).
    Not,
    /// `++x`: increments, yields the new value.
    PreIncrement,
    /// `x++`: increments, yields the old value.
    PostIncrement,
    /// `--x`: decrements, yields the new value.
    PreDecrement,
    /// `x--`: decrements, yields the old value.
    PostDecrement,
}

impl UnaryOperator {
    /// Returns `true` for the operators that modify a variable in place.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self,
                 Self::PreIncrement | Self::PostIncrement | Self::PreDecrement | Self::PostDecrement)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, AddAssign, And, Assign, Div, DivAssign, Equal, Greater, GreaterEqual, IntDiv,
            Less, LessEqual, Mod, Mul, MulAssign, NotEqual, Or, Pow, Sub, SubAssign,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "mod",
            IntDiv => "div",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "not",
            Self::PreIncrement | Self::PostIncrement => "++",
            Self::PreDecrement | Self::PostDecrement => "--",
        };
        write!(f, "{operator}")
    }
}
