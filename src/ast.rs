// ABOUTME: Syntax tree for parsed programs: functions, scopes, statements, expressions

use crate::builtins::Builtin;

/// A value-producing node. Operator operands and call arguments are always
/// variable names, never nested expressions or literals.
///
/// A bare name on an assignment's right-hand side parses as a call with no
/// arguments; whether it invokes a function or reads a variable is decided
/// by resolution, where a defined function always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(i64),
    BuiltinOp {
        op: Builtin,
        left: String,
        right: String,
    },
    Call {
        callee: String,
        args: Vec<String>,
    },
}

/// The two predicate-scoped block forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    If,
    While,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assignment {
        target: String,
        rhs: Expression,
        line: usize,
    },
    Block {
        kind: BlockKind,
        predicate: String,
        body: Scope,
        line: usize,
    },
}

impl Statement {
    /// The 1-based source line the statement came from.
    pub fn line(&self) -> usize {
        match self {
            Statement::Assignment { line, .. } | Statement::Block { line, .. } => *line,
        }
    }
}

/// An ordered run of statements sharing one indentation prefix. Grouping
/// only; it carries no state of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub statements: Vec<Statement>,
}

/// A user-defined function. The environment entry named after the function
/// itself is the return slot: seeded to 0 on invocation, its final value is
/// the return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Parameters in declaration order. A lexically repeated name is bound
    /// repeatedly, so the last occurrence wins.
    pub params: Vec<String>,
    pub body: Scope,
    /// 1-based line of the `def` header.
    pub line: usize,
}

/// A parsed program: the function table, sole owner of all bodies. Call
/// nodes hold callee names as strings and resolve through `lookup`, so the
/// tree contains no cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    /// Finds a function by name. Names are unique, enforced at parse time.
    pub fn lookup(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}
