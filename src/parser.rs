// ABOUTME: Line-oriented, indentation-sensitive parser building the function table

use crate::ast::{BlockKind, Expression, Function, Program, Scope, Statement};
use crate::builtins::{is_builtin, Builtin};
use crate::error::Fault;
use crate::lexer::{is_identifier, is_int_literal};

/// Parses full source text into a program. The first violation aborts the
/// parse and is returned as a syntax fault at its 1-based line.
pub fn parse_program(source: &str) -> Result<Program, Fault> {
    Parser::new(source).parse()
}

struct Parser<'src> {
    lines: Vec<&'src str>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Parser {
            lines: source.split('\n').collect(),
        }
    }

    /// Top-level loop. Only blank lines and `def` headers are valid here;
    /// each `def` consumes its indented body before control returns.
    fn parse(&self) -> Result<Program, Fault> {
        let mut program = Program::default();
        let mut index = 0;

        while index < self.lines.len() {
            let line = self.lines[index];
            if line.trim().is_empty() {
                index += 1;
            } else if line.starts_with("def") {
                index = self.parse_function(index, &mut program)?;
            } else {
                return Err(Fault::syntax(index + 1));
            }
        }

        Ok(program)
    }

    /// Parses a `def` header and its one-space-indented body, returning the
    /// index of the first line past the function.
    fn parse_function(&self, index: usize, program: &mut Program) -> Result<usize, Fault> {
        let line_num = index + 1;
        let header: Vec<&str> = self.lines[index].split_whitespace().collect();

        if header.len() < 2 || header[0] != "def" {
            return Err(Fault::syntax(line_num));
        }

        let name = header[1];
        let params = &header[2..];

        for param in params {
            if !is_identifier(param) {
                return Err(Fault::syntax(line_num));
            }
        }
        if !is_identifier(name) || is_builtin(name) || program.lookup(name).is_some() {
            return Err(Fault::syntax(line_num));
        }

        // The record joins the table before its body parses, which is what
        // lets a body call its own function recursively.
        program.functions.push(Function {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            body: Scope::default(),
            line: line_num,
        });

        let (body, next) = self.parse_scope(index + 1, 1)?;
        let slot = program.functions.len() - 1;
        program.functions[slot].body = body;

        Ok(next)
    }

    /// Consumes the consecutive lines belonging to a scope at the given
    /// indent width: blank lines, or lines whose first non-space character
    /// is a letter at exactly that column. Returns the scope and the index
    /// of the first line that fell outside it.
    fn parse_scope(&self, mut index: usize, indent: usize) -> Result<(Scope, usize), Fault> {
        let mut scope = Scope::default();

        while index < self.lines.len() {
            let line = self.lines[index];
            if line.trim().is_empty() {
                index += 1;
                continue;
            }
            if !opens_at(line, indent) {
                break;
            }

            let line_num = index + 1;
            let parts: Vec<&str> = line.split_whitespace().collect();

            if parts.len() < 2 {
                return Err(Fault::syntax(line_num));
            } else if parts.len() == 2 {
                // two-token lines are predicate headers, nothing else
                let kind = match parts[0] {
                    "if" => BlockKind::If,
                    "while" => BlockKind::While,
                    _ => return Err(Fault::syntax(line_num)),
                };
                if !is_identifier(parts[1]) {
                    return Err(Fault::syntax(line_num));
                }

                let (body, next) = self.parse_scope(index + 1, indent + 1)?;
                scope.statements.push(Statement::Block {
                    kind,
                    predicate: parts[1].to_string(),
                    body,
                    line: line_num,
                });
                index = next;
            } else if parts[1] == "=" {
                scope.statements.push(parse_assignment(&parts, line_num)?);
                index += 1;
            } else {
                return Err(Fault::syntax(line_num));
            }
        }

        Ok((scope, index))
    }
}

/// A line opens inside a scope of width `indent` when it carries exactly
/// that many leading spaces followed by a letter.
fn opens_at(line: &str, indent: usize) -> bool {
    let bytes = line.as_bytes();
    bytes.len() > indent
        && bytes[..indent].iter().all(|&b| b == b' ')
        && bytes[indent].is_ascii_alphabetic()
}

/// Parses `<target> = <rhs…>` from a whitespace-split statement line.
fn parse_assignment(parts: &[&str], line_num: usize) -> Result<Statement, Fault> {
    let target = parts[0];
    if !is_identifier(target) {
        return Err(Fault::syntax(line_num));
    }

    let rhs = parse_rhs(&parts[2..], line_num)?;
    Ok(Statement::Assignment {
        target: target.to_string(),
        rhs,
        line: line_num,
    })
}

/// Parses the right-hand side of an assignment: a single integer literal,
/// an operator applied to two variables, or a call with variable arguments.
fn parse_rhs(tokens: &[&str], line_num: usize) -> Result<Expression, Fault> {
    let (head, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return Err(Fault::syntax(line_num)),
    };

    if rest.is_empty() && is_int_literal(head) {
        // a literal wider than i64 has no representable value
        return head
            .parse()
            .map(Expression::Literal)
            .map_err(|_| Fault::syntax(line_num));
    }

    if rest.len() == 2 {
        if let Some(op) = Builtin::from_name(head) {
            if !(is_identifier(rest[0]) && is_identifier(rest[1])) {
                return Err(Fault::syntax(line_num));
            }
            return Ok(Expression::BuiltinOp {
                op,
                left: rest[0].to_string(),
                right: rest[1].to_string(),
            });
        }
    }

    // Everything else is a call. An operator name outside the exact
    // three-token form is malformed, as is any non-identifier token.
    if is_builtin(head) || !is_identifier(head) {
        return Err(Fault::syntax(line_num));
    }
    for arg in rest {
        if !is_identifier(arg) {
            return Err(Fault::syntax(line_num));
        }
    }

    Ok(Expression::Call {
        callee: head.to_string(),
        args: rest.iter().map(|a| a.to_string()).collect(),
    })
}
