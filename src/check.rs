// ABOUTME: Static validation pass resolving calls to defined functions

use crate::ast::{Expression, Program, Scope, Statement};
use crate::error::Fault;

/// Verifies that every call in the program resolves: a callee that names a
/// defined function must match its parameter count, and a callee that
/// names no function is only valid bare (it degrades to a variable read).
/// A failure surfaces as a syntax fault at the call's line, pre-empting
/// the runtime name and type errors the evaluator would otherwise raise.
pub fn check_program(program: &Program) -> Result<(), Fault> {
    for function in &program.functions {
        check_scope(&function.body, program)?;
    }
    Ok(())
}

fn check_scope(scope: &Scope, program: &Program) -> Result<(), Fault> {
    for statement in &scope.statements {
        match statement {
            Statement::Assignment {
                rhs: Expression::Call { callee, args },
                line,
                ..
            } => {
                let resolved = match program.lookup(callee) {
                    Some(function) => function.params.len() == args.len(),
                    // a bare name reads a variable at runtime instead
                    None => args.is_empty(),
                };
                if !resolved {
                    return Err(Fault::syntax(*line));
                }
            }
            Statement::Assignment { .. } => {}
            Statement::Block { body, .. } => check_scope(body, program)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_program;

    fn check(lines: &[&str]) -> Result<(), Fault> {
        check_program(&parse_program(&lines.join("\n")).expect("parse failed"))
    }

    #[test]
    fn test_resolved_calls_pass() {
        assert_eq!(check(&["def f x", " f = x", "def g", " y = f y"]), Ok(()));
    }

    #[test]
    fn test_recursive_call_passes() {
        assert_eq!(check(&["def f x", " f = f x"]), Ok(()));
    }

    #[test]
    fn test_unknown_callee_fails_at_call_line() {
        assert_eq!(check(&["def f", " x = g a"]), Err(Fault::syntax(2)));
    }

    #[test]
    fn test_bare_unknown_name_is_a_variable_read() {
        assert_eq!(check(&["def f x", " f = x"]), Ok(()));
    }

    #[test]
    fn test_arity_mismatch_fails_at_call_line() {
        assert_eq!(
            check(&["def f x", " f = x", "def g", " y = f"]),
            Err(Fault::syntax(4))
        );
    }

    #[test]
    fn test_calls_inside_blocks_are_checked() {
        assert_eq!(
            check(&["def f", " c = 1", " if c", "  while c", "   x = g c"]),
            Err(Fault::syntax(5))
        );
    }
}
