// ABOUTME: Tree-walking evaluator executing statements against flat environments

use crate::ast::{BlockKind, Expression, Function, Program, Scope, Statement};
use crate::config::LimitsConfig;
use crate::env::Environment;
use crate::error::{ErrorKind, EvalError, Fault};

/// Executes functions of a parsed program. Build one per dispatch: the
/// depth and step counters start fresh each time, so repeated runs over the
/// same program stay deterministic.
///
/// The evaluator works on whatever program it is handed. On a tree that
/// skipped the static pass, unresolved calls surface as name and type
/// faults at the calling assignment's line.
pub struct Evaluator<'p> {
    program: &'p Program,
    limits: LimitsConfig,
    depth: usize,
    steps: u64,
}

impl<'p> Evaluator<'p> {
    pub fn new(program: &'p Program) -> Self {
        Evaluator::with_limits(program, LimitsConfig::default())
    }

    pub fn with_limits(program: &'p Program, limits: LimitsConfig) -> Self {
        Evaluator {
            program,
            limits,
            depth: 0,
            steps: 0,
        }
    }

    /// Dispatches a named entry point. An unknown name faults at line 0,
    /// the only fault with no source position.
    pub fn invoke(&mut self, entry: &str, args: &[i64]) -> Result<i64, Fault> {
        let program = self.program;
        let function = program.lookup(entry).ok_or(Fault::runtime(0))?;
        self.call(function, args)
    }

    /// Runs a function in a fresh environment: return slot seeded to 0,
    /// parameters bound in order, body statements in sequence. An argument
    /// count that disagrees with the definition faults at the def line, as
    /// does blowing a configured call-depth limit.
    fn call(&mut self, function: &'p Function, args: &[i64]) -> Result<i64, Fault> {
        if args.len() != function.params.len() {
            return Err(Fault::runtime(function.line));
        }
        if let Some(limit) = self.limits.max_call_depth {
            if self.depth >= limit {
                return Err(Fault::runtime(function.line));
            }
        }

        self.depth += 1;
        let result = self.run_body(function, args);
        self.depth -= 1;
        result
    }

    fn run_body(&mut self, function: &'p Function, args: &[i64]) -> Result<i64, Fault> {
        let mut env = Environment::new();
        env.assign(&function.name, 0);
        for (param, &value) in function.params.iter().zip(args) {
            env.assign(param, value);
        }

        self.exec_scope(&function.body, &mut env)?;
        Ok(env.fetch(&function.name))
    }

    fn exec_scope(&mut self, scope: &'p Scope, env: &mut Environment) -> Result<(), Fault> {
        for statement in &scope.statements {
            self.exec_statement(statement, env)?;
        }
        Ok(())
    }

    fn exec_statement(
        &mut self,
        statement: &'p Statement,
        env: &mut Environment,
    ) -> Result<(), Fault> {
        self.count_step(statement.line())?;

        match statement {
            Statement::Assignment { target, rhs, line } => {
                match self.eval_expression(rhs, env) {
                    Ok(value) => {
                        env.assign(target, value);
                        Ok(())
                    }
                    // the statement's own failures pick up its line; a fault
                    // out of a callee frame keeps the line it was born with
                    Err(EvalError::Raised(kind)) => Err(Fault::new(*line, kind)),
                    Err(EvalError::Located(fault)) => Err(fault),
                }
            }
            Statement::Block {
                kind,
                predicate,
                body,
                line,
            } => {
                // first reference of a predicate defines it as 0 and skips
                // the block without a single body pass
                if !env.contains(predicate) {
                    env.assign(predicate, 0);
                    return Ok(());
                }

                match kind {
                    BlockKind::If => {
                        if env.fetch(predicate) != 0 {
                            self.exec_scope(body, env)?;
                        }
                    }
                    BlockKind::While => {
                        while env.fetch(predicate) != 0 {
                            self.count_step(*line)?;
                            self.exec_scope(body, env)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }

    fn eval_expression(
        &mut self,
        expression: &'p Expression,
        env: &mut Environment,
    ) -> Result<i64, EvalError> {
        match expression {
            Expression::Literal(value) => Ok(*value),
            Expression::BuiltinOp { op, left, right } => {
                let left = env.fetch(left);
                let right = env.fetch(right);
                op.apply(left, right)
            }
            Expression::Call { callee, args } => {
                let program = self.program;
                // resolution precedes argument reads, so arguments of an
                // unresolvable call are never implicitly defined
                let function = match program.lookup(callee) {
                    Some(function) => function,
                    // a bare name that matches no function is a plain
                    // variable read; with arguments it is a failed call
                    None if args.is_empty() => return Ok(env.fetch(callee)),
                    None => return Err(EvalError::Raised(ErrorKind::Name)),
                };
                if function.params.len() != args.len() {
                    return Err(EvalError::Raised(ErrorKind::Type));
                }

                let values: Vec<i64> = args.iter().map(|arg| env.fetch(arg)).collect();
                self.call(function, &values).map_err(EvalError::Located)
            }
        }
    }

    fn count_step(&mut self, line: usize) -> Result<(), Fault> {
        if let Some(limit) = self.limits.max_steps {
            self.steps += 1;
            if self.steps > limit {
                return Err(Fault::runtime(line));
            }
        }
        Ok(())
    }
}
