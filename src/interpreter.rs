// ABOUTME: Interpreter facade: parse, statically check, and dispatch entry points

use crate::ast::Program;
use crate::check::check_program;
use crate::config::LimitsConfig;
use crate::error::Fault;
use crate::eval::Evaluator;
use crate::parser::parse_program;

/// A parsed and validated program, ready to dispatch entry points.
///
/// Building is the expensive half; `run` may be called any number of times
/// and shares no state between dispatches.
#[derive(Debug, Clone)]
pub struct Interpreter {
    program: Program,
    limits: LimitsConfig,
}

impl Interpreter {
    /// Parses and statically checks `source` with no execution limits.
    pub fn build(source: &str) -> Result<Self, Fault> {
        Interpreter::build_with_limits(source, LimitsConfig::default())
    }

    /// Parses and statically checks `source`; `limits` applies to every
    /// subsequent dispatch.
    pub fn build_with_limits(source: &str, limits: LimitsConfig) -> Result<Self, Fault> {
        let program = parse_program(source)?;
        check_program(&program)?;
        Ok(Interpreter { program, limits })
    }

    /// Runs the named entry function with the given integer arguments.
    pub fn run(&self, entry: &str, args: &[i64]) -> Result<i64, Fault> {
        Evaluator::with_limits(&self.program, self.limits).invoke(entry, args)
    }

    /// The parsed function table.
    pub fn program(&self) -> &Program {
        &self.program
    }
}

/// Parses, checks, and runs `entry` over `source` in one step.
pub fn evaluate(source: &str, entry: &str, args: &[i64]) -> Result<i64, Fault> {
    Interpreter::build(source)?.run(entry, args)
}
