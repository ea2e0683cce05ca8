mod ast;
mod builtins;
mod check;
mod config;
mod env;
mod error;
mod eval;
mod interpreter;
mod lexer;
mod parser;

use clap::Parser;
use config::LimitsConfig;
use interpreter::Interpreter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Tree-walking interpreter for Rec programs
#[derive(Parser, Debug)]
#[command(name = "rec-lang")]
#[command(version = config::VERSION)]
#[command(about = "Runs a function from a Rec program with integer arguments")]
struct CliArgs {
    /// Program file to load
    #[arg(value_name = "FILE")]
    program: PathBuf,

    /// Entry function to dispatch
    #[arg(long = "entry", short = 'e', default_value = "main")]
    entry: String,

    /// Integer arguments passed to the entry function
    #[arg(value_name = "ARG", allow_negative_numbers = true)]
    args: Vec<i64>,

    /// Abort dispatches nested deeper than this many calls
    #[arg(long = "max-call-depth", value_name = "N")]
    max_call_depth: Option<usize>,

    /// Abort dispatches after this many statement executions
    #[arg(long = "max-steps", value_name = "N")]
    max_steps: Option<u64>,
}

fn main() -> ExitCode {
    let cli = CliArgs::parse();

    let source = match std::fs::read_to_string(&cli.program) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}", cli.program.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let limits = LimitsConfig {
        max_call_depth: cli.max_call_depth,
        max_steps: cli.max_steps,
    };

    let interpreter = match Interpreter::build_with_limits(&source, limits) {
        Ok(interpreter) => interpreter,
        Err(fault) => {
            eprintln!("{}", fault);
            return ExitCode::FAILURE;
        }
    };

    match interpreter.run(&cli.entry, &cli.args) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(fault) => {
            eprintln!("{}", fault);
            ExitCode::FAILURE
        }
    }
}
