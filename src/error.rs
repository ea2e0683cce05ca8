// ABOUTME: Error types for parse and evaluation failures

use std::fmt;
use thiserror::Error;

/// Categorical error tags surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Name,
    Type,
}

impl ErrorKind {
    /// The literal diagnostic string for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Runtime => "RuntimeError",
            ErrorKind::Name => "NameError",
            ErrorKind::Type => "TypeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation: the 1-based source line it originated from plus its
/// tag. Unknown-entry faults carry line 0, the only case with no source
/// position to report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct Fault {
    pub line: usize,
    pub kind: ErrorKind,
}

impl Fault {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Fault { line, kind }
    }

    pub fn syntax(line: usize) -> Self {
        Fault::new(line, ErrorKind::Syntax)
    }

    pub fn runtime(line: usize) -> Self {
        Fault::new(line, ErrorKind::Runtime)
    }
}

/// Expression-level failures.
///
/// A `Raised` error was produced by the expression itself and carries no
/// line yet; the enclosing statement tags it with its own. A `Located`
/// fault came out of a callee's body and propagates verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("{0}")]
    Raised(ErrorKind),
    #[error(transparent)]
    Located(#[from] Fault),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(ErrorKind::Syntax.as_str(), "SyntaxError");
        assert_eq!(ErrorKind::Runtime.as_str(), "RuntimeError");
        assert_eq!(ErrorKind::Name.as_str(), "NameError");
        assert_eq!(ErrorKind::Type.as_str(), "TypeError");
    }

    #[test]
    fn test_fault_display() {
        let fault = Fault::syntax(3);
        assert_eq!(fault.to_string(), "line 3: SyntaxError");
        assert_eq!(Fault::runtime(0).to_string(), "line 0: RuntimeError");
    }
}
