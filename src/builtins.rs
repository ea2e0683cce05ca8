// ABOUTME: The twelve primitive binary operators of the language

use crate::error::{ErrorKind, EvalError};

/// Primitive binary operators. Operands are always variable names resolved
/// through the environment; every operator maps two integers to one.
///
/// The name set is frozen: these twelve identifiers are reserved and a user
/// function may not shadow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    Leq,
    Geq,
    And,
    Or,
    Nand,
}

impl Builtin {
    /// Looks up an operator by its source-level name.
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "add" => Some(Builtin::Add),
            "sub" => Some(Builtin::Sub),
            "mul" => Some(Builtin::Mul),
            "div" => Some(Builtin::Div),
            "lt" => Some(Builtin::Lt),
            "gt" => Some(Builtin::Gt),
            "eq" => Some(Builtin::Eq),
            "leq" => Some(Builtin::Leq),
            "geq" => Some(Builtin::Geq),
            "and" => Some(Builtin::And),
            "or" => Some(Builtin::Or),
            "nand" => Some(Builtin::Nand),
            _ => None,
        }
    }

    /// Applies the operator to two integers. Division truncates toward
    /// zero; a zero divisor and `i64` overflow trap as runtime errors.
    /// Comparisons and logic operators yield 1 or 0.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let trap = EvalError::Raised(ErrorKind::Runtime);
        match self {
            Builtin::Add => left.checked_add(right).ok_or(trap),
            Builtin::Sub => left.checked_sub(right).ok_or(trap),
            Builtin::Mul => left.checked_mul(right).ok_or(trap),
            Builtin::Div => {
                if right == 0 {
                    return Err(trap);
                }
                left.checked_div(right).ok_or(trap)
            }
            Builtin::Lt => Ok((left < right) as i64),
            Builtin::Gt => Ok((left > right) as i64),
            Builtin::Eq => Ok((left == right) as i64),
            Builtin::Leq => Ok((left <= right) as i64),
            Builtin::Geq => Ok((left >= right) as i64),
            Builtin::And => Ok((left != 0 && right != 0) as i64),
            Builtin::Or => Ok((left != 0 || right != 0) as i64),
            Builtin::Nand => Ok((!(left != 0 && right != 0)) as i64),
        }
    }
}

/// True iff `name` is reserved for a primitive operator.
pub fn is_builtin(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(name: &str, left: i64, right: i64) -> Result<i64, EvalError> {
        Builtin::from_name(name).unwrap().apply(left, right)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply("add", 2, 3), Ok(5));
        assert_eq!(apply("sub", 2, 3), Ok(-1));
        assert_eq!(apply("mul", -4, 3), Ok(-12));
        assert_eq!(apply("div", 7, 2), Ok(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply("div", -7, 2), Ok(-3));
        assert_eq!(apply("div", 7, -2), Ok(-3));
    }

    #[test]
    fn test_division_by_zero_traps() {
        assert_eq!(
            apply("div", 1, 0),
            Err(EvalError::Raised(ErrorKind::Runtime))
        );
    }

    #[test]
    fn test_overflow_traps() {
        let runtime = Err(EvalError::Raised(ErrorKind::Runtime));
        assert_eq!(apply("add", i64::MAX, 1), runtime);
        assert_eq!(apply("sub", i64::MIN, 1), runtime);
        assert_eq!(apply("mul", i64::MAX, 2), runtime);
        assert_eq!(apply("div", i64::MIN, -1), runtime);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply("lt", 1, 2), Ok(1));
        assert_eq!(apply("lt", 2, 2), Ok(0));
        assert_eq!(apply("gt", 3, 2), Ok(1));
        assert_eq!(apply("eq", 2, 2), Ok(1));
        assert_eq!(apply("eq", 2, 3), Ok(0));
        assert_eq!(apply("leq", 2, 2), Ok(1));
        assert_eq!(apply("leq", 3, 2), Ok(0));
        assert_eq!(apply("geq", 2, 2), Ok(1));
        assert_eq!(apply("geq", 1, 2), Ok(0));
    }

    #[test]
    fn test_logic() {
        assert_eq!(apply("and", 5, -1), Ok(1));
        assert_eq!(apply("and", 5, 0), Ok(0));
        assert_eq!(apply("or", 0, 3), Ok(1));
        assert_eq!(apply("or", 0, 0), Ok(0));
        assert_eq!(apply("nand", 5, 3), Ok(0));
        assert_eq!(apply("nand", 5, 0), Ok(1));
        assert_eq!(apply("nand", 0, 0), Ok(1));
    }

    #[test]
    fn test_reserved_names() {
        for name in [
            "add", "sub", "mul", "div", "lt", "gt", "eq", "leq", "geq", "and", "or", "nand",
        ] {
            assert!(is_builtin(name), "{name} should be reserved");
        }
        assert!(!is_builtin("xor"));
        assert!(!is_builtin("if"));
        assert!(!is_builtin("def"));
    }
}
