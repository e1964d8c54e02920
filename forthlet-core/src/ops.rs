use crate::errors::*;
use crate::state::Value;

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Pop `y` (top) then `x` and push `x op y`.
    ///
    /// Division truncates toward zero. Arithmetic wraps on i64 overflow so
    /// no input can panic the evaluator.
    pub(crate) fn apply(self, stack: &mut Vec<Value>) -> Result<()> {
        let y = pop_int(stack)?;
        let x = pop_int(stack)?;
        let result = match self {
            Operator::Add => x.wrapping_add(y),
            Operator::Sub => x.wrapping_sub(y),
            Operator::Mul => x.wrapping_mul(y),
            Operator::Div => {
                if y == 0 {
                    return Err(ErrorKind::DivisionByZero.into());
                }
                x.wrapping_div(y)
            }
        };
        stack.push(Value::Int(result));
        Ok(())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The built-in stack manipulation words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Builtin {
    Dup,
    Drop,
    Swap,
    Over,
}

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Dup => "dup",
            Builtin::Drop => "drop",
            Builtin::Swap => "swap",
            Builtin::Over => "over",
        }
    }

    pub(crate) fn apply(self, stack: &mut Vec<Value>) -> Result<()> {
        match self {
            Builtin::Dup => {
                let a = pop(stack)?;
                stack.push(a.clone());
                stack.push(a);
            }
            Builtin::Drop => {
                pop(stack)?;
            }
            Builtin::Swap => {
                let b = pop(stack)?;
                let a = pop(stack)?;
                stack.push(b);
                stack.push(a);
            }
            Builtin::Over => {
                let b = pop(stack)?;
                let a = pop(stack)?;
                stack.push(a.clone());
                stack.push(b);
                stack.push(a);
            }
        }
        Ok(())
    }
}

fn pop(stack: &mut Vec<Value>) -> Result<Value> {
    stack.pop().ok_or_else(|| ErrorKind::StackUnderflow.into())
}

fn pop_int(stack: &mut Vec<Value>) -> Result<i64> {
    match pop(stack)? {
        Value::Int(value) => Ok(value),
        other => Err(ErrorKind::TypeError(format!("expected integer, found {:?}", other)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trip() {
        for &op in &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
    }

    #[test]
    fn deeper_value_is_the_left_operand() {
        let mut stack = vec![Value::Int(10), Value::Int(3)];
        Operator::Sub.apply(&mut stack).unwrap();
        assert_eq!(stack, vec![Value::Int(7)]);
    }

    #[test]
    fn overflow_wraps_instead_of_panicking() {
        let mut stack = vec![Value::Int(i64::max_value()), Value::Int(1)];
        Operator::Add.apply(&mut stack).unwrap();
        assert_eq!(stack, vec![Value::Int(i64::min_value())]);
    }

    #[test]
    fn operators_underflow_with_one_operand() {
        let mut stack = vec![Value::Int(1)];
        let err = Operator::Add.apply(&mut stack).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::StackUnderflow));
    }
}
