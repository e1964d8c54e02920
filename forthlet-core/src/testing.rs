use crate::state::{State, Value};

impl State {
    /// Assert that the stack holds exactly `expected`, bottom first.
    /// Panics on a non-integer value, which no returned state should hold.
    pub fn assert_stack(&self, expected: &[i64]) {
        let actual: Vec<i64> = self
            .stack
            .iter()
            .map(|value| match value {
                Value::Int(value) => *value,
                other => panic!("non-integer value on the stack: {:?}", other),
            })
            .collect();
        assert_eq!(actual, expected)
    }
}
