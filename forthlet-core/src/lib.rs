pub mod errors;

mod dictionary;
mod ops;
mod parsing;
mod state;
mod testing;

pub use dictionary::{Dictionary, Entry};
pub use ops::{Builtin, Operator};
pub use parsing::{next_token, tokenize, Token};
pub use state::{State, Value};

#[cfg(test)]
mod tests {
    use crate::errors::{ErrorKind, Result};
    use crate::State;

    fn eval(input: &str) -> Result<State> {
        State::new().evaluate(input)
    }

    fn stack_of(input: &str) -> String {
        eval(input).unwrap().format_stack().unwrap()
    }

    #[test]
    fn literals() {
        let state = eval("-10 0 25 9223372036854775807").unwrap();
        state.assert_stack(&[-10, 0, 25, i64::max_value()]);
    }

    #[test]
    fn postfix_arithmetic() {
        assert_eq!(stack_of("5 6 +"), "11");
        assert_eq!(stack_of("10 3 -"), "7");
        assert_eq!(stack_of("4 5 *"), "20");
        // 3-4 = -1, 2+(-1) = 1, 1+1 = 2
        assert_eq!(stack_of("1 2 3 4 - + +"), "2");
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(stack_of("1 2 /"), "0");
        assert_eq!(stack_of("-1 2 /"), "0");
        assert_eq!(stack_of("1 -2 /"), "0");
        assert_eq!(stack_of("-7 2 /"), "-3");
        assert_eq!(stack_of("7 -2 /"), "-3");
        assert_eq!(stack_of("-7 -2 /"), "3");
    }

    #[test]
    fn division_by_zero() {
        let err = eval("5 0 /").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DivisionByZero));
    }

    #[test]
    fn operator_underflow() {
        let err = eval("1 +").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::StackUnderflow));
    }

    #[test]
    fn stack_words() {
        assert_eq!(stack_of("1 dup"), "1 1");
        assert_eq!(stack_of("1 2 drop"), "1");
        assert_eq!(stack_of("1 2 swap"), "2 1");
        assert_eq!(stack_of("1 2 over"), "1 2 1");
    }

    #[test]
    fn stack_words_underflow() {
        for &input in &["dup", "drop", "1 swap", "1 over"] {
            let err = eval(input).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::StackUnderflow),
                "{:?} should underflow",
                input
            );
        }
    }

    #[test]
    fn definition_round_trip() {
        assert_eq!(stack_of(": double dup + ; 5 double"), "10");
    }

    #[test]
    fn definitions_survive_across_evaluations() {
        let state = eval(": foo 5 ;").unwrap();
        let state = state.evaluate("foo foo +").unwrap();
        assert_eq!(state.format_stack().unwrap(), "10");
    }

    #[test]
    fn words_may_call_previously_defined_words() {
        let state = eval(": foo 5 ; : bar foo foo ;").unwrap();
        let state = state.evaluate("bar *").unwrap();
        state.assert_stack(&[25]);
    }

    #[test]
    fn redefining_a_builtin_shadows_it() {
        let state = eval(": dup 0 ; 5 dup").unwrap();
        state.assert_stack(&[5, 0]);
    }

    #[test]
    fn definition_named_by_an_integer_is_invalid() {
        let err = eval(": 1 + ;").unwrap_err();
        match err.kind() {
            ErrorKind::InvalidWord(word) => assert_eq!(word, "1"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn unknown_word() {
        let err = eval("foo").unwrap_err();
        match err.kind() {
            ErrorKind::UnknownWord(word) => assert_eq!(word, "foo"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(stack_of("1 DUP"), stack_of("1 dup"));
        assert_eq!(stack_of(": Foo 1 ; foo FOO +"), "2");
    }

    #[test]
    fn nested_definition_fails_fast() {
        let err = eval(": outer : inner ; ;").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::NestedDefinition));
    }

    #[test]
    fn stray_end_definition() {
        let err = eval("1 ;").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DefinitionNotOpen));
    }

    #[test]
    fn unterminated_definition() {
        let err = eval(": foo 1").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnterminatedDefinition));
    }

    #[test]
    fn evaluate_leaves_the_receiver_untouched() {
        let state = eval("1 2").unwrap();
        let before = state.clone();

        state.evaluate("+").unwrap();
        assert_eq!(state, before);

        state.evaluate("bogus").unwrap_err();
        assert_eq!(state, before);
        assert_eq!(state.format_stack().unwrap(), "1 2");
    }

    #[test]
    fn format_stack_is_idempotent() {
        let state = eval("3 1 2").unwrap();
        let first = state.format_stack().unwrap();
        let second = state.format_stack().unwrap();
        assert_eq!(first, "3 1 2");
        assert_eq!(first, second);
    }
}
