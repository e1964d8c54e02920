use error_chain::error_chain;

error_chain! {
    errors {
        // evaluation errors
        StackUnderflow
        DivisionByZero
        UnknownWord(word: String) {
            display("Unknown Word: {}", word)
        }

        // definition errors
        InvalidWord(word: String) {
            display("Invalid Word: {}", word)
        }
        NestedDefinition
        DefinitionNotOpen
        UnterminatedDefinition

        // internal invariant breaches
        TypeError(t: String) {
            display("Type Error: {}", t)
        }
    }
}
