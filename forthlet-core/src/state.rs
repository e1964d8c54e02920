use crate::dictionary::{Dictionary, Entry};
use crate::errors::*;
use crate::parsing::{tokenize, Token};

/// A value on the operand stack.
///
/// `Capture` is the transient buffer holding the tokens of an in-progress
/// `:`…`;` definition. It only ever sits on top of the stack while
/// `defining` is true and is consumed by the matching `;`, so it never
/// appears in any state `evaluate` hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Capture(Vec<Token>),
}

/// The full interpreter state: operand stack, word dictionary and the
/// definition-capture flag.
///
/// States are immutable values. `evaluate` leaves its receiver untouched
/// and returns a fresh state, so a failing call has no observable effect
/// on the state the caller holds.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub stack: Vec<Value>,
    dictionary: Dictionary,
    defining: bool,
}

impl Default for State {
    fn default() -> Self {
        State::new()
    }
}

impl State {
    /// Empty stack, builtin-only dictionary, not defining.
    pub fn new() -> Self {
        State {
            stack: vec![],
            dictionary: Dictionary::with_builtins(),
            defining: false,
        }
    }

    /// Evaluate `source` against this state and return the resulting state.
    ///
    /// Stops at the first error. A definition left unterminated at the end
    /// of input is an error, so no capture buffer can escape to the caller.
    pub fn evaluate(&self, source: &str) -> Result<State> {
        let mut state = self.clone();
        for token in tokenize(source) {
            state = state.apply_token(token)?;
        }
        if state.defining {
            return Err(ErrorKind::UnterminatedDefinition.into());
        }
        Ok(state)
    }

    /// Render the stack bottom-to-top as space-separated decimal integers.
    pub fn format_stack(&self) -> Result<String> {
        let mut parts = Vec::with_capacity(self.stack.len());
        for value in &self.stack {
            match value {
                Value::Int(value) => parts.push(value.to_string()),
                Value::Capture(_) => {
                    return Err(
                        ErrorKind::TypeError("definition capture on the stack".into()).into()
                    );
                }
            }
        }
        Ok(parts.join(" "))
    }

    /// Sorted names of every word currently in the dictionary.
    pub fn words(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .dictionary
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Case-insensitive dictionary lookup.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.dictionary.lookup(&name.to_lowercase())
    }

    fn apply_token(mut self, token: Token) -> Result<State> {
        if self.defining {
            return self.capture_token(token);
        }
        match token {
            Token::Integer(value) => self.stack.push(Value::Int(value)),
            Token::Operator(op) => op.apply(&mut self.stack)?,
            Token::Word(name) => return self.call_word(&name),
            Token::StartDefinition => {
                self.stack.push(Value::Capture(vec![]));
                self.defining = true;
            }
            Token::EndDefinition => return Err(ErrorKind::DefinitionNotOpen.into()),
            Token::EndOfInput => {}
        }
        Ok(self)
    }

    fn capture_token(mut self, token: Token) -> Result<State> {
        match token {
            Token::EndDefinition => self.install_definition(),
            Token::StartDefinition => Err(ErrorKind::NestedDefinition.into()),
            token => {
                if let Some(Value::Capture(body)) = self.stack.last_mut() {
                    body.push(token);
                } else {
                    return Err(ErrorKind::TypeError("definition capture missing".into()).into());
                }
                Ok(self)
            }
        }
    }

    fn install_definition(mut self) -> Result<State> {
        let body = match self.stack.pop() {
            Some(Value::Capture(body)) => body,
            _ => return Err(ErrorKind::TypeError("definition capture missing".into()).into()),
        };
        self.defining = false;
        let mut tokens = body.into_iter();
        match tokens.next() {
            Some(Token::Word(name)) => {
                self.dictionary.insert(name.to_lowercase(), tokens.collect());
                Ok(self)
            }
            Some(token) => Err(ErrorKind::InvalidWord(token.to_string()).into()),
            None => Err(ErrorKind::InvalidWord(";".to_string()).into()),
        }
    }

    fn call_word(self, name: &str) -> Result<State> {
        let entry = match self.dictionary.lookup(&name.to_lowercase()) {
            Some(entry) => entry.clone(),
            None => return Err(ErrorKind::UnknownWord(name.to_string()).into()),
        };
        match entry {
            Entry::Native(builtin) => {
                let mut state = self;
                builtin.apply(&mut state.stack)?;
                Ok(state)
            }
            Entry::Compound(body) => {
                let mut state = self;
                for token in body.iter() {
                    state = state.apply_token(token.clone())?;
                }
                Ok(state)
            }
        }
    }
}
