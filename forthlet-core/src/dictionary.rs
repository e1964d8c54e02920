use std::collections::HashMap;
use std::rc::Rc;

use crate::ops::Builtin;
use crate::parsing::Token;

/// A dictionary entry: either a native stack word or a user-defined body of
/// stored tokens. Compound bodies are shared via `Rc` so cloning a state or
/// calling a word never copies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Native(Builtin),
    Compound(Rc<Vec<Token>>),
}

/// Mapping from lower-cased word name to its entry.
///
/// The four built-ins start out as ordinary entries, so lookup is uniform
/// and a user definition inserted under the same key shadows the built-in.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    words: HashMap<String, Entry>,
}

impl Dictionary {
    pub fn with_builtins() -> Self {
        let mut words = HashMap::new();
        for &builtin in &[Builtin::Dup, Builtin::Drop, Builtin::Swap, Builtin::Over] {
            words.insert(builtin.name().to_string(), Entry::Native(builtin));
        }
        Dictionary { words }
    }

    pub fn insert(&mut self, name: String, body: Vec<Token>) {
        self.words.insert(name, Entry::Compound(Rc::new(body)));
    }

    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.words.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.words.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Entry::Native(builtin) => write!(f, "<native {}>", builtin.name()),
            Entry::Compound(body) => {
                let items: Vec<_> = body.iter().map(|t| format!("{}", t)).collect();
                write!(f, "{}", items.join(" "))
            }
        }
    }
}
