use crate::ops::Operator;

/// A single lexical unit of source text.
///
/// Tokens carry their source spelling where it matters: `Word` keeps the
/// original case, and folding to lower case happens only at dictionary
/// lookup and install time.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Integer(i64),
    Operator(Operator),
    Word(String),
    StartDefinition,
    EndDefinition,
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Word(name) => write!(f, "{}", name),
            Token::StartDefinition => write!(f, ":"),
            Token::EndDefinition => write!(f, ";"),
            Token::EndOfInput => Ok(()),
        }
    }
}

fn is_separator(ch: char) -> bool {
    ch <= ' '
}

/// Take one token off the front of `input` and return it together with the
/// unconsumed remainder.
///
/// Pure function of the slice; restartable from any remainder it returns.
/// Classification order: integer (an optional `-` sign directly followed by
/// digits counts as a literal, not the subtract operator), then single-char
/// operators and the `:` / `;` definition markers, then a maximal run of
/// non-whitespace characters as a word. A digit run stops at the first
/// non-digit without requiring a separator, so `123abc` scans as the
/// integer 123 followed by the word `abc`.
pub fn next_token(input: &str) -> (Token, &str) {
    let input = input.trim_start_matches(is_separator);
    let bytes = input.as_bytes();

    if bytes.is_empty() {
        return (Token::EndOfInput, input);
    }

    let signed = bytes[0] == b'-' && bytes.len() > 1 && bytes[1].is_ascii_digit();
    if bytes[0].is_ascii_digit() || signed {
        let mut end = if signed { 1 } else { 0 };
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let run = &input[..end];
        let token = match run.parse() {
            Ok(value) => Token::Integer(value),
            // out-of-range digit runs surface as UnknownWord at evaluation
            Err(_) => Token::Word(run.to_string()),
        };
        return (token, &input[end..]);
    }

    if let Some(op) = Operator::from_symbol(bytes[0] as char) {
        return (Token::Operator(op), &input[1..]);
    }

    match bytes[0] {
        b':' => (Token::StartDefinition, &input[1..]),
        b';' => (Token::EndDefinition, &input[1..]),
        _ => {
            // separator bytes are ASCII, so a byte-wise scan never splits
            // a multi-byte character
            let mut end = 1;
            while end < bytes.len() && !is_separator(bytes[end] as char) {
                end += 1;
            }
            (Token::Word(input[..end].to_string()), &input[end..])
        }
    }
}

/// Iterator over the tokens of `input`, ending before `EndOfInput`.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
    let mut remaining = input;
    std::iter::from_fn(move || {
        let (token, rest) = next_token(remaining);
        remaining = rest;
        match token {
            Token::EndOfInput => None,
            token => Some(token),
        }
    })
}
