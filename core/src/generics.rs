#![deny(missing_docs)]

//! # Generic Type-Name Parsing
//!
//! Parses springfox-style generic type names (`Page«TransferRecordRes«User»»`)
//! into a recursive type tree. The `«»` delimiters are the swagger-ui
//! convention for Java generics; argument order is positional and
//! significant.

use crate::error::{Error, Result};

/// A parsed generic type name.
///
/// A bare name (`User`) has no `args`; a generic name (`Page«User»`) carries
/// one subtree per generic argument, in left-to-right textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTree {
    /// The root type name (e.g. `Page`).
    pub name: String,
    /// Ordered generic arguments.
    pub args: Vec<TypeTree>,
}

impl TypeTree {
    /// Creates a leaf tree (a name with no generic arguments).
    pub fn leaf(name: impl Into<String>) -> Self {
        TypeTree {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Whether this tree carries generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

/// One lexical token of a generic type name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `«`
    Open,
    /// `»`
    Close,
    /// `,`
    Comma,
    /// Any other run of characters, whitespace-trimmed.
    Name(String),
}

/// Explicit parse cursor over the token sequence.
///
/// Nested `«…»` groups consume tokens from this shared cursor, so each
/// recursive call resumes exactly where the inner group's `»` ended.
struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index);
        if token.is_some() {
            self.index += 1;
        }
        token
    }
}

/// Parses a generic type name into a [`TypeTree`].
///
/// # Arguments
///
/// * `input` - The raw type name, e.g. `"Page«TransferRecordRes»"`.
///
/// # Returns
///
/// * The parsed tree, or [`Error::MalformedGenericExpression`] on unbalanced
///   delimiters, empty argument lists or trailing commas.
pub fn parse_generics(input: &str) -> Result<TypeTree> {
    let tokens = tokenize(input);
    let mut cursor = Cursor {
        tokens: &tokens,
        index: 0,
    };

    let tree = parse_expr(&mut cursor, input)?;

    // Anything left over means an unmatched `»` or stray token.
    if cursor.peek().is_some() {
        return Err(malformed(input, "unexpected trailing tokens"));
    }

    Ok(tree)
}

/// Splits the input on the three delimiters; every other run of characters
/// becomes a single whitespace-trimmed name token.
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = String::new();

    let flush = |pending: &mut String, tokens: &mut Vec<Token>| {
        let name = pending.trim();
        if !name.is_empty() {
            tokens.push(Token::Name(name.to_string()));
        }
        pending.clear();
    };

    for ch in input.chars() {
        match ch {
            '«' => {
                flush(&mut pending, &mut tokens);
                tokens.push(Token::Open);
            }
            '»' => {
                flush(&mut pending, &mut tokens);
                tokens.push(Token::Close);
            }
            ',' => {
                flush(&mut pending, &mut tokens);
                tokens.push(Token::Comma);
            }
            _ => pending.push(ch),
        }
    }
    flush(&mut pending, &mut tokens);

    tokens
}

/// `Expr := Name ('«' ArgList '»')?`
fn parse_expr(cursor: &mut Cursor<'_>, input: &str) -> Result<TypeTree> {
    let name = match cursor.bump() {
        Some(Token::Name(name)) => name.clone(),
        _ => return Err(malformed(input, "expected a type name")),
    };

    let mut args = Vec::new();
    if cursor.peek() == Some(&Token::Open) {
        cursor.bump();
        args = parse_args(cursor, input)?;
        match cursor.bump() {
            Some(Token::Close) => {}
            _ => return Err(malformed(input, "unbalanced «»")),
        }
    }

    Ok(TypeTree { name, args })
}

/// `ArgList := Expr (',' Expr)*`; must contain at least one argument.
fn parse_args(cursor: &mut Cursor<'_>, input: &str) -> Result<Vec<TypeTree>> {
    if cursor.peek() == Some(&Token::Close) {
        return Err(malformed(input, "empty argument list"));
    }

    let mut args = vec![parse_expr(cursor, input)?];
    while cursor.peek() == Some(&Token::Comma) {
        cursor.bump();
        // A `»` or end here is a trailing comma.
        args.push(parse_expr(cursor, input)?);
    }

    Ok(args)
}

fn malformed(input: &str, reason: &str) -> Error {
    Error::MalformedGenericExpression(format!("{} ({})", input, reason))
}
