//! Context keys and the `when`-clause expressions that read them.
//!
//! A [`ContextKeySet`] is a flat map of named flags gating action
//! visibility. [`ContextKeyExpr`] is the parsed form of a declarative
//! predicate such as `!commentIsEmpty && provider == 'github'`;
//! evaluation is short-circuiting and side-effect free. Expressions
//! expose the keys they reference so the widget can declare them up
//! front instead of registering them into ambient global state.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{bail, Context, Result};

/// Key tracking whether the draft input is empty. Declared by every
/// widget and flipped only when the draft crosses the empty boundary.
pub const COMMENT_IS_EMPTY: &str = "commentIsEmpty";

/// Value of a context key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKeyValue {
    Bool(bool),
    Str(String),
}

impl ContextKeyValue {
    /// Truthiness for bare-key predicates: `false` and the empty string
    /// are false, everything else true.
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for ContextKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Mapping from key name to value. Undeclared keys read as false.
#[derive(Debug, Clone, Default)]
pub struct ContextKeySet {
    values: BTreeMap<String, ContextKeyValue>,
}

impl ContextKeySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a key, defaulting it to false if not already present.
    pub fn declare(&mut self, key: &str) {
        self.values
            .entry(key.to_string())
            .or_insert(ContextKeyValue::Bool(false));
    }

    /// Set a key, returning whether the stored value actually changed.
    pub fn set(&mut self, key: &str, value: ContextKeyValue) -> bool {
        match self.values.get(key) {
            Some(existing) if *existing == value => false,
            _ => {
                self.values.insert(key.to_string(), value);
                true
            }
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> bool {
        self.set(key, ContextKeyValue::Bool(value))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ContextKeyValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn truthy(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(ContextKeyValue::truthy)
    }

    #[must_use]
    pub fn is_declared(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Parsed `when`-clause predicate over context keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKeyExpr {
    /// Bare key reference, true when the key's value is truthy.
    Key(String),
    Not(Box<ContextKeyExpr>),
    Equals(String, ContextKeyValue),
    NotEquals(String, ContextKeyValue),
    And(Vec<ContextKeyExpr>),
    Or(Vec<ContextKeyExpr>),
}

impl ContextKeyExpr {
    /// Parse an expression. Grammar, loosest binding first:
    /// `||`, `&&`, unary `!`, then `key`, `key == value`,
    /// `key != value`, and parenthesized groups. Values are bare words,
    /// `true`/`false`, or single-quoted strings.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens =
            tokenize(input).with_context(|| format!("invalid context expression: {input}"))?;
        let mut parser = Parser { tokens, pos: 0 };
        let expr = parser
            .parse_or()
            .with_context(|| format!("invalid context expression: {input}"))?;
        if parser.pos != parser.tokens.len() {
            bail!("invalid context expression: {input}: trailing tokens");
        }
        Ok(expr)
    }

    /// Evaluate against a key set. Short-circuits; never mutates.
    #[must_use]
    pub fn evaluate(&self, keys: &ContextKeySet) -> bool {
        match self {
            Self::Key(key) => keys.truthy(key),
            Self::Not(inner) => !inner.evaluate(keys),
            Self::Equals(key, value) => keys.get(key) == Some(value),
            Self::NotEquals(key, value) => keys.get(key) != Some(value),
            Self::And(terms) => terms.iter().all(|t| t.evaluate(keys)),
            Self::Or(terms) => terms.iter().any(|t| t.evaluate(keys)),
        }
    }

    /// Collect every key name the expression reads.
    pub fn referenced_keys(&self, out: &mut Vec<String>) {
        match self {
            Self::Key(key) | Self::Equals(key, _) | Self::NotEquals(key, _) => {
                if !out.contains(key) {
                    out.push(key.clone());
                }
            }
            Self::Not(inner) => inner.referenced_keys(out),
            Self::And(terms) | Self::Or(terms) => {
                for term in terms {
                    term.referenced_keys(out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Str(String),
    AndAnd,
    OrOr,
    Bang,
    EqEq,
    NotEq,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '&' => {
                chars.next();
                if chars.next_if_eq(&'&').is_none() {
                    bail!("expected '&&'");
                }
                tokens.push(Token::AndAnd);
            }
            '|' => {
                chars.next();
                if chars.next_if_eq(&'|').is_none() {
                    bail!("expected '||'");
                }
                tokens.push(Token::OrOr);
            }
            '=' => {
                chars.next();
                if chars.next_if_eq(&'=').is_none() {
                    bail!("expected '=='");
                }
                tokens.push(Token::EqEq);
            }
            '!' => {
                chars.next();
                if chars.next_if_eq(&'=').is_some() {
                    tokens.push(Token::NotEq);
                } else {
                    tokens.push(Token::Bang);
                }
            }
            '\'' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => value.push(c),
                        None => bail!("unterminated string"),
                    }
                }
                tokens.push(Token::Str(value));
            }
            c if c.is_alphanumeric() || c == '_' || c == '.' => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' || c == '.' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            other => bail!("unexpected character '{other}'"),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<ContextKeyExpr> {
        let mut terms = vec![self.parse_and()?];
        while self.eat(&Token::OrOr) {
            terms.push(self.parse_and()?);
        }
        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(ContextKeyExpr::Or(terms))
        }
    }

    fn parse_and(&mut self) -> Result<ContextKeyExpr> {
        let mut terms = vec![self.parse_unary()?];
        while self.eat(&Token::AndAnd) {
            terms.push(self.parse_unary()?);
        }
        if terms.len() == 1 {
            Ok(terms.remove(0))
        } else {
            Ok(ContextKeyExpr::And(terms))
        }
    }

    fn parse_unary(&mut self) -> Result<ContextKeyExpr> {
        if self.eat(&Token::Bang) {
            return Ok(ContextKeyExpr::Not(Box::new(self.parse_unary()?)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<ContextKeyExpr> {
        match self.next() {
            Some(Token::LParen) => {
                let expr = self.parse_or()?;
                if !self.eat(&Token::RParen) {
                    bail!("expected ')'");
                }
                Ok(expr)
            }
            Some(Token::Ident(key)) => {
                if self.eat(&Token::EqEq) {
                    Ok(ContextKeyExpr::Equals(key, self.parse_value()?))
                } else if self.eat(&Token::NotEq) {
                    Ok(ContextKeyExpr::NotEquals(key, self.parse_value()?))
                } else {
                    Ok(ContextKeyExpr::Key(key))
                }
            }
            other => bail!("expected key or '(', found {other:?}"),
        }
    }

    fn parse_value(&mut self) -> Result<ContextKeyValue> {
        match self.next() {
            Some(Token::Str(s)) => Ok(ContextKeyValue::Str(s)),
            Some(Token::Ident(word)) => match word.as_str() {
                "true" => Ok(ContextKeyValue::Bool(true)),
                "false" => Ok(ContextKeyValue::Bool(false)),
                _ => Ok(ContextKeyValue::Str(word)),
            },
            other => bail!("expected value, found {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(&str, ContextKeyValue)]) -> ContextKeySet {
        let mut set = ContextKeySet::new();
        for (key, value) in pairs {
            set.set(key, value.clone());
        }
        set
    }

    #[test]
    fn bare_key_is_truthy_check() {
        let expr = ContextKeyExpr::parse("commentIsEmpty").unwrap();
        let set = keys(&[(COMMENT_IS_EMPTY, ContextKeyValue::Bool(true))]);
        assert!(expr.evaluate(&set));
        assert!(!expr.evaluate(&ContextKeySet::new()));
    }

    #[test]
    fn negation_and_conjunction() {
        let expr = ContextKeyExpr::parse("!commentIsEmpty && canResolve").unwrap();
        let mut set = keys(&[
            (COMMENT_IS_EMPTY, ContextKeyValue::Bool(false)),
            ("canResolve", ContextKeyValue::Bool(true)),
        ]);
        assert!(expr.evaluate(&set));
        set.set_bool(COMMENT_IS_EMPTY, true);
        assert!(!expr.evaluate(&set));
    }

    #[test]
    fn or_binds_looser_than_and() {
        // a || b && c parses as a || (b && c)
        let expr = ContextKeyExpr::parse("a || b && c").unwrap();
        let set = keys(&[("a", ContextKeyValue::Bool(true))]);
        assert!(expr.evaluate(&set));
        let set = keys(&[("b", ContextKeyValue::Bool(true))]);
        assert!(!expr.evaluate(&set));
    }

    #[test]
    fn parens_override_precedence() {
        let expr = ContextKeyExpr::parse("(a || b) && c").unwrap();
        let set = keys(&[("a", ContextKeyValue::Bool(true))]);
        assert!(!expr.evaluate(&set));
    }

    #[test]
    fn equality_against_quoted_and_bare_values() {
        let expr = ContextKeyExpr::parse("provider == 'github'").unwrap();
        let set = keys(&[("provider", ContextKeyValue::Str("github".to_string()))]);
        assert!(expr.evaluate(&set));

        let expr = ContextKeyExpr::parse("commentIsEmpty == false").unwrap();
        let set = keys(&[(COMMENT_IS_EMPTY, ContextKeyValue::Bool(false))]);
        assert!(expr.evaluate(&set));

        let expr = ContextKeyExpr::parse("provider != 'github'").unwrap();
        let set = keys(&[("provider", ContextKeyValue::Str("gitlab".to_string()))]);
        assert!(expr.evaluate(&set));
    }

    #[test]
    fn undeclared_key_reads_as_false() {
        let expr = ContextKeyExpr::parse("missing == false").unwrap();
        // Absent is absent, not Bool(false): equality fails either way.
        assert!(!expr.evaluate(&ContextKeySet::new()));
        let expr = ContextKeyExpr::parse("!missing").unwrap();
        assert!(expr.evaluate(&ContextKeySet::new()));
    }

    #[test]
    fn referenced_keys_deduplicates() {
        let expr = ContextKeyExpr::parse("a && (!a || b == 'x')").unwrap();
        let mut out = Vec::new();
        expr.referenced_keys(&mut out);
        assert_eq!(out, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(ContextKeyExpr::parse("a &&").is_err());
        assert!(ContextKeyExpr::parse("a & b").is_err());
        assert!(ContextKeyExpr::parse("(a").is_err());
        assert!(ContextKeyExpr::parse("'unterminated").is_err());
        assert!(ContextKeyExpr::parse("a b").is_err());
    }

    #[test]
    fn set_reports_changes_only() {
        let mut set = ContextKeySet::new();
        assert!(set.set_bool(COMMENT_IS_EMPTY, true));
        assert!(!set.set_bool(COMMENT_IS_EMPTY, true));
        assert!(set.set_bool(COMMENT_IS_EMPTY, false));
        set.declare("other");
        assert!(set.is_declared("other"));
        assert!(!set.truthy("other"));
    }
}
