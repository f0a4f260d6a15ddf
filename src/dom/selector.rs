//! The CSS selector subset understood by the in-memory document.
//!
//! Supported: type (`div`), universal (`*`), `#id`, `.class`, `[attr]`,
//! `[attr="v"]`, `[attr^="v"]`, any compound of these, and comma-separated
//! lists. Combinators are not supported; scoped lookups go through
//! [`Dom::query_within`](super::Dom::query_within) instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("unterminated attribute selector")]
    UnterminatedAttribute,
}

/// What a selector needs to know about an element.
pub(crate) trait Matchable {
    fn tag(&self) -> &str;
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, el: &impl Matchable) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attribute("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.op, el.attribute(&a.name)) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(v), Some(actual)) => actual == v,
            (AttrOp::Prefix(v), Some(actual)) => actual.starts_with(v.as_str()),
        })
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut parser = Parser { input, pos: 0 };
        let mut alternatives = Vec::new();
        loop {
            parser.skip_whitespace();
            alternatives.push(parser.compound()?);
            parser.skip_whitespace();
            let offset = parser.pos;
            match parser.bump() {
                None => break,
                Some(',') => continue,
                Some(found) => return Err(SelectorError::Unexpected { found, offset }),
            }
        }
        Ok(Self { alternatives })
    }

    pub fn matches(&self, el: &impl Matchable) -> bool {
        self.alternatives.iter().any(|c| c.matches(el))
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected_or_empty(&self) -> SelectorError {
        match self.peek() {
            Some(found) => SelectorError::Unexpected {
                found,
                offset: self.pos,
            },
            None => SelectorError::Empty,
        }
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.bump();
        }
        if self.pos == start {
            return Err(self.unexpected_or_empty());
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();

        match self.peek() {
            Some('*') => {
                self.bump();
            }
            Some(c) if is_ident_char(c) => {
                compound.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    compound.id = Some(self.ident()?);
                }
                Some('.') => {
                    self.bump();
                    compound.classes.push(self.ident()?);
                }
                Some('[') => {
                    self.bump();
                    compound.attrs.push(self.attribute()?);
                }
                _ => break,
            }
        }

        if self.pos == start {
            return Err(self.unexpected_or_empty());
        }
        Ok(compound)
    }

    fn attribute(&mut self) -> Result<AttrMatch, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?;
        self.skip_whitespace();
        let offset = self.pos;
        let op = match self.bump() {
            Some(']') => return Ok(AttrMatch { name, op: AttrOp::Exists }),
            Some('=') => AttrOp::Equals(self.value()?),
            Some('^') => match self.bump() {
                Some('=') => AttrOp::Prefix(self.value()?),
                Some(found) => {
                    return Err(SelectorError::Unexpected {
                        found,
                        offset: offset + 1,
                    });
                }
                None => return Err(SelectorError::UnterminatedAttribute),
            },
            Some(found) => return Err(SelectorError::Unexpected { found, offset }),
            None => return Err(SelectorError::UnterminatedAttribute),
        };
        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(AttrMatch { name, op }),
            _ => Err(SelectorError::UnterminatedAttribute),
        }
    }

    fn value(&mut self) -> Result<String, SelectorError> {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                loop {
                    match self.bump() {
                        Some(c) if c == quote => break,
                        Some(_) => {}
                        None => return Err(SelectorError::UnterminatedAttribute),
                    }
                }
                Ok(self.input[start..self.pos - 1].to_string())
            }
            _ => self.ident(),
        }
    }
}
