//! Path expressions and in-place location of matches
//!
//! Supports the subset of JSONPath that checkpoint paths use:
//! ```text
//! $                 root
//! .name             field access
//! ['name'] ["name"] quoted field access (any key)
//! [3]               sequence element
//! ```
//! The leading `$` is optional. Wildcards, filters, slices and recursive
//! descent are rejected, so a path always has at most one match.

use crate::{EditError, Result};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping key
    Field(String),
    /// Zero-based sequence position
    Index(usize),
}

/// A parsed path expression, always rooted at the document root
///
/// Segments live inline for typical depths (<= 8).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: SmallVec<[Segment; 8]>,
}

impl JsonPath {
    /// The root path `$`
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a path expression
    pub fn parse(input: &str) -> Result<Self> {
        Parser::new(input.trim()).parse()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Extend with a field segment
    pub fn field(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Segment::Field(key.into()));
        self
    }

    /// Extend with an index segment
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Resolve against a document, returning the matched value
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match (current, segment) {
                (Value::Object(map), Segment::Field(key)) => map.get(key.as_str())?,
                (Value::Array(items), Segment::Index(index)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolve against a document, returning the match with its parent
    /// container so it can be written back in place
    pub fn locate<'a>(&self, root: &'a mut Value) -> Option<Location<'a>> {
        let Some((last, init)) = self.segments.split_last() else {
            return Some(Location::Root(root));
        };

        let mut parent = root;
        for segment in init {
            parent = step_mut(parent, segment)?;
        }

        match (parent, last) {
            (Value::Object(map), Segment::Field(key)) => {
                if map.contains_key(key.as_str()) {
                    Some(Location::Field {
                        parent: map,
                        key: key.clone(),
                    })
                } else {
                    None
                }
            }
            (Value::Array(items), Segment::Index(index)) => {
                if *index < items.len() {
                    Some(Location::Element {
                        parent: items,
                        index: *index,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

fn step_mut<'a>(value: &'a mut Value, segment: &Segment) -> Option<&'a mut Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Field(key)) => map.get_mut(key.as_str()),
        (Value::Array(items), Segment::Index(index)) => items.get_mut(*index),
        _ => None,
    }
}

impl FromStr for JsonPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Field(key) if is_plain_name(key) => write!(f, ".{}", key)?,
                Segment::Field(key) => {
                    f.write_str("['")?;
                    for c in key.chars() {
                        if c == '\'' || c == '\\' {
                            f.write_str("\\")?;
                        }
                        write!(f, "{}", c)?;
                    }
                    f.write_str("']")?;
                }
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Keys that round-trip through the dotted form
fn is_plain_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// A matched location inside a document
///
/// Holds the parent container and the key or position of the match, so the
/// value can be read and replaced without re-walking the path.
#[derive(Debug)]
pub enum Location<'a> {
    /// The document root itself
    Root(&'a mut Value),
    /// Entry of a mapping
    Field {
        parent: &'a mut Map<String, Value>,
        key: String,
    },
    /// Element of a sequence
    Element {
        parent: &'a mut Vec<Value>,
        index: usize,
    },
}

impl<'a> Location<'a> {
    pub fn get(&self) -> &Value {
        match self {
            Location::Root(value) => value,
            Location::Field { parent, key } => &parent[key.as_str()],
            Location::Element { parent, index } => &parent[*index],
        }
    }

    pub fn get_mut(&mut self) -> &mut Value {
        match self {
            Location::Root(value) => value,
            Location::Field { parent, key } => &mut parent[key.as_str()],
            Location::Element { parent, index } => &mut parent[*index],
        }
    }

    /// Consume the location, keeping the mutable borrow of the match
    pub fn into_mut(self) -> &'a mut Value {
        match self {
            Location::Root(value) => value,
            Location::Field { parent, key } => &mut parent[key.as_str()],
            Location::Element { parent, index } => &mut parent[index],
        }
    }

    /// Write a new value at the matched location, returning the old one
    pub fn replace(&mut self, value: Value) -> Value {
        std::mem::replace(self.get_mut(), value)
    }
}

struct Parser<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Parser<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse(mut self) -> Result<JsonPath> {
        let mut path = JsonPath::root();

        if self.src.is_empty() {
            return Err(self.error("path is empty"));
        }

        // Unrooted paths start with a bare name or a bracket
        if !self.eat('$') && self.peek() != Some('[') {
            let name = self.name()?;
            path.segments.push(Segment::Field(name));
        }

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.pos += 1;
                    if self.peek() == Some('.') {
                        return Err(self.error("recursive descent is not supported"));
                    }
                    let name = self.name()?;
                    path.segments.push(Segment::Field(name));
                }
                '[' => {
                    self.pos += 1;
                    let segment = match self.peek() {
                        Some(quote @ ('\'' | '"')) => {
                            self.pos += 1;
                            Segment::Field(self.quoted(quote)?)
                        }
                        _ => Segment::Index(self.index()?),
                    };
                    if !self.eat(']') {
                        return Err(self.error(format!("expected ']' at offset {}", self.pos)));
                    }
                    path.segments.push(segment);
                }
                other => {
                    return Err(self.error(format!(
                        "unexpected '{}' at offset {}",
                        other, self.pos
                    )))
                }
            }
        }

        Ok(path)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn name(&mut self) -> Result<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '.' || c == '[' || c == ']' {
                break;
            }
            self.pos += c.len_utf8();
        }
        let name = &self.src[start..self.pos];
        match name {
            "" => Err(self.error(format!("expected a field name at offset {}", start))),
            "*" => Err(self.error("wildcards are not supported")),
            _ => Ok(name.to_string()),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == quote {
                return Ok(out);
            }
            if c == '\\' {
                match self.peek() {
                    Some(escaped) => {
                        self.pos += escaped.len_utf8();
                        out.push(escaped);
                    }
                    None => break,
                }
            } else {
                out.push(c);
            }
        }
        Err(self.error("unterminated quoted name"))
    }

    fn index(&mut self) -> Result<usize> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.src[start..self.pos];
        if digits.is_empty() {
            return Err(match self.peek() {
                Some('*') => self.error("wildcards are not supported"),
                Some('-') => self.error("negative indices are not supported"),
                Some('?') => self.error("filters are not supported"),
                _ => self.error(format!("expected an index at offset {}", start)),
            });
        }
        if self.peek() == Some(':') {
            return Err(self.error("slices are not supported"));
        }
        digits
            .parse()
            .map_err(|_| self.error(format!("index '{}' is too large", digits)))
    }

    fn error(&self, reason: impl Into<String>) -> EditError {
        EditError::invalid_path(self.src, reason)
    }
}
