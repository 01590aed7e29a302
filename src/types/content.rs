//! Content payload of a jagged array

use super::Array;
use crate::jagged::JaggedArray;

/// Content variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Array,
    Jagged,
    Table,
}

impl ContentType {
    /// Single-character code: `'a'`, `'j'` or `'t'`
    pub fn as_char(self) -> char {
        match self {
            ContentType::Array => 'a',
            ContentType::Jagged => 'j',
            ContentType::Table => 't',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContentType::Array => "array",
            ContentType::Jagged => "jagged",
            ContentType::Table => "table",
        }
    }
}

/// Record content; declared but never constructible outside this crate
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    _private: (),
}

/// What the starts/stops of a jagged array index into
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Array(Array),
    Jagged(Box<JaggedArray>),
    Table(Table),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Array(_) => ContentType::Array,
            Content::Jagged(_) => ContentType::Jagged,
            Content::Table(_) => ContentType::Table,
        }
    }

    /// Try to get as flat array
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Content::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as nested jagged array
    pub fn as_jagged(&self) -> Option<&JaggedArray> {
        match self {
            Content::Jagged(j) => Some(j.as_ref()),
            _ => None,
        }
    }
}

impl From<Array> for Content {
    fn from(v: Array) -> Self {
        Content::Array(v)
    }
}

impl From<JaggedArray> for Content {
    fn from(v: JaggedArray) -> Self {
        Content::Jagged(Box::new(v))
    }
}
