// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// SVG parsing errors.
#[derive(Debug)]
pub enum ParserError {
    /// Parsed document must have an `svg` element as a root.
    NoSvgElement,

    /// A closing tag doesn't match the opened one.
    ///
    /// Contains the expected and the actual tag names.
    UnexpectedCloseTag(String, String),

    /// The input ended while an element was still open.
    ///
    /// Contains the name of the innermost open element.
    UnexpectedEndOfStream(String),

    /// A reference to an entity which wasn't declared in the DOCTYPE.
    UnknownEntity(String),

    /// Expanded entities exceed the size limit.
    EntityLimitExceeded,

    /// An `xmlparser` error.
    Xml(xmlparser::Error),

    /// Failed to read a file.
    Io(io::Error),
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserError::NoSvgElement => {
                write!(f, "the document does not have an SVG element")
            }
            ParserError::UnexpectedCloseTag(ref first, ref second) => {
                write!(f, "opening and ending tag mismatch '{}' and '{}'", first, second)
            }
            ParserError::UnexpectedEndOfStream(ref name) => {
                write!(f, "unexpected end of stream, element '{}' is not closed", name)
            }
            ParserError::UnknownEntity(ref name) => {
                write!(f, "unknown entity '{}'", name)
            }
            ParserError::EntityLimitExceeded => {
                write!(f, "entity expansion exceeds the size limit")
            }
            ParserError::Xml(ref e) => {
                write!(f, "{}", e)
            }
            ParserError::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl error::Error for ParserError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ParserError::Xml(ref e) => Some(e),
            ParserError::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for ParserError {
    fn from(value: xmlparser::Error) -> Self {
        ParserError::Xml(value)
    }
}

impl From<io::Error> for ParserError {
    fn from(value: io::Error) -> Self {
        ParserError::Io(value)
    }
}


/// CSS object model errors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CssError {
    /// An attempt to modify a read-only rule.
    NoModificationAllowed,

    /// The rule doesn't exist or has a wrong type for the operation.
    InvalidRule,
}

impl fmt::Display for CssError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CssError::NoModificationAllowed => {
                write!(f, "the rule is read-only")
            }
            CssError::InvalidRule => {
                write!(f, "invalid rule")
            }
        }
    }
}

impl error::Error for CssError {}

/// An alias to `Result<T, ParserError>`.
pub type Result<T> = ::std::result::Result<T, ParserError>;
