// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::Color;

/// A typed attribute value.
#[derive(Clone, PartialEq, Debug)]
pub enum AttributeValue {
    /// Not set. Such attributes are never written.
    None,
    /// A string or a link.
    String(String),
    /// A 1-based index into the legal values list. `0` is unset.
    Enum(u32),
    /// A color.
    Color(Color),
}

impl AttributeValue {
    /// Returns `true` for `AttributeValue::None`.
    pub fn is_none(&self) -> bool {
        *self == AttributeValue::None
    }

    /// Returns a string value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            AttributeValue::String(ref s) => Some(s),
            _ => None,
        }
    }

    /// Returns a color value, if any.
    pub fn as_color(&self) -> Option<&Color> {
        match *self {
            AttributeValue::Color(ref c) => Some(c),
            _ => None,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::None
    }
}

impl<'a> From<&'a str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        AttributeValue::Color(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Enum(value)
    }
}

/// Resolves text into an enum index.
///
/// Integers are taken as is, a legal value name maps to its 1-based position.
/// Anything else is `0`.
pub(crate) fn parse_enum_index(values: &[&str], text: &str) -> u32 {
    let text = text.trim();

    if let Ok(n) = text.parse::<i64>() {
        if n < 0 || n > i64::from(u32::max_value()) {
            return 0;
        }

        return n as u32;
    }

    match values.iter().position(|v| *v == text) {
        Some(idx) => idx as u32 + 1,
        None => 0,
    }
}

/// Returns a legal value for an enum index or an empty string.
pub(crate) fn enum_value_str(values: &[&'static str], index: u32) -> &'static str {
    if index == 0 {
        return "";
    }

    values.get(index as usize - 1).cloned().unwrap_or("")
}
