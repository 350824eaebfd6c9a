// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::str::FromStr;

use crate::writer;
use crate::{
    AttributeDataType,
    AttributeGroup,
    AttributeId,
    AttributeValue,
    Color,
    WriteBuffer,
    WriteOptions,
};
use super::attribute_value::{enum_value_str, parse_enum_index};

/// An attribute name.
///
/// Registered attributes are stored by ID, everything else by a string.
#[derive(Clone, PartialEq, Debug)]
pub enum AttributeName {
    /// A registered attribute.
    Id(AttributeId),
    /// An attribute outside of the registry.
    Name(String),
}

impl AttributeName {
    /// Returns a borrowed version of the name.
    pub fn as_ref(&self) -> AttributeNameRef {
        match *self {
            AttributeName::Id(id) => AttributeNameRef::Id(id),
            AttributeName::Name(ref name) => AttributeNameRef::Name(name),
        }
    }

    /// Returns the XML name.
    pub fn as_str(&self) -> &str {
        match *self {
            AttributeName::Id(id) => id.name(),
            AttributeName::Name(ref name) => name,
        }
    }
}

/// A borrowed attribute name.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AttributeNameRef<'a> {
    /// A registered attribute.
    Id(AttributeId),
    /// An attribute outside of the registry.
    Name(&'a str),
}

impl<'a> From<AttributeId> for AttributeNameRef<'a> {
    fn from(id: AttributeId) -> Self {
        AttributeNameRef::Id(id)
    }
}

impl<'a> From<&'a str> for AttributeNameRef<'a> {
    fn from(name: &'a str) -> Self {
        match AttributeId::from_name(name) {
            Some(id) => AttributeNameRef::Id(id),
            None => AttributeNameRef::Name(name),
        }
    }
}

impl<'a> From<AttributeNameRef<'a>> for AttributeName {
    fn from(name: AttributeNameRef<'a>) -> Self {
        match name {
            AttributeNameRef::Id(id) => AttributeName::Id(id),
            AttributeNameRef::Name(name) => AttributeName::Name(name.to_string()),
        }
    }
}

/// Representation of the SVG attribute object.
#[derive(Clone, PartialEq, Debug)]
pub struct Attribute {
    /// Attribute name.
    pub name: AttributeName,
    /// Attribute value.
    pub value: AttributeValue,
}

impl Attribute {
    /// Constructs a new attribute.
    pub fn new<'a, N, T>(name: N, value: T) -> Attribute
        where AttributeNameRef<'a>: From<N>, AttributeValue: From<T>
    {
        Attribute {
            name: AttributeName::from(AttributeNameRef::from(name)),
            value: AttributeValue::from(value),
        }
    }

    /// Constructs an unset attribute.
    pub fn unset<'a, N>(name: N) -> Attribute
        where AttributeNameRef<'a>: From<N>
    {
        Attribute {
            name: AttributeName::from(AttributeNameRef::from(name)),
            value: AttributeValue::None,
        }
    }

    /// Constructs an attribute from text, coercing it by the attribute data type.
    pub fn from_text<'a, N>(name: N, text: &str) -> Attribute
        where AttributeNameRef<'a>: From<N>
    {
        let mut attr = Attribute::unset(name);
        attr.set_from_str(text);
        attr
    }

    /// Returns the attribute ID, if it's a registered attribute.
    pub fn id(&self) -> Option<AttributeId> {
        match self.name {
            AttributeName::Id(id) => Some(id),
            AttributeName::Name(_) => None,
        }
    }

    /// Returns `true` if the attribute has the selected ID.
    pub fn has_id(&self, id: AttributeId) -> bool {
        self.id() == Some(id)
    }

    /// Returns the XML name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the attribute group.
    pub fn group(&self) -> AttributeGroup {
        match self.id() {
            Some(id) => id.group(),
            None => AttributeGroup::Unknown,
        }
    }

    /// Returns the value type. Unregistered attributes are strings.
    pub fn data_type(&self) -> AttributeDataType {
        match self.id() {
            Some(id) => id.data_type(),
            None => AttributeDataType::String,
        }
    }

    /// Coerces text into a value of the attribute data type.
    ///
    /// - strings and links are stored as is
    /// - enums take an integer index or a legal value name, anything else is unset
    /// - colors take `#RRGGBB`, `rgb(r, g, b)` or a color name, other paint
    ///   values like `none` or `url(#id)` are kept by name
    pub fn set_from_str(&mut self, text: &str) {
        self.value = match self.data_type() {
            AttributeDataType::String | AttributeDataType::HRef => {
                AttributeValue::String(text.to_string())
            }
            AttributeDataType::Enum => {
                let values = self.id().map(|id| id.values()).unwrap_or(&[]);
                AttributeValue::Enum(parse_enum_index(values, text))
            }
            AttributeDataType::Color => {
                if text.is_empty() {
                    AttributeValue::None
                } else {
                    match Color::from_str(text) {
                        Ok(c) => AttributeValue::Color(c),
                        Err(_) => {
                            debug!("Paint '{}' in '{}' is not a color. Kept as is.",
                                   text, self.name());
                            AttributeValue::Color(Color::from_name(text))
                        }
                    }
                }
            }
        };
    }

    /// Returns the value as it will be written into XML.
    ///
    /// An empty string means the attribute is not written at all.
    pub fn value_string(&self) -> String {
        match self.value {
            AttributeValue::None => String::new(),
            AttributeValue::String(ref s) => s.clone(),
            AttributeValue::Enum(idx) => {
                let values = self.id().map(|id| id.values()).unwrap_or(&[]);
                enum_value_str(values, idx).to_string()
            }
            AttributeValue::Color(ref c) => c.to_string(),
        }
    }

    /// Returns `true` if the attribute will not be written.
    pub fn is_unset(&self) -> bool {
        self.value_string().is_empty()
    }

    /// Returns ` name="value"` or an empty string for an unset attribute.
    pub fn to_xml(&self) -> String {
        self.to_string()
    }
}

impl WriteBuffer for Attribute {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        let value = self.value_string();
        if value.is_empty() {
            return;
        }

        let quote = if opt.use_single_quote { b'\'' } else { b'"' };

        buf.push(b' ');
        buf.extend_from_slice(self.name().as_bytes());
        buf.push(b'=');
        buf.push(quote);
        writer::write_escaped_attribute(&value, quote, buf);
        buf.push(quote);
    }
}

impl_display!(Attribute);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToStringWithOptions;

    #[test]
    fn unset_is_not_written() {
        let attr = Attribute::unset(AttributeId::Fill);
        assert_eq!(attr.to_xml(), "");

        let attr = Attribute::new(AttributeId::X, "");
        assert_eq!(attr.to_xml(), "");
    }

    #[test]
    fn write_string() {
        let attr = Attribute::new(AttributeId::X, "10");
        assert_eq!(attr.to_xml(), " x=\"10\"");
    }

    #[test]
    fn write_escaped() {
        let attr = Attribute::new("data-x", "a<b & \"c\"");
        assert_eq!(attr.to_xml(), " data-x=\"a&lt;b &amp; &quot;c&quot;\"");
    }

    #[test]
    fn write_single_quote() {
        let mut opt = WriteOptions::default();
        opt.use_single_quote = true;
        let attr = Attribute::new(AttributeId::X, "10");
        assert_eq!(attr.to_string_with_opt(&opt), " x='10'");
    }

    #[test]
    fn color_coercion() {
        let mut attr = Attribute::unset(AttributeId::Fill);

        attr.set_from_str("#00ff00");
        assert_eq!(attr.to_xml(), " fill=\"#00FF00\"");

        attr.set_from_str("rgb(0, 0, 255)");
        assert_eq!(attr.to_xml(), " fill=\"#0000FF\"");

        attr.set_from_str("red");
        assert_eq!(attr.to_xml(), " fill=\"red\"");

        attr.set_from_str("none");
        assert_eq!(attr.to_xml(), " fill=\"none\"");

        attr.set_from_str("url(#grad1)");
        assert_eq!(attr.to_xml(), " fill=\"url(#grad1)\"");

        attr.set_from_str("currentColor");
        assert_eq!(attr.to_xml(), " fill=\"currentColor\"");

        attr.set_from_str("");
        assert_eq!(attr.to_xml(), "");
    }

    #[test]
    fn enum_coercion() {
        let mut attr = Attribute::unset(AttributeId::StrokeLinecap);

        attr.set_from_str("2");
        assert_eq!(attr.value, AttributeValue::Enum(2));
        assert_eq!(attr.to_xml(), " stroke-linecap=\"round\"");

        attr.set_from_str("square");
        assert_eq!(attr.value, AttributeValue::Enum(3));

        attr.set_from_str("wrong");
        assert_eq!(attr.value, AttributeValue::Enum(0));
        assert_eq!(attr.to_xml(), "");
    }

    #[test]
    fn unknown_name() {
        let attr = Attribute::new("data-x", "1");
        assert_eq!(attr.id(), None);
        assert_eq!(attr.group(), AttributeGroup::Unknown);
        assert_eq!(attr.data_type(), AttributeDataType::String);
    }
}
