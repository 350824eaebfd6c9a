// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::str::FromStr;

use simplecss::DeclarationTokenizer;

use crate::{
    Attribute,
    AttributeId,
    AttributeNameRef,
    Attributes,
    AttributeValue,
    ElementType,
    Transform,
};

/// Suffix appended to the name of an element outside of `ElementType`.
pub const UNSUPPORTED_SUFFIX: &str = ":unsupported";

/// An internal element ID.
///
/// Assigned by the `Document` on insertion and never reused within it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the numeric value.
    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An SVG element.
///
/// Tree links are owned by the `Document`, so an element outside of it
/// is always detached.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub(crate) id: NodeId,
    element_type: ElementType,
    name: String,
    value: String,
    attributes: Attributes,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) previous: Option<NodeId>,
}

impl Element {
    /// Creates a detached element with all attribute slots of its type unset.
    pub fn new(element_type: ElementType, name: &str) -> Element {
        let mut attributes = Attributes::new();
        for id in element_type.schema() {
            attributes.insert(Attribute::unset(id));
        }

        Element {
            id: NodeId(0),
            element_type,
            name: name.to_string(),
            value: String::new(),
            attributes,
            parent: None,
            first_child: None,
            next: None,
            previous: None,
        }
    }

    /// Creates an element by its tag name.
    ///
    /// Unknown tags become `ElementType::Unsupported` named `tag:unsupported`.
    pub fn from_tag_name(tag_name: &str) -> Element {
        let element_type = ElementType::from_tag_name(tag_name);
        match element_type {
            ElementType::Unsupported => {
                Element::new(element_type, &format!("{}{}", tag_name, UNSUPPORTED_SUFFIX))
            }
            _ => Element::new(element_type, tag_name),
        }
    }

    /// Returns the internal ID. `0` for an element that was never inserted.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element type.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Returns `true` for `ElementType::Unsupported`.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        self.element_type == ElementType::Unsupported
    }

    /// Returns the element name, including the `:unsupported` suffix.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name used in XML.
    pub fn xml_name(&self) -> &str {
        if self.is_unsupported() && self.name.ends_with(UNSUPPORTED_SUFFIX) {
            &self.name[..self.name.len() - UNSUPPORTED_SUFFIX.len()]
        } else {
            &self.name
        }
    }

    /// Returns the text value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets the text value.
    pub fn set_value(&mut self, value: &str) {
        if !self.has_value() && !value.is_empty() && !self.is_unsupported() {
            debug!("Element '{}' doesn't expect a text value.", self.name);
        }

        self.value = value.to_string();
    }

    /// Returns `true` if the element type carries a text value.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.element_type.has_value()
    }

    /// Returns the parent element ID.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the first child ID.
    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    /// Returns the next sibling ID.
    #[inline]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    /// Returns the previous sibling ID.
    #[inline]
    pub fn previous_sibling(&self) -> Option<NodeId> {
        self.previous
    }

    /// Returns `true` if the element has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Returns a reference to the attributes list.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns a mutable reference to the attributes list.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Returns `true` if the element has a slot for the attribute.
    pub fn has_attribute<'a, N>(&self, name: N) -> bool
        where AttributeNameRef<'a>: From<N>
    {
        self.attributes.contains(name)
    }

    /// Returns the attribute value, if it's present and set.
    pub fn attribute_value<'a, N>(&self, name: N) -> Option<&AttributeValue>
        where AttributeNameRef<'a>: From<N>
    {
        self.attributes.get_value(name).filter(|v| !v.is_none())
    }

    /// Returns the attribute value as it will be written, or an empty string.
    pub fn attribute_string<'a, N>(&self, name: N) -> String
        where AttributeNameRef<'a>: From<N>
    {
        match self.attributes.get(name) {
            Some(attr) => attr.value_string(),
            None => String::new(),
        }
    }

    /// Returns the `id` attribute.
    pub fn svg_id(&self) -> String {
        self.attribute_string(AttributeId::Id)
    }

    /// Sets an attribute value from text.
    ///
    /// Returns `false` when the element has no such attribute.
    /// Setting `style` also copies recognized declarations
    /// into the corresponding attributes.
    pub fn set_attribute_value(&mut self, name: &str, value: &str) -> bool {
        let is_style = match self.attributes.get_mut(name) {
            Some(attr) => {
                attr.set_from_str(value);
                attr.has_id(AttributeId::Style)
            }
            None => return false,
        };

        if is_style {
            self.apply_inline_style(value);
        }

        true
    }

    /// Inserts an attribute outside of the element schema.
    pub fn set_unknown_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(Attribute::from_text(name, value));
    }

    fn apply_inline_style(&mut self, text: &str) {
        let shorthands = self.element_type.style_shorthands();
        if shorthands.is_empty() {
            return;
        }

        for decl in DeclarationTokenizer::from(text) {
            let id = match AttributeId::from_name(decl.name) {
                Some(id) => id,
                None => continue,
            };

            if !shorthands.contains(&id) {
                continue;
            }

            if let Some(attr) = self.attributes.get_mut(id) {
                attr.set_from_str(decl.value);
            }
        }
    }

    /// Parses the `transform` attribute.
    pub fn transform(&self) -> Option<Transform> {
        let text = self.attribute_string(AttributeId::Transform);
        if text.is_empty() {
            return None;
        }

        match Transform::from_str(&text) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warn!("Failed to parse transform '{}' cause {}.", text, e);
                None
            }
        }
    }

    /// Returns a links trace of the element.
    pub fn info(&self) -> String {
        fn id_str(id: Option<NodeId>) -> String {
            match id {
                Some(id) => id.to_string(),
                None => "none".to_string(),
            }
        }

        format!("InternalId:{} - Parent:{} - Previous:{} - Next:{} - Child:{}",
                self.id, id_str(self.parent), id_str(self.previous),
                id_str(self.next), id_str(self.first_child))
    }

    pub(crate) fn unlink(&mut self) {
        self.parent = None;
        self.first_child = None;
        self.next = None;
        self.previous = None;
    }
}
