// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::slice::{
    Iter,
    IterMut,
};

use crate::{
    Attribute,
    AttributeNameRef,
    AttributeValue,
    WriteBuffer,
};

/// An attributes list.
///
/// Keeps the insertion order, which is also the order of writing.
#[derive(Clone, PartialEq, Default)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Constructs a new, empty attributes list.
    #[inline]
    pub fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Returns an optional reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    #[inline]
    pub fn get<'a, N>(&self, name: N) -> Option<&Attribute>
        where AttributeNameRef<'a>: From<N>
    {
        let name = AttributeNameRef::from(name);
        self.0.iter().find(|v| v.name.as_ref() == name)
    }

    /// Returns an optional mutable reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    #[inline]
    pub fn get_mut<'a, N>(&mut self, name: N) -> Option<&mut Attribute>
        where AttributeNameRef<'a>: From<N>
    {
        let name = AttributeNameRef::from(name);
        self.0.iter_mut().find(|v| v.name.as_ref() == name)
    }

    /// Returns an optional reference to [`AttributeValue`].
    ///
    /// [`AttributeValue`]: enum.AttributeValue.html
    #[inline]
    pub fn get_value<'a, N>(&self, name: N) -> Option<&AttributeValue>
        where AttributeNameRef<'a>: From<N>
    {
        self.get(name).map(|a| &a.value)
    }

    /// Inserts a new attribute. Previous will be overwritten, keeping its position.
    pub fn insert(&mut self, attr: Attribute) {
        let idx = self.0.iter().position(|x| x.name == attr.name);
        match idx {
            Some(i) => self.0[i] = attr,
            None => self.0.push(attr),
        }
    }

    /// Creates a new attribute from name and value and inserts it.
    ///
    /// Text values are coerced by the attribute data type,
    /// like in [`Attribute::set_from_str`].
    ///
    /// [`Attribute::set_from_str`]: struct.Attribute.html#method.set_from_str
    pub fn insert_from<'a, N, T>(&mut self, name: N, value: T)
        where AttributeNameRef<'a>: From<N>, AttributeValue: From<T>
    {
        let mut attr = Attribute::new(name, value);
        if let AttributeValue::String(text) = attr.value.clone() {
            attr.set_from_str(&text);
        }

        self.insert(attr);
    }

    /// Removes an existing attribute.
    pub fn remove<'a, N>(&mut self, name: N) -> Option<Attribute>
        where AttributeNameRef<'a>: From<N>
    {
        let name = AttributeNameRef::from(name);
        let idx = self.0.iter().position(|x| x.name.as_ref() == name);
        idx.map(|i| self.0.remove(i))
    }

    /// Returns `true` if the container contains an attribute with such name.
    #[inline]
    pub fn contains<'a, N>(&self, name: N) -> bool
        where AttributeNameRef<'a>: From<N>
    {
        self.get(name).is_some()
    }

    /// Returns count of the attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if attributes is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator.
    #[inline]
    pub fn iter(&self) -> Iter<Attribute> {
        self.0.iter()
    }

    /// Returns a mutable iterator.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<Attribute> {
        self.0.iter_mut()
    }

    /// Returns an iterator over attributes which will be written.
    pub fn iter_set(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter().filter(|a| !a.is_unset())
    }

    /// Retains only elements specified by the predicate.
    #[inline]
    pub fn retain<F>(&mut self, f: F)
        where F: FnMut(&Attribute) -> bool
    {
        self.0.retain(f)
    }

    /// Returns attributes ordered by group and then by ID.
    ///
    /// Unregistered attributes go first, ordered by name.
    pub fn sorted_by_group(&self) -> Vec<&Attribute> {
        let mut list: Vec<&Attribute> = self.0.iter().collect();
        list.sort_by(|a, b| {
            a.group().cmp(&b.group())
                .then_with(|| a.id().cmp(&b.id()))
                .then_with(|| a.name().cmp(b.name()))
        });
        list
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = ::std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Attributes()");
        }

        let mut out = Vec::with_capacity(256);

        out.extend_from_slice(b"Attributes(");

        for attr in self.iter_set() {
            attr.write_buf(&mut out);
        }

        out.push(b')');

        write!(f, "{}", String::from_utf8_lossy(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeId;

    #[test]
    fn insert_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.insert_from(AttributeId::X, "1");
        attrs.insert_from(AttributeId::Y, "2");
        attrs.insert_from(AttributeId::X, "3");

        let names: Vec<_> = attrs.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(attrs.get_value("x"), Some(&AttributeValue::from("3")));
    }

    #[test]
    fn lookup_by_name_or_id() {
        let mut attrs = Attributes::new();
        attrs.insert_from("stroke-width", "2");
        attrs.insert_from("data-x", "4");

        assert!(attrs.contains(AttributeId::StrokeWidth));
        assert!(attrs.contains("data-x"));
        assert!(!attrs.contains(AttributeId::Fill));

        assert!(attrs.remove("stroke-width").is_some());
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn insert_coerces_text() {
        let mut attrs = Attributes::new();
        attrs.insert_from(AttributeId::StrokeLinecap, "round");
        attrs.insert_from(AttributeId::Fill, "#ff0000");
        attrs.insert_from(AttributeId::Stroke, "none");

        assert_eq!(attrs.get_value(AttributeId::StrokeLinecap), Some(&AttributeValue::Enum(2)));
        assert_eq!(attrs.get_value(AttributeId::Fill),
                   Some(&AttributeValue::Color(crate::Color::new(255, 0, 0))));
        assert_eq!(format!("{:?}", attrs),
                   "Attributes( stroke-linecap=\"round\" fill=\"#FF0000\" stroke=\"none\")");
    }

    #[test]
    fn group_order() {
        let mut attrs = Attributes::new();
        attrs.insert_from(AttributeId::Fill, crate::Color::new(0, 0, 0));
        attrs.insert_from(AttributeId::Width, "10");
        attrs.insert_from(AttributeId::Id, "r1");
        attrs.insert_from(AttributeId::X, "1");

        let names: Vec<_> = attrs.sorted_by_group().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["id", "x", "width", "fill"]);
    }

    #[test]
    fn debug_output() {
        let mut attrs = Attributes::new();
        attrs.insert_from(AttributeId::X, "1");
        attrs.insert(Attribute::unset(AttributeId::Y));
        assert_eq!(format!("{:?}", attrs), "Attributes( x=\"1\")");
    }
}
