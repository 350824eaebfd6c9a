// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice::Iter;

use simplecss::DeclarationTokenizer;

use super::ReplacedStrings;

/// A single CSS declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
    /// `!important` flag.
    pub important: bool,
}

/// A declaration block of a style rule.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct StyleDeclaration {
    properties: Vec<Property>,
}

impl StyleDeclaration {
    /// Constructs an empty block.
    pub fn new() -> Self {
        StyleDeclaration::default()
    }

    /// Parses declarations, restoring protected strings in values.
    ///
    /// A repeated property overrides the previous one.
    pub fn parse(text: &str, strings: &ReplacedStrings) -> Self {
        let mut decl = StyleDeclaration::new();
        for d in DeclarationTokenizer::from(text) {
            let value = strings.restore(d.value);
            decl.set_property(d.name, &value, d.important);
        }

        decl
    }

    /// Returns a property value.
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.value.as_str())
    }

    /// Returns `"important"` for an `!important` property and an empty string otherwise.
    pub fn get_property_priority(&self, name: &str) -> &'static str {
        match self.get(name) {
            Some(p) if p.important => "important",
            _ => "",
        }
    }

    /// Returns a property.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Sets a property. Previous will be overwritten.
    pub fn set_property(&mut self, name: &str, value: &str, important: bool) {
        let prop = Property {
            name: name.to_string(),
            value: value.to_string(),
            important,
        };

        match self.properties.iter().position(|p| p.name == name) {
            Some(idx) => self.properties[idx] = prop,
            None => self.properties.push(prop),
        }
    }

    /// Removes a property.
    pub fn remove_property(&mut self, name: &str) -> Option<Property> {
        let idx = self.properties.iter().position(|p| p.name == name)?;
        Some(self.properties.remove(idx))
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over properties.
    pub fn iter(&self) -> Iter<Property> {
        self.properties.iter()
    }

    /// Returns the block as CSS text.
    pub fn css_text(&self) -> String {
        write_properties(self.properties.iter().map(|p| (p.name.as_str(), p.value.as_str(), p.important)))
    }
}

pub(crate) fn write_properties<'a, I>(iter: I) -> String
    where I: Iterator<Item = (&'a str, &'a str, bool)>
{
    let mut out = String::new();
    for (name, value, important) in iter {
        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        if important {
            out.push_str(" !important");
        }
        out.push(';');
    }

    out
}
