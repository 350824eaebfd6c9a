// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::css::SelectorElement;
use crate::{
    Document,
    Element,
    NodeId,
};

/// A borrowed element with access to its document.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
    elem: &'a Element,
}

impl<'a> ElementRef<'a> {
    /// Constructs a new reference. Returns `None` for an unknown ID.
    pub fn new(doc: &'a Document, id: NodeId) -> Option<ElementRef<'a>> {
        let elem = doc.get_svg_element(id)?;
        Some(ElementRef { doc, id, elem })
    }

    /// Returns the element ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element.
    pub fn element(&self) -> &'a Element {
        self.elem
    }
}

impl<'a> SelectorElement for ElementRef<'a> {
    fn local_name(&self) -> &str {
        self.elem.xml_name()
    }

    fn parent_element(&self) -> Option<Self> {
        ElementRef::new(self.doc, self.elem.parent()?)
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        ElementRef::new(self.doc, self.elem.previous_sibling()?)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let attr = self.elem.attributes().get(name)?;
        if attr.is_unset() {
            None
        } else {
            Some(attr.value_string())
        }
    }
}
