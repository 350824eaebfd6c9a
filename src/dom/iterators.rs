// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::{
    Document,
    NodeId,
};

/// A subtree edge produced by `Traverse`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NodeEdge {
    /// An opening tag. Comes before the element descendants.
    Start(NodeId),
    /// A closing tag. Comes after the element descendants.
    End(NodeId),
}

/// An iterator of edges of a given element and its descendants, in tree order.
#[derive(Clone)]
pub struct Traverse<'a> {
    doc: &'a Document,
    root: NodeId,
    next: Option<NodeEdge>,
}

impl<'a> Traverse<'a> {
    /// Constructs a new Traverse iterator.
    pub fn new(doc: &'a Document, node: NodeId) -> Traverse<'a> {
        Traverse {
            doc,
            root: node,
            next: Some(NodeEdge::Start(node)),
        }
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = NodeEdge;

    fn next(&mut self) -> Option<NodeEdge> {
        let item = self.next.take()?;

        self.next = match item {
            NodeEdge::Start(node) => {
                match self.doc.get_svg_element(node).and_then(|e| e.first_child()) {
                    Some(first_child) => Some(NodeEdge::Start(first_child)),
                    None => Some(NodeEdge::End(node)),
                }
            }
            NodeEdge::End(node) => {
                if node == self.root {
                    None
                } else {
                    match self.doc.get_svg_element(node) {
                        Some(elem) => match elem.next_sibling() {
                            Some(next) => Some(NodeEdge::Start(next)),
                            None => elem.parent().map(NodeEdge::End),
                        },
                        None => None,
                    }
                }
            }
        };

        Some(item)
    }
}

/// An iterator of a given element and its descendants, in tree order.
#[derive(Clone)]
pub struct Descendants<'a>(Traverse<'a>);

impl<'a> Descendants<'a> {
    /// Constructs a new Descendants iterator.
    pub fn new(doc: &'a Document, node: NodeId) -> Descendants<'a> {
        Descendants(Traverse::new(doc, node))
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            match self.0.next()? {
                NodeEdge::Start(node) => return Some(node),
                NodeEdge::End(_) => {}
            }
        }
    }
}

/// An iterator of direct children of an element.
#[derive(Clone)]
pub struct Children<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Children<'a> {
    /// Constructs a new Children iterator.
    pub fn new(doc: &'a Document, node: NodeId) -> Children<'a> {
        Children {
            doc,
            next: doc.get_svg_element(node).and_then(|e| e.first_child()),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.next.take()?;
        self.next = self.doc.get_svg_element(node).and_then(|e| e.next_sibling());
        Some(node)
    }
}

/// An iterator of ancestors of an element, starting from its parent.
#[derive(Clone)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    /// Constructs a new Ancestors iterator.
    pub fn new(doc: &'a Document, node: NodeId) -> Ancestors<'a> {
        Ancestors {
            doc,
            next: doc.get_svg_element(node).and_then(|e| e.parent()),
        }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.next.take()?;
        self.next = self.doc.get_svg_element(node).and_then(|e| e.parent());
        Some(node)
    }
}
