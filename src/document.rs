// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use slab::Slab;

use crate::css::{
    CollectedStyleDeclaration,
    StyleResolver,
    StyleSheet,
};
use crate::parser::parse_svg;
use crate::writer;
use crate::{
    Ancestors,
    AttributeId,
    Children,
    Descendants,
    Element,
    ElementRef,
    NodeId,
    ParseOptions,
    DEFAULT_DPI,
    ParserError,
    ToStringWithOptions,
    Traverse,
    WriteBuffer,
    WriteOptions,
};

/// The declaration of a new document.
pub const DEFAULT_DECLARATION: &str = "<?xml version=\"1.0\" standalone=\"no\"?>";

/// The DOCTYPE of a new document.
pub const DEFAULT_DOCTYPE: &str = "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
                                   \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">";

/// The SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Container of [`Element`]s.
///
/// Structure:
///
/// - [`Document`]
///     - declaration and DOCTYPE strings
///     - root `svg` [`Element`]
///         - child [`Element`]
///             - [`ElementType`]
///             - [`Attributes`]
///             - internal [`NodeId`]
///         - child [`Element`]
///         - ...
///     - author [`StyleSheet`]s collected from `style` elements
///
/// Elements are stored in an arena and addressed by [`NodeId`]s, which are
/// assigned on insertion from a counter starting at 1 and never reused.
/// All structural changes are done through the [`Document`], so tree links
/// and the ID map are always in sync.
///
/// [`Attributes`]: struct.Attributes.html
/// [`Document`]: struct.Document.html
/// [`Element`]: struct.Element.html
/// [`ElementType`]: enum.ElementType.html
/// [`NodeId`]: struct.NodeId.html
/// [`StyleSheet`]: css/struct.StyleSheet.html
pub struct Document {
    storage: Slab<Element>,
    index: HashMap<NodeId, usize>,
    root: Option<NodeId>,
    next_id: u32,
    declaration: String,
    doctype: String,
    style_sheets: Vec<StyleSheet>,
    dpi: f64,
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    /// Constructs an empty `Document`.
    pub fn new() -> Document {
        Document {
            storage: Slab::new(),
            index: HashMap::new(),
            root: None,
            next_id: 1,
            declaration: String::new(),
            doctype: String::new(),
            style_sheets: Vec::new(),
            dpi: DEFAULT_DPI,
        }
    }

    /// Constructs a new SVG 1.1 document with an empty `svg` element.
    pub fn create_new_document() -> Document {
        let mut doc = Document::new();
        doc.declaration = DEFAULT_DECLARATION.to_string();
        doc.doctype = DEFAULT_DOCTYPE.to_string();

        let mut root = Element::from_tag_name("svg");
        root.set_attribute_value("xmlns", SVG_NS);
        root.set_attribute_value("version", "1.1");
        doc.add_element(None, root);

        doc
    }

    /// Constructs a new `Document` from the text using a default [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Document, ParserError> {
        Document::from_str_with_opt(text, &ParseOptions::default())
    }

    /// Constructs a new `Document` from the text using a supplied [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    pub fn from_str_with_opt(text: &str, opt: &ParseOptions) -> Result<Document, ParserError> {
        parse_svg(text, opt)
    }

    /// Constructs a new `Document` from a file using a default [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document, ParserError> {
        let text = fs::read_to_string(path)?;
        Document::from_str(&text)
    }

    /// Replaces the document content with a parsed file.
    ///
    /// On failure, the error is logged and the document is left empty.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.clear();

        match Document::from_file(path.as_ref()) {
            Ok(doc) => {
                *self = doc;
                true
            }
            Err(e) => {
                warn!("Failed to load '{}' cause {}.", path.as_ref().display(), e);
                false
            }
        }
    }

    /// Replaces the document content with a parsed text.
    ///
    /// On failure, the error is logged and the document is left empty.
    pub fn load_from_str(&mut self, text: &str) -> bool {
        self.clear();

        match Document::from_str(text) {
            Ok(doc) => {
                *self = doc;
                true
            }
            Err(e) => {
                warn!("Failed to parse an SVG cause {}.", e);
                false
            }
        }
    }

    /// Writes the document into a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> bool {
        self.save_to_file_with_opt(path, &WriteOptions::default())
    }

    /// Writes the document into a file using a supplied [`WriteOptions`].
    ///
    /// [`WriteOptions`]: struct.WriteOptions.html
    pub fn save_to_file_with_opt<P: AsRef<Path>>(&self, path: P, opt: &WriteOptions) -> bool {
        let mut out = Vec::with_capacity(4096);
        self.write_buf_opt(opt, &mut out);

        match fs::write(path.as_ref(), &out) {
            Ok(_) => true,
            Err(e) => {
                warn!("Failed to write '{}' cause {}.", path.as_ref().display(), e);
                false
            }
        }
    }

    /// Removes all elements, style sheets, the declaration and the DOCTYPE.
    ///
    /// The ID counter is reset too.
    pub fn clear(&mut self) {
        *self = Document::new();
    }

    /// Returns the root element ID.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the XML declaration.
    #[inline]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Sets the XML declaration, like `<?xml version="1.0"?>`.
    pub fn set_declaration(&mut self, text: &str) {
        self.declaration = text.to_string();
    }

    /// Returns the DOCTYPE.
    #[inline]
    pub fn doctype(&self) -> &str {
        &self.doctype
    }

    /// Sets the DOCTYPE, like `<!DOCTYPE svg>`.
    pub fn set_doctype(&mut self, text: &str) {
        self.doctype = text.to_string();
    }

    /// Returns the resolution used to convert physical units into user units.
    ///
    /// Taken from [`ParseOptions`] on load.
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    #[inline]
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Sets the resolution used to convert physical units into user units.
    pub fn set_dpi(&mut self, dpi: f64) {
        self.dpi = dpi;
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the document has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns an element by its internal ID.
    pub fn get_svg_element(&self, id: NodeId) -> Option<&Element> {
        self.index.get(&id).and_then(|key| self.storage.get(*key))
    }

    /// Returns a mutable element by its internal ID.
    pub fn get_svg_element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.index.get(&id) {
            Some(key) => self.storage.get_mut(*key),
            None => None,
        }
    }

    /// Returns the first element, in tree order, with such `id` attribute.
    pub fn get_svg_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }

        let root = self.root?;
        self.descendants(root).find(|node| {
            self.get_svg_element(*node).map_or(false, |e| e.svg_id() == id)
        })
    }

    /// Returns an element with access to the document.
    pub fn element_ref(&self, id: NodeId) -> Option<ElementRef> {
        ElementRef::new(self, id)
    }

    /// Creates a detached element by its tag name.
    pub fn create_element(&self, tag_name: &str) -> Element {
        Element::from_tag_name(tag_name)
    }

    /// Inserts an element as the last child of `parent`.
    ///
    /// Without a parent, the element becomes the root, or the last child
    /// of the root if it already exists.
    ///
    /// Returns the assigned ID or `None` if the parent doesn't exist.
    pub fn add_element(&mut self, parent: Option<NodeId>, mut elem: Element) -> Option<NodeId> {
        let parent = match parent.or(self.root) {
            Some(parent) => {
                if !self.index.contains_key(&parent) {
                    warn!("Parent element {} doesn't exist.", parent);
                    return None;
                }

                Some(parent)
            }
            None => None,
        };

        let id = NodeId(self.next_id);
        self.next_id += 1;

        elem.unlink();
        elem.id = id;
        elem.parent = parent;

        let key = self.storage.insert(elem);
        self.index.insert(id, key);

        match parent {
            Some(parent) => self.link_last_child(parent, id),
            None => self.root = Some(id),
        }

        self.trace(id, "added");
        Some(id)
    }

    /// Removes an element and all its descendants.
    ///
    /// The root element can't be deleted.
    pub fn delete_element(&mut self, id: NodeId) -> bool {
        if !self.index.contains_key(&id) {
            return false;
        }

        if self.root == Some(id) {
            info!("The root element can't be deleted.");
            return false;
        }

        self.detach(id);

        // Children first.
        let mut nodes: Vec<NodeId> = self.descendants(id).collect();
        nodes.reverse();

        for node in nodes {
            if let Some(key) = self.index.remove(&node) {
                self.storage.remove(key);
                debug!("Element {} deleted.", node);
            }
        }

        true
    }

    /// Copies an element with all its descendants under `parent`.
    ///
    /// Without a parent, the copy is added under the root.
    /// Non-empty `id` attributes get a `_N` suffix to stay unique.
    pub fn clone_element(&mut self, parent: Option<NodeId>, source: NodeId) -> Option<NodeId> {
        let mut elem = self.get_svg_element(source)?.clone();
        let children: Vec<NodeId> = self.children(source).collect();

        let old_id = elem.svg_id();
        if !old_id.is_empty() {
            let mut new_id = old_id.clone();
            let mut i = 1;
            while self.get_svg_element_by_id(&new_id).is_some() {
                new_id = format!("{}_{}", old_id, i);
                i += 1;
            }

            elem.set_attribute_value(AttributeId::Id.name(), &new_id);
        }

        let new = self.add_element(parent, elem)?;

        for child in children {
            self.clone_element(Some(new), child);
        }

        Some(new)
    }

    /// Swaps an element with its previous sibling.
    pub fn element_position_up(&mut self, id: NodeId) -> bool {
        if !self.check_movable(id) {
            return false;
        }

        match self.get_svg_element(id).and_then(|e| e.previous) {
            Some(prev) => {
                self.swap_with_next(prev);
                self.trace(id, "moved up");
                true
            }
            None => {
                info!("Element {} is already the first child.", id);
                false
            }
        }
    }

    /// Swaps an element with its next sibling.
    pub fn element_position_down(&mut self, id: NodeId) -> bool {
        if !self.check_movable(id) {
            return false;
        }

        if self.get_svg_element(id).and_then(|e| e.next).is_none() {
            info!("Element {} is already the last child.", id);
            return false;
        }

        self.swap_with_next(id);
        self.trace(id, "moved down");
        true
    }

    /// Moves an element to the end of its grandparent children.
    ///
    /// Children of the root can't be moved up.
    pub fn element_level_up(&mut self, id: NodeId) -> bool {
        if !self.check_movable(id) {
            return false;
        }

        let parent = match self.get_svg_element(id).and_then(|e| e.parent) {
            Some(parent) => parent,
            None => return false,
        };

        let grandparent = match self.get_svg_element(parent).and_then(|e| e.parent) {
            Some(grandparent) => grandparent,
            None => {
                info!("Element {} is already at the top level.", id);
                return false;
            }
        };

        self.detach(id);

        if let Some(elem) = self.get_svg_element_mut(id) {
            elem.parent = Some(grandparent);
        }
        self.link_last_child(grandparent, id);

        self.trace(id, "moved a level up");
        true
    }

    /// Returns an iterator over element children.
    pub fn children(&self, id: NodeId) -> Children {
        Children::new(self, id)
    }

    /// Returns an iterator over the element and its descendants, in tree order.
    pub fn descendants(&self, id: NodeId) -> Descendants {
        Descendants::new(self, id)
    }

    /// Returns an iterator over the element ancestors, starting from the parent.
    pub fn ancestors(&self, id: NodeId) -> Ancestors {
        Ancestors::new(self, id)
    }

    /// Returns an iterator over start and end edges of the element subtree.
    pub fn traverse(&self, id: NodeId) -> Traverse {
        Traverse::new(self, id)
    }

    /// Returns `true` if the element has no previous sibling.
    pub fn is_first_child(&self, id: NodeId) -> bool {
        self.get_svg_element(id).map_or(false, |e| e.previous.is_none())
    }

    /// Returns `true` if the element has no next sibling.
    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        self.get_svg_element(id).map_or(false, |e| e.next.is_none())
    }

    /// Returns the last element of the sibling chain which contains `id`.
    pub fn last_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut curr = id;
        loop {
            match self.get_svg_element(curr)?.next {
                Some(next) => curr = next,
                None => return Some(curr),
            }
        }
    }

    /// Returns author style sheets.
    pub fn style_sheets(&self) -> &[StyleSheet] {
        &self.style_sheets
    }

    /// Appends an author style sheet.
    pub fn add_style_sheet(&mut self, sheet: StyleSheet) {
        self.style_sheets.push(sheet);
    }

    /// Returns a resolver seeded with the document style sheets.
    ///
    /// User agent and user style sheets can be added to it afterwards.
    pub fn style_resolver(&self) -> StyleResolver {
        let mut resolver = StyleResolver::new();
        for sheet in &self.style_sheets {
            resolver.add_style_sheet(sheet.clone());
        }

        resolver
    }

    /// Computes the style of an element.
    pub fn computed_style(
        &self,
        id: NodeId,
        pseudo_element: Option<&str>,
        resolver: &StyleResolver,
    ) -> Option<CollectedStyleDeclaration> {
        let elem = ElementRef::new(self, id)?;
        Some(resolver.get_computed_style(&elem, pseudo_element))
    }

    /// Returns the XML of an element subtree.
    pub fn element_to_xml(&self, id: NodeId) -> String {
        let mut out = Vec::new();
        writer::write_element(self, id, &WriteOptions::default(), &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Checks tree links of the whole document.
    ///
    /// Returns `false` if any invariant is broken.
    pub fn check_links(&self) -> bool {
        let root = match self.root {
            Some(root) => root,
            None => return self.storage.is_empty(),
        };

        let mut count = 0;
        for id in self.descendants(root) {
            count += 1;

            let elem = match self.get_svg_element(id) {
                Some(elem) => elem,
                None => return false,
            };

            if id != root && elem.parent.is_none() {
                return false;
            }

            if let Some(next) = elem.next {
                match self.get_svg_element(next) {
                    Some(n) if n.previous == Some(id) && n.parent == elem.parent => {}
                    _ => return false,
                }
            }

            if let Some(child) = elem.first_child {
                match self.get_svg_element(child) {
                    Some(c) if c.previous.is_none() && c.parent == Some(id) => {}
                    _ => return false,
                }
            }
        }

        count == self.storage.len() && count == self.index.len()
    }

    fn check_movable(&self, id: NodeId) -> bool {
        if !self.index.contains_key(&id) {
            return false;
        }

        if self.root == Some(id) {
            info!("The root element can't be moved.");
            return false;
        }

        true
    }

    fn link_last_child(&mut self, parent: NodeId, id: NodeId) {
        let first = self.get_svg_element(parent).and_then(|e| e.first_child);

        match first.and_then(|first| self.last_sibling(first)) {
            Some(last) => {
                if let Some(e) = self.get_svg_element_mut(last) {
                    e.next = Some(id);
                }

                if let Some(e) = self.get_svg_element_mut(id) {
                    e.previous = Some(last);
                }
            }
            None => {
                if let Some(e) = self.get_svg_element_mut(parent) {
                    e.first_child = Some(id);
                }
            }
        }
    }

    // Unlinks an element from its parent and siblings. Children are kept.
    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = match self.get_svg_element(id) {
            Some(e) => (e.parent, e.previous, e.next),
            None => return,
        };

        match prev {
            Some(prev) => {
                if let Some(e) = self.get_svg_element_mut(prev) {
                    e.next = next;
                }
            }
            None => {
                if let Some(e) = parent.and_then(|p| self.get_svg_element_mut(p)) {
                    e.first_child = next;
                }
            }
        }

        if let Some(e) = next.and_then(|n| self.get_svg_element_mut(n)) {
            e.previous = prev;
        }

        if let Some(e) = self.get_svg_element_mut(id) {
            e.parent = None;
            e.previous = None;
            e.next = None;
        }
    }

    // Swaps an element with its next sibling: `A B` -> `B A`.
    fn swap_with_next(&mut self, a: NodeId) {
        let (parent, before, b) = match self.get_svg_element(a) {
            Some(e) => (e.parent, e.previous, e.next),
            None => return,
        };

        let b = match b {
            Some(b) => b,
            None => return,
        };

        let after = self.get_svg_element(b).and_then(|e| e.next);

        match before {
            Some(before) => {
                if let Some(e) = self.get_svg_element_mut(before) {
                    e.next = Some(b);
                }
            }
            None => {
                if let Some(e) = parent.and_then(|p| self.get_svg_element_mut(p)) {
                    e.first_child = Some(b);
                }
            }
        }

        if let Some(e) = self.get_svg_element_mut(b) {
            e.previous = before;
            e.next = Some(a);
        }

        if let Some(e) = self.get_svg_element_mut(a) {
            e.previous = Some(b);
            e.next = after;
        }

        if let Some(e) = after.and_then(|n| self.get_svg_element_mut(n)) {
            e.previous = Some(a);
        }
    }

    fn trace(&self, id: NodeId, action: &str) {
        if let Some(elem) = self.get_svg_element(id) {
            trace!("Element '{}' {}: {}.", elem.name(), action, elem.info());
        }
    }
}

impl WriteBuffer for Document {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        writer::write_dom(self, opt, buf);
    }
}

impl_display!(Document);

impl ::std::fmt::Debug for Document {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "Document({})", self.to_string_with_opt(&WriteOptions {
            line_break: crate::LineBreak::Lf,
            .. WriteOptions::default()
        }))
    }
}
