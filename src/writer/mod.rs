// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use self::options::*;

mod options;

use crate::{
    Document,
    Element,
    NodeEdge,
    NodeId,
    WriteBuffer,
};

/// An indent counter.
struct Depth {
    value: u32,
    block: Vec<u8>,
}

impl Depth {
    fn new(indent: Indent) -> Depth {
        let block = match indent {
            Indent::None => Vec::new(),
            Indent::Spaces(n) => vec![b' '; n as usize],
            Indent::Tabs => vec![b'\t'],
        };

        Depth {
            value: 0,
            block,
        }
    }

    #[inline]
    fn write_indent(&self, buf: &mut Vec<u8>) {
        for _ in 0..self.value {
            buf.extend_from_slice(&self.block);
        }
    }
}

/// Writes a document into the buffer.
///
/// The declaration and the DOCTYPE go first, each followed by a line break.
pub fn write_dom(doc: &Document, opt: &WriteOptions, out: &mut Vec<u8>) {
    let lb = opt.line_break.as_bytes();

    if !doc.declaration().is_empty() {
        out.extend_from_slice(doc.declaration().as_bytes());
        out.extend_from_slice(lb);
    }

    if !doc.doctype().is_empty() {
        out.extend_from_slice(doc.doctype().as_bytes());
        out.extend_from_slice(lb);
    }

    if let Some(root) = doc.root() {
        write_element(doc, root, opt, out);
    }
}

/// Writes an element and its descendants into the buffer.
pub fn write_element(doc: &Document, node: NodeId, opt: &WriteOptions, out: &mut Vec<u8>) {
    let lb = opt.line_break.as_bytes();
    let mut depth = Depth::new(opt.indent);

    for edge in doc.traverse(node) {
        match edge {
            NodeEdge::Start(id) => {
                let elem = match doc.get_svg_element(id) {
                    Some(elem) => elem,
                    None => continue,
                };

                depth.write_indent(out);
                write_element_start(elem, opt, out);

                if !elem.value().is_empty() {
                    out.push(b'>');
                    write_escaped_text(elem.value(), out);
                } else if elem.has_children() {
                    out.push(b'>');
                    out.extend_from_slice(lb);
                } else {
                    out.extend_from_slice(b" />");
                    out.extend_from_slice(lb);
                }

                if elem.has_children() {
                    depth.value += 1;
                }
            }
            NodeEdge::End(id) => {
                let elem = match doc.get_svg_element(id) {
                    Some(elem) => elem,
                    None => continue,
                };

                if elem.has_children() {
                    depth.value -= 1;
                    depth.write_indent(out);
                }

                if !elem.value().is_empty() || elem.has_children() {
                    out.extend_from_slice(b"</");
                    out.extend_from_slice(elem.xml_name().as_bytes());
                    out.push(b'>');
                    out.extend_from_slice(lb);
                }
            }
        }
    }
}

fn write_element_start(elem: &Element, opt: &WriteOptions, out: &mut Vec<u8>) {
    out.push(b'<');
    out.extend_from_slice(elem.xml_name().as_bytes());

    if opt.sort_attributes {
        for attr in elem.attributes().sorted_by_group() {
            attr.write_buf_opt(opt, out);
        }
    } else {
        for attr in elem.attributes().iter() {
            attr.write_buf_opt(opt, out);
        }
    }
}

/// Writes an attribute value with `&`, `<` and the quote character escaped.
pub fn write_escaped_attribute(value: &str, quote: u8, out: &mut Vec<u8>) {
    for c in value.bytes() {
        match c {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'"' if quote == b'"' => out.extend_from_slice(b"&quot;"),
            b'\'' if quote == b'\'' => out.extend_from_slice(b"&apos;"),
            _ => out.push(c),
        }
    }
}

/// Writes a text value with `&`, `<` and `>` escaped.
pub fn write_escaped_text(value: &str, out: &mut Vec<u8>) {
    for c in value.bytes() {
        match c {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_attribute() {
        let mut out = Vec::new();
        write_escaped_attribute("a'b\"c&<", b'\'', &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "a&apos;b\"c&amp;&lt;");
    }

    #[test]
    fn escape_text() {
        let mut out = Vec::new();
        write_escaped_text("1 < 2 & 3 > 2", &mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "1 &lt; 2 &amp; 3 &gt; 2");
    }
}
