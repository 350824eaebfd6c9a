// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! SVG parsing: micro-parsers for attribute values and the XML tree builder.

use std::collections::HashMap;

pub use self::length::*;
pub use self::options::*;
pub use self::path::*;
pub use self::points::*;
pub use self::transform::*;

mod length;
mod options;
mod path;
mod points;
mod text;
mod transform;

use xmlparser::{
    self,
    ElementEnd,
    EntityDefinition,
    ExternalId,
    StrSpan,
    Token,
};

use crate::css::{
    Origin,
    StyleSheet,
};
use crate::error::{
    ParserError,
    Result,
};
use crate::{
    Document,
    Element,
    ElementType,
    NodeId,
};

use self::text::Entities;

struct ParserData<'a> {
    entities: Entities<'a>,
    // The last created element, which receives attributes.
    node: Option<NodeId>,
    // Open elements.
    parents: Vec<NodeId>,
    css_list: Vec<String>,
}

/// Builds a document from SVG text.
pub fn parse_svg(text: &str, opt: &ParseOptions) -> Result<Document> {
    let mut doc = Document::new();
    doc.set_dpi(opt.dpi);

    let mut data = ParserData {
        entities: HashMap::new(),
        node: None,
        parents: Vec::new(),
        css_list: Vec::new(),
    };

    for token in xmlparser::Tokenizer::from(text) {
        process_token(&mut doc, token?, &mut data, opt)?;
    }

    if doc.root().is_none() {
        return Err(ParserError::NoSvgElement);
    }

    if let Some(id) = data.parents.last() {
        let name = doc.get_svg_element(*id)
            .map(|e| e.xml_name().to_string())
            .unwrap_or_default();
        return Err(ParserError::UnexpectedEndOfStream(name));
    }

    for css in data.css_list {
        doc.add_style_sheet(StyleSheet::parse(&css, Origin::Author));
    }

    Ok(doc)
}

fn process_token<'a>(
    doc: &mut Document,
    token: Token<'a>,
    data: &mut ParserData<'a>,
    opt: &ParseOptions,
) -> Result<()> {
    match token {
        Token::ElementStart { prefix, local, .. } => {
            let name = qualified_name(prefix, local);
            let elem = Element::from_tag_name(&name);

            let id = match data.parents.last().cloned() {
                Some(parent) => doc.add_element(Some(parent), elem),
                None => {
                    if doc.root().is_some() || elem.element_type() != ElementType::Svg {
                        return Err(ParserError::NoSvgElement);
                    }

                    doc.add_element(None, elem)
                }
            };

            data.node = id;
        }
        Token::Attribute { prefix, local, value, .. } => {
            let name = qualified_name(prefix, local);
            let value = text::unescape(value.as_str(), &data.entities)?;

            let elem = match data.node.and_then(|id| doc.get_svg_element_mut(id)) {
                Some(elem) => elem,
                None => return Ok(()),
            };

            if !elem.set_attribute_value(&name, &value) {
                if opt.parse_unknown_attributes {
                    elem.set_unknown_attribute(&name, &value);
                } else {
                    debug!("Attribute '{}' is not supported by '{}'. Skipped.",
                           name, elem.xml_name());
                }
            }
        }
        Token::ElementEnd { end, .. } => {
            match end {
                ElementEnd::Open => {
                    if let Some(id) = data.node {
                        data.parents.push(id);
                    }
                }
                ElementEnd::Empty => {}
                ElementEnd::Close(prefix, local) => {
                    let name = qualified_name(prefix, local);

                    let parent = match data.parents.pop() {
                        Some(id) => id,
                        None => return Err(ParserError::UnexpectedCloseTag(String::new(), name)),
                    };

                    let expected = doc.get_svg_element(parent)
                        .map(|e| e.xml_name().to_string())
                        .unwrap_or_default();

                    if expected != name {
                        return Err(ParserError::UnexpectedCloseTag(expected, name));
                    }

                    data.node = None;
                }
            }
        }
        Token::Text { text } => {
            process_text(doc, text.as_str(), false, data, opt)?;
        }
        Token::Cdata { text, .. } => {
            process_text(doc, text.as_str(), true, data, opt)?;
        }
        Token::Comment { .. } | Token::ProcessingInstruction { .. } => {
            warn!("Unexpected item.");
        }
        Token::Declaration { version, encoding, standalone, .. } => {
            let mut s = format!("<?xml version=\"{}\"", version.as_str());

            if let Some(encoding) = encoding {
                s.push_str(&format!(" encoding=\"{}\"", encoding.as_str()));
            }

            if let Some(sa) = standalone {
                s.push_str(if sa { " standalone=\"yes\"" } else { " standalone=\"no\"" });
            }

            s.push_str("?>");
            doc.set_declaration(&s);
        }
        Token::DtdStart { name, external_id, .. } | Token::EmptyDtd { name, external_id, .. } => {
            doc.set_doctype(&doctype_string(name.as_str(), external_id));
        }
        Token::EntityDeclaration { name, definition, .. } => {
            match definition {
                EntityDefinition::EntityValue(value) => {
                    data.entities.insert(name.as_str(), value.as_str());
                }
                EntityDefinition::ExternalId(_) => {
                    warn!("External entity '{}' is not supported.", name.as_str());
                }
            }
        }
        Token::DtdEnd { .. } => {}
    }

    Ok(())
}

fn process_text(
    doc: &mut Document,
    text: &str,
    is_cdata: bool,
    data: &mut ParserData,
    opt: &ParseOptions,
) -> Result<()> {
    let parent = match data.parents.last() {
        Some(id) => *id,
        None => return Ok(()),
    };

    let is_style = doc.get_svg_element(parent).map_or(false, is_style_element);

    if is_cdata && !is_style {
        warn!("Unexpected item.");
        return Ok(());
    }

    if text.trim().is_empty() {
        return Ok(());
    }

    let text = if is_cdata {
        text.to_string()
    } else {
        text::unescape(text, &data.entities)?
    };

    if is_style && opt.parse_style_sheets {
        data.css_list.push(text.clone());
    }

    if let Some(elem) = doc.get_svg_element_mut(parent) {
        elem.set_value(&text);
    }

    Ok(())
}

fn is_style_element(elem: &Element) -> bool {
    elem.is_unsupported() && elem.xml_name() == "style"
}

fn qualified_name(prefix: StrSpan, local: StrSpan) -> String {
    if prefix.as_str().is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

fn doctype_string(name: &str, external_id: Option<ExternalId>) -> String {
    match external_id {
        Some(ExternalId::Public(pub_id, system_id)) => {
            format!("<!DOCTYPE {} PUBLIC \"{}\" \"{}\">",
                    name, pub_id.as_str(), system_id.as_str())
        }
        Some(ExternalId::System(system_id)) => {
            format!("<!DOCTYPE {} SYSTEM \"{}\">", name, system_id.as_str())
        }
        None => format!("<!DOCTYPE {}>", name),
    }
}
