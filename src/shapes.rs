// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion between editor shapes and elements.

use crate::{
    parse_length,
    AttributeId,
    AttributeValue,
    Color,
    Document,
    Element,
    ElementType,
    NodeId,
    PathData,
    Points,
};

/// Paint properties of a shape.
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeStyle {
    /// Fill color. `None` is unset.
    pub fill: Option<Color>,
    /// Stroke color. `None` is unset.
    pub stroke: Option<Color>,
    /// Stroke width in user units.
    pub stroke_width: f64,
    /// Shape name shown by an editor. Stored in the `ShapeName` attribute.
    pub name: String,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        ShapeStyle {
            fill: None,
            stroke: Some(Color::new(0, 0, 0)),
            stroke_width: 1.0,
            name: String::new(),
        }
    }
}

/// A drawable object of an editor.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: ShapeStyle,
    },
    /// An ellipse. Circles are read as ellipses with equal radii.
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        style: ShapeStyle,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: ShapeStyle,
    },
    /// A polygon. Polylines are read as polygons.
    Polygon {
        points: Points,
        style: ShapeStyle,
    },
    Path {
        data: PathData,
        style: ShapeStyle,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        font_family: String,
        font_size: f64,
        style: ShapeStyle,
    },
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: String,
    },
}

impl Shape {
    /// Returns the shape style. Images have none.
    pub fn style(&self) -> Option<&ShapeStyle> {
        match *self {
            Shape::Rect { ref style, .. }
            | Shape::Ellipse { ref style, .. }
            | Shape::Line { ref style, .. }
            | Shape::Polygon { ref style, .. }
            | Shape::Path { ref style, .. }
            | Shape::Text { ref style, .. } => Some(style),
            Shape::Image { .. } => None,
        }
    }

    /// Returns the element type which represents the shape.
    pub fn element_type(&self) -> ElementType {
        match *self {
            Shape::Rect { .. } => ElementType::Rect,
            Shape::Ellipse { .. } => ElementType::Ellipse,
            Shape::Line { .. } => ElementType::Line,
            Shape::Polygon { .. } => ElementType::Polygon,
            Shape::Path { .. } => ElementType::Path,
            Shape::Text { .. } => ElementType::Text,
            Shape::Image { .. } => ElementType::Image,
        }
    }

    /// Reads a shape from an element.
    ///
    /// Lengths are converted into user units using `dpi`.
    /// Returns `None` for elements which are not shapes and for text
    /// elements without a value.
    pub fn from_element(doc: &Document, node: NodeId, dpi: f64) -> Option<Shape> {
        let elem = doc.get_svg_element(node)?;
        let len = |id: AttributeId| parse_length(&elem.attribute_string(id), dpi);

        let shape = match elem.element_type() {
            ElementType::Rect => Shape::Rect {
                x: len(AttributeId::X),
                y: len(AttributeId::Y),
                width: len(AttributeId::Width),
                height: len(AttributeId::Height),
                style: read_style(elem, dpi),
            },
            ElementType::Circle => {
                let r = len(AttributeId::R);
                Shape::Ellipse {
                    cx: len(AttributeId::Cx),
                    cy: len(AttributeId::Cy),
                    rx: r,
                    ry: r,
                    style: read_style(elem, dpi),
                }
            }
            ElementType::Ellipse => Shape::Ellipse {
                cx: len(AttributeId::Cx),
                cy: len(AttributeId::Cy),
                rx: len(AttributeId::Rx),
                ry: len(AttributeId::Ry),
                style: read_style(elem, dpi),
            },
            ElementType::Line => Shape::Line {
                x1: len(AttributeId::X1),
                y1: len(AttributeId::Y1),
                x2: len(AttributeId::X2),
                y2: len(AttributeId::Y2),
                style: read_style(elem, dpi),
            },
            ElementType::Polygon | ElementType::Polyline => Shape::Polygon {
                points: Points::parse_lossy(&elem.attribute_string(AttributeId::Points)),
                style: read_style(elem, dpi),
            },
            ElementType::Path => Shape::Path {
                data: PathData::parse(&elem.attribute_string(AttributeId::PathData)),
                style: read_style(elem, dpi),
            },
            ElementType::Text => {
                if elem.value().is_empty() {
                    debug!("Text element {} has no value.", node);
                    return None;
                }

                let font_size = elem.attribute_string(AttributeId::FontSize);
                Shape::Text {
                    x: len(AttributeId::X),
                    y: len(AttributeId::Y),
                    text: elem.value().to_string(),
                    font_family: elem.attribute_string(AttributeId::FontFamily),
                    font_size: if font_size.is_empty() { 0.0 } else { parse_length(&font_size, dpi) },
                    style: read_style(elem, dpi),
                }
            }
            ElementType::Image => Shape::Image {
                x: len(AttributeId::X),
                y: len(AttributeId::Y),
                width: len(AttributeId::Width),
                height: len(AttributeId::Height),
                href: elem.attribute_string(AttributeId::XlinkHref),
            },
            ElementType::Unsupported
            | ElementType::Svg
            | ElementType::Desc
            | ElementType::Group => return None,
        };

        Some(shape)
    }

    /// Builds a detached element from the shape.
    pub fn to_element(&self) -> Element {
        let mut elem = Element::new(self.element_type(),
                                    self.element_type().tag_name().unwrap_or_default());

        {
            let mut set = |id: AttributeId, value: String| {
                elem.set_attribute_value(id.name(), &value);
            };

            match *self {
                Shape::Rect { x, y, width, height, .. } => {
                    set(AttributeId::X, x.to_string());
                    set(AttributeId::Y, y.to_string());
                    set(AttributeId::Width, width.to_string());
                    set(AttributeId::Height, height.to_string());
                }
                Shape::Ellipse { cx, cy, rx, ry, .. } => {
                    set(AttributeId::Cx, cx.to_string());
                    set(AttributeId::Cy, cy.to_string());
                    set(AttributeId::Rx, rx.to_string());
                    set(AttributeId::Ry, ry.to_string());
                }
                Shape::Line { x1, y1, x2, y2, .. } => {
                    set(AttributeId::X1, x1.to_string());
                    set(AttributeId::Y1, y1.to_string());
                    set(AttributeId::X2, x2.to_string());
                    set(AttributeId::Y2, y2.to_string());
                }
                Shape::Polygon { ref points, .. } => {
                    set(AttributeId::Points, points.to_string());
                }
                Shape::Path { ref data, .. } => {
                    set(AttributeId::PathData, data.to_path_string());
                }
                Shape::Text { x, y, ref font_family, font_size, .. } => {
                    set(AttributeId::X, x.to_string());
                    set(AttributeId::Y, y.to_string());
                    set(AttributeId::FontFamily, font_family.clone());
                    if font_size > 0.0 {
                        set(AttributeId::FontSize, font_size.to_string());
                    }
                }
                Shape::Image { x, y, width, height, ref href } => {
                    set(AttributeId::X, x.to_string());
                    set(AttributeId::Y, y.to_string());
                    set(AttributeId::Width, width.to_string());
                    set(AttributeId::Height, height.to_string());
                    set(AttributeId::XlinkHref, href.clone());
                }
            }
        }

        if let Shape::Text { ref text, .. } = *self {
            elem.set_value(text);
        }

        if let Some(style) = self.style() {
            write_style(&mut elem, style);
        }

        elem
    }
}

fn read_style(elem: &Element, dpi: f64) -> ShapeStyle {
    let color = |id: AttributeId| elem.attribute_value(id).and_then(AttributeValue::as_color).cloned();

    let stroke_width = elem.attribute_string(AttributeId::StrokeWidth);
    let stroke_width = if stroke_width.is_empty() { 1.0 } else { parse_length(&stroke_width, dpi) };

    ShapeStyle {
        fill: color(AttributeId::Fill),
        stroke: color(AttributeId::Stroke),
        stroke_width,
        name: elem.attribute_string(AttributeId::ShapeName),
    }
}

fn write_style(elem: &mut Element, style: &ShapeStyle) {
    let attrs = elem.attributes_mut();

    if let Some(attr) = attrs.get_mut(AttributeId::Fill) {
        attr.value = style.fill.clone().map(AttributeValue::Color).unwrap_or_default();
    }

    if let Some(attr) = attrs.get_mut(AttributeId::Stroke) {
        attr.value = style.stroke.clone().map(AttributeValue::Color).unwrap_or_default();
    }

    if let Some(attr) = attrs.get_mut(AttributeId::StrokeWidth) {
        attr.value = AttributeValue::from(style.stroke_width.to_string());
    }

    if !style.name.is_empty() {
        if let Some(attr) = attrs.get_mut(AttributeId::ShapeName) {
            attr.value = AttributeValue::from(style.name.as_str());
        }
    }
}

impl Document {
    /// Inserts a shape as the last child of `parent`, or of the root without a parent.
    pub fn add_shape(&mut self, parent: Option<NodeId>, shape: &Shape) -> Option<NodeId> {
        self.add_element(parent, shape.to_element())
    }

    /// Reads a shape from an element using the document resolution.
    pub fn shape(&self, node: NodeId) -> Option<Shape> {
        Shape::from_element(self, node, self.dpi())
    }
}
