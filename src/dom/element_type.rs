// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::AttributeId;

/// Kinds of elements known to the editor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ElementType {
    /// Any element outside of the list below. Kept and written back as is.
    Unsupported,
    /// The `svg` element.
    Svg,
    /// The `desc` element.
    Desc,
    /// The `text` element.
    Text,
    /// The `g` element.
    Group,
    /// The `rect` element.
    Rect,
    /// The `circle` element.
    Circle,
    /// The `ellipse` element.
    Ellipse,
    /// The `line` element.
    Line,
    /// The `path` element.
    Path,
    /// The `polygon` element.
    Polygon,
    /// The `image` element.
    Image,
    /// The `polyline` element.
    Polyline,
}

const BASIC_SHAPE: &[AttributeId] = &[
    AttributeId::XmlBase,
    AttributeId::XmlLang,
    AttributeId::XmlSpace,
    AttributeId::Class,
    AttributeId::Style,
    AttributeId::Color,
    AttributeId::Fill,
    AttributeId::FillRule,
    AttributeId::Stroke,
    AttributeId::StrokeWidth,
    AttributeId::StrokeDasharray,
    AttributeId::StrokeDashoffset,
    AttributeId::StrokeLinecap,
    AttributeId::StrokeLinejoin,
    AttributeId::StrokeMiterlimit,
    AttributeId::ColorInterpolation,
    AttributeId::ColorInterpolationFilters,
    AttributeId::ColorRendering,
    AttributeId::Display,
    AttributeId::PointerEvents,
    AttributeId::ImageRendering,
    AttributeId::ShapeRendering,
    AttributeId::TextRendering,
    AttributeId::Visibility,
    AttributeId::Opacity,
    AttributeId::FillOpacity,
    AttributeId::StrokeOpacity,
    AttributeId::Transform,
];

const SVG: &[AttributeId] = &[
    AttributeId::XmlNs,
    AttributeId::Version,
    AttributeId::Width,
    AttributeId::Height,
];

const RECT: &[AttributeId] = &[
    AttributeId::ShapeName,
    AttributeId::X,
    AttributeId::Y,
    AttributeId::Width,
    AttributeId::Height,
    AttributeId::Rx,
    AttributeId::Ry,
];

const CIRCLE: &[AttributeId] = &[
    AttributeId::Cx,
    AttributeId::Cy,
    AttributeId::R,
];

const ELLIPSE: &[AttributeId] = &[
    AttributeId::Cx,
    AttributeId::Cy,
    AttributeId::Rx,
    AttributeId::Ry,
];

const LINE: &[AttributeId] = &[
    AttributeId::X1,
    AttributeId::Y1,
    AttributeId::X2,
    AttributeId::Y2,
];

const PATH: &[AttributeId] = &[
    AttributeId::PathData,
    AttributeId::PathLength,
    AttributeId::ShapeName,
];

const POLY: &[AttributeId] = &[
    AttributeId::Points,
];

const IMAGE: &[AttributeId] = &[
    AttributeId::X,
    AttributeId::Y,
    AttributeId::Width,
    AttributeId::Height,
    AttributeId::XlinkHref,
    AttributeId::Class,
    AttributeId::Style,
    AttributeId::Transform,
];

const TEXT: &[AttributeId] = &[
    AttributeId::XmlBase,
    AttributeId::XmlLang,
    AttributeId::XmlSpace,
    AttributeId::Fill,
    AttributeId::X,
    AttributeId::Y,
    AttributeId::Dx,
    AttributeId::Dy,
    AttributeId::Rotate,
    AttributeId::TextLength,
    AttributeId::LengthAdjust,
    AttributeId::TextAnchor,
    AttributeId::Class,
    AttributeId::Style,
    AttributeId::FontFamily,
    AttributeId::FontSize,
    AttributeId::FontSizeAdjust,
    AttributeId::FontStretch,
    AttributeId::FontStyle,
    AttributeId::FontVariant,
    AttributeId::FontWeight,
    AttributeId::Transform,
];

const GROUP: &[AttributeId] = &[
    AttributeId::Transform,
];

const SHAPE_SHORTHANDS: &[AttributeId] = &[
    AttributeId::Fill,
    AttributeId::Stroke,
    AttributeId::StrokeWidth,
];

const TEXT_SHORTHANDS: &[AttributeId] = &[
    AttributeId::Fill,
    AttributeId::FontFamily,
    AttributeId::FontSize,
    AttributeId::FontStyle,
    AttributeId::FontWeight,
];

impl ElementType {
    /// Resolves a tag name. Unknown names are `Unsupported`.
    pub fn from_tag_name(name: &str) -> ElementType {
        match name {
            "svg" => ElementType::Svg,
            "desc" => ElementType::Desc,
            "text" => ElementType::Text,
            "g" => ElementType::Group,
            "rect" => ElementType::Rect,
            "circle" => ElementType::Circle,
            "ellipse" => ElementType::Ellipse,
            "line" => ElementType::Line,
            "path" => ElementType::Path,
            "polygon" => ElementType::Polygon,
            "image" => ElementType::Image,
            "polyline" => ElementType::Polyline,
            _ => ElementType::Unsupported,
        }
    }

    /// Returns the tag name. `Unsupported` has none.
    pub fn tag_name(&self) -> Option<&'static str> {
        let name = match *self {
            ElementType::Unsupported => return None,
            ElementType::Svg => "svg",
            ElementType::Desc => "desc",
            ElementType::Text => "text",
            ElementType::Group => "g",
            ElementType::Rect => "rect",
            ElementType::Circle => "circle",
            ElementType::Ellipse => "ellipse",
            ElementType::Line => "line",
            ElementType::Path => "path",
            ElementType::Polygon => "polygon",
            ElementType::Image => "image",
            ElementType::Polyline => "polyline",
        };

        Some(name)
    }

    /// Returns `true` for elements which may carry a text value.
    pub fn has_value(&self) -> bool {
        match *self {
            ElementType::Text | ElementType::Desc | ElementType::Group => true,
            _ => false,
        }
    }

    /// Returns `true` for rect, circle, ellipse, line, path, polygon and polyline.
    pub fn is_basic_shape(&self) -> bool {
        match *self {
              ElementType::Rect
            | ElementType::Circle
            | ElementType::Ellipse
            | ElementType::Line
            | ElementType::Path
            | ElementType::Polygon
            | ElementType::Polyline => true,
            _ => false,
        }
    }

    /// Returns the attribute slots of the element, `id` first.
    pub fn schema(&self) -> Vec<AttributeId> {
        let mut list = vec![AttributeId::Id];

        let specific: &[AttributeId] = match *self {
            ElementType::Svg => SVG,
            ElementType::Rect => RECT,
            ElementType::Circle => CIRCLE,
            ElementType::Ellipse => ELLIPSE,
            ElementType::Line => LINE,
            ElementType::Path => PATH,
            ElementType::Polygon | ElementType::Polyline => POLY,
            ElementType::Image => IMAGE,
            ElementType::Text => TEXT,
            ElementType::Group => GROUP,
            ElementType::Desc | ElementType::Unsupported => &[],
        };

        list.extend_from_slice(specific);

        if self.is_basic_shape() {
            list.extend_from_slice(BASIC_SHAPE);
        }

        list
    }

    /// Returns inline style properties which are copied into attributes.
    pub fn style_shorthands(&self) -> &'static [AttributeId] {
        if self.is_basic_shape() {
            SHAPE_SHORTHANDS
        } else if *self == ElementType::Text {
            TEXT_SHORTHANDS
        } else {
            &[]
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag_name().unwrap_or("unsupported"))
    }
}
