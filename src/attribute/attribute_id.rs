// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// An attribute group, used for display ordering.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AttributeGroup {
    /// Attributes outside of the registry.
    Unknown,
    Svg,
    Core,
    ElementSpecific,
    Style,
    Paint,
    Graphics,
    Opacity,
    Font,
    XLink,
}

impl AttributeGroup {
    /// Returns a group name as shown by an editor.
    pub fn name(&self) -> &'static str {
        match *self {
            AttributeGroup::Unknown => "unknown",
            AttributeGroup::Svg => "svg",
            AttributeGroup::Core => "core",
            AttributeGroup::ElementSpecific => "specific",
            AttributeGroup::Style => "style",
            AttributeGroup::Paint => "paint",
            AttributeGroup::Graphics => "graphics",
            AttributeGroup::Opacity => "opacity",
            AttributeGroup::Font => "font",
            AttributeGroup::XLink => "xlink",
        }
    }
}

/// A kind of value an attribute holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttributeDataType {
    /// Any text.
    String,
    /// An index into the list of legal values.
    Enum,
    /// A color.
    Color,
    /// A link.
    HRef,
}

/// A static description of a registered attribute.
#[derive(Debug)]
pub struct AttributeInfo {
    /// Attribute identifier.
    pub id: AttributeId,
    /// Attribute name as written in XML.
    pub name: &'static str,
    /// Attribute group.
    pub group: AttributeGroup,
    /// Value type.
    pub data_type: AttributeDataType,
    /// Legal values of an enum attribute. Index `n` is stored as `n + 1`.
    pub values: &'static [&'static str],
}

macro_rules! define_attributes {
    ($($id:ident => $name:expr, $group:ident, $data_type:ident, [$($value:expr),*];)+) => (
        /// List of all registered attributes.
        #[allow(missing_docs)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum AttributeId {
            $($id,)+
        }

        static ATTRIBUTES: &[AttributeInfo] = &[
            $(AttributeInfo {
                id: AttributeId::$id,
                name: $name,
                group: AttributeGroup::$group,
                data_type: AttributeDataType::$data_type,
                values: &[$($value),*],
            },)+
        ];
    )
}

define_attributes! {
    XmlNs => "xmlns", Svg, String, [];
    Version => "version", Svg, String, [];

    Id => "id", Core, String, [];
    XmlBase => "xml:base", Core, String, [];
    XmlLang => "xml:lang", Core, String, [];
    XmlSpace => "xml:space", Core, Enum, ["default", "preserve"];

    ShapeName => "ShapeName", ElementSpecific, String, [];
    X => "x", ElementSpecific, String, [];
    Y => "y", ElementSpecific, String, [];
    Cx => "cx", ElementSpecific, String, [];
    Cy => "cy", ElementSpecific, String, [];
    Width => "width", ElementSpecific, String, [];
    Height => "height", ElementSpecific, String, [];
    R => "r", ElementSpecific, String, [];
    Rx => "rx", ElementSpecific, String, [];
    Ry => "ry", ElementSpecific, String, [];
    Dx => "dx", ElementSpecific, String, [];
    Dy => "dy", ElementSpecific, String, [];
    X1 => "x1", ElementSpecific, String, [];
    Y1 => "y1", ElementSpecific, String, [];
    X2 => "x2", ElementSpecific, String, [];
    Y2 => "y2", ElementSpecific, String, [];
    Rotate => "rotate", ElementSpecific, String, [];
    TextLength => "textLength", ElementSpecific, String, [];
    LengthAdjust => "lengthAdjust", ElementSpecific, Enum, ["spacing", "spacingAndGlyphs"];
    PathData => "d", ElementSpecific, String, [];
    PathLength => "pathLength", ElementSpecific, String, [];
    Points => "points", ElementSpecific, String, [];

    Class => "class", Style, String, [];
    Style => "style", Style, String, [];

    Color => "color", Paint, Color, [];
    Fill => "fill", Paint, Color, [];
    FillRule => "fill-rule", Paint, Enum, ["nonzero", "evenodd", "inherit"];
    Stroke => "stroke", Paint, Color, [];
    StrokeWidth => "stroke-width", Paint, String, [];
    StrokeDasharray => "stroke-dasharray", Paint, String, [];
    StrokeDashoffset => "stroke-dashoffset", Paint, String, [];
    StrokeLinecap => "stroke-linecap", Paint, Enum, ["butt", "round", "square", "inherit"];
    StrokeLinejoin => "stroke-linejoin", Paint, Enum, ["miter", "round", "bevel", "inherit"];
    StrokeMiterlimit => "stroke-miterlimit", Paint, String, [];
    ColorInterpolation => "color-interpolation", Paint, Enum,
        ["auto", "sRGB", "linearRGB", "inherit"];
    ColorInterpolationFilters => "color-interpolation-filters", Paint, Enum,
        ["auto", "sRGB", "linearRGB", "inherit"];
    ColorRendering => "color-rendering", Paint, Enum,
        ["auto", "optimizeSpeed", "optimizeQuality", "inherit"];

    Opacity => "opacity", Opacity, String, [];
    FillOpacity => "fill-opacity", Opacity, String, [];
    StrokeOpacity => "stroke-opacity", Opacity, String, [];

    Display => "display", Graphics, Enum,
        ["inline", "block", "list-item", "run-in", "compact", "marker", "table", "inline-table",
         "table-row-group", "table-header-group", "table-footer-group", "table-row",
         "table-column-group", "table-column", "table-cell", "table-caption", "none", "inherit"];
    ImageRendering => "image-rendering", Graphics, Enum,
        ["auto", "optimizeSpeed", "optimizeQuality", "inherit"];
    PointerEvents => "pointer-events", Graphics, Enum,
        ["visiblePainted", "visibleFill", "visibleStroke", "visible", "painted", "fill",
         "stroke", "all", "none", "inherit"];
    ShapeRendering => "shape-rendering", Graphics, Enum,
        ["auto", "optimizeSpeed", "crispEdges", "geometricPrecision", "inherit"];
    TextRendering => "text-rendering", Graphics, Enum,
        ["auto", "optimizeSpeed", "optimizeLegibility", "geometricPrecision", "inherit"];
    Visibility => "visibility", Graphics, Enum, ["visible", "hidden", "collapse", "inherit"];
    Transform => "transform", Graphics, String, [];

    FontFamily => "font-family", Font, String, [];
    FontSize => "font-size", Font, String, [];
    FontSizeAdjust => "font-size-adjust", Font, String, [];
    FontStretch => "font-stretch", Font, Enum,
        ["normal", "wider", "narrower", "ultra-condensed", "extra-condensed", "condensed",
         "semi-condensed", "semi-expanded", "expanded", "extra-expanded", "ultra-expanded",
         "inherit"];
    FontStyle => "font-style", Font, String, [];
    FontVariant => "font-variant", Font, Enum, ["normal", "small-caps", "inherit"];
    FontWeight => "font-weight", Font, String, [];
    TextAnchor => "text-anchor", Font, String, [];

    XlinkType => "xlink:type", XLink, String, [];
    XlinkRole => "xlink:role", XLink, String, [];
    XlinkTitle => "xlink:title", XLink, String, [];
    XlinkShow => "xlink:show", XLink, String, [];
    XlinkActuate => "xlink:actuate", XLink, String, [];
    XlinkHref => "xlink:href", XLink, HRef, [];
    Target => "target", XLink, String, [];
}

fn names() -> &'static HashMap<&'static str, AttributeId> {
    static NAMES: OnceLock<HashMap<&'static str, AttributeId>> = OnceLock::new();
    NAMES.get_or_init(|| {
        ATTRIBUTES.iter().map(|info| (info.name, info.id)).collect()
    })
}

impl AttributeId {
    /// Looks up an attribute by its XML name.
    pub fn from_name(name: &str) -> Option<AttributeId> {
        names().get(name).cloned()
    }

    /// Returns the registry entry.
    #[inline]
    pub fn info(&self) -> &'static AttributeInfo {
        &ATTRIBUTES[*self as usize]
    }

    /// Returns the XML name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Returns the group.
    #[inline]
    pub fn group(&self) -> AttributeGroup {
        self.info().group
    }

    /// Returns the value type.
    #[inline]
    pub fn data_type(&self) -> AttributeDataType {
        self.info().data_type
    }

    /// Returns the legal values of an enum attribute.
    #[inline]
    pub fn values(&self) -> &'static [&'static str] {
        self.info().values
    }

    /// Iterates over the whole registry.
    pub fn all() -> impl Iterator<Item = AttributeId> {
        ATTRIBUTES.iter().map(|info| info.id)
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_indexed_by_id() {
        for (i, info) in ATTRIBUTES.iter().enumerate() {
            assert_eq!(info.id as usize, i);
            assert_eq!(AttributeId::from_name(info.name), Some(info.id));
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(AttributeId::from_name("stroke-width"), Some(AttributeId::StrokeWidth));
        assert_eq!(AttributeId::from_name("xlink:href"), Some(AttributeId::XlinkHref));
        assert_eq!(AttributeId::from_name("unknown"), None);
        assert_eq!(AttributeId::Fill.group(), AttributeGroup::Paint);
        assert_eq!(AttributeId::Fill.data_type(), AttributeDataType::Color);
        assert_eq!(AttributeId::FillRule.values(), &["nonzero", "evenodd", "inherit"]);
        assert!(AttributeId::all().count() > 60);
    }
}
