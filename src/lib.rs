// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
This library represents SVG data as a tree of typed elements for vector editors,
with a CSS object model and a cascade on top of it.

Here is simple overview of such structure:

- [`Document`]
    - declaration and DOCTYPE
    - root [`Element`]
        - child [`Element`]
            - [`ElementType`]
            - [`Attributes`]
            - internal [`NodeId`]
        - child [`Element`]
        - ...
    - author [`StyleSheet`]s

The [`Document`] owns all [`Element`]s and addresses them by [`NodeId`]s.
Parsing and generating of the SVG data also done through it.

Each [`Element`] has a fixed set of attribute slots defined by its [`ElementType`].
Elements outside of the supported list are kept as `Unsupported` and written back as is.

The [`css`] module contains style sheets, selectors and the [`StyleResolver`],
which computes the cascaded style of an element.

&nbsp;

See modules and structs documentation for details.

[`Attributes`]: struct.Attributes.html
[`Document`]: struct.Document.html
[`Element`]: struct.Element.html
[`ElementType`]: enum.ElementType.html
[`NodeId`]: struct.NodeId.html
[`StyleSheet`]: css/struct.StyleSheet.html
[`StyleResolver`]: css/struct.StyleResolver.html
[`css`]: css/index.html
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use attribute::*;
pub use document::*;
pub use dom::*;
pub use error::{
    CssError,
    ParserError,
};
pub use parser::{
    parse_length,
    parse_points,
    parse_svg,
    try_parse_length,
    LengthUnit,
    ParseOptions,
    PathCommand,
    PathData,
    PathSegment,
    Points,
    PointsError,
    PointsHandler,
    Transform,
    DEFAULT_DPI,
};
pub use shapes::*;
pub use traits::*;
pub use writer::{
    Indent,
    LineBreak,
    WriteOptions,
};

#[macro_use]
mod traits;

mod attribute;
mod document;
mod dom;
mod error;
mod shapes;

pub mod css;
pub mod parser;
pub mod writer;
