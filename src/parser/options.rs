// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::DEFAULT_DPI;

/// Options that defines SVG parsing.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Keep attributes which are not a part of the element schema.
    ///
    /// Such attributes are stored as strings and written back as is.
    /// Otherwise they are dropped.
    ///
    /// Default: enabled
    pub parse_unknown_attributes: bool,

    /// Collect the content of `style` elements as author style sheets.
    ///
    /// Default: enabled
    pub parse_style_sheets: bool,

    /// Resolution used to convert physical units into user units.
    ///
    /// Default: 96
    pub dpi: f64,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            parse_unknown_attributes: true,
            parse_style_sheets: true,
            dpi: DEFAULT_DPI,
        }
    }
}
