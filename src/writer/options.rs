// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// XML element indention.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Indent {
    /// No indention.
    None,
    /// Indent with spaces. Prefer range 0..4.
    Spaces(u8),
    /// Indent with tabs.
    Tabs,
}

/// A line break sequence.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LineBreak {
    /// `\r\n`
    CrLf,
    /// `\n`
    Lf,
}

impl LineBreak {
    /// Returns the line break bytes.
    pub fn as_bytes(&self) -> &'static [u8] {
        match *self {
            LineBreak::CrLf => b"\r\n",
            LineBreak::Lf => b"\n",
        }
    }
}

/// Options that defines SVG writing.
#[derive(Clone, Copy, Debug)]
pub struct WriteOptions {
    /// Set XML elements indention.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <svg>
    /// <rect fill="red" />
    /// </svg>
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <svg>
    ///     <rect fill="red" />
    /// </svg>
    /// ```
    ///
    /// Default: `Indent::None`
    pub indent: Indent,

    /// Set the line break written after tags, the declaration and the DOCTYPE.
    ///
    /// Default: `LineBreak::CrLf`
    pub line_break: LineBreak,

    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// Before:
    ///
    /// ```text
    /// <rect fill="red" />
    /// ```
    ///
    /// After:
    ///
    /// ```text
    /// <rect fill='red' />
    /// ```
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Write attributes ordered by group instead of the insertion order.
    ///
    /// Default: disabled
    pub sort_attributes: bool,
}

impl Default for WriteOptions {
    fn default() -> WriteOptions {
        WriteOptions {
            indent: Indent::None,
            line_break: LineBreak::CrLf,
            use_single_quote: false,
            sort_attributes: false,
        }
    }
}
