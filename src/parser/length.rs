// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Length strings as they appear in geometry attributes.

/// Resolution used when a caller has no better value.
pub const DEFAULT_DPI: f64 = 96.0;

/// A unit suffix recognized by [`parse_length`].
///
/// [`parse_length`]: fn.parse_length.html
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LengthUnit {
    None,
    Pt,
    Px,
    Pc,
    Cm,
    Mm,
    In,
}

impl LengthUnit {
    /// Returns the unit name as written after a number.
    pub fn suffix(&self) -> &'static str {
        match *self {
            LengthUnit::None => "",
            LengthUnit::Pt => "pt",
            LengthUnit::Px => "px",
            LengthUnit::Pc => "pc",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
        }
    }

    /// Resolves a unit suffix. An empty string is `None`.
    pub fn from_suffix(text: &str) -> Option<LengthUnit> {
        let unit = match text {
            "" => LengthUnit::None,
            "pt" => LengthUnit::Pt,
            "px" => LengthUnit::Px,
            "pc" => LengthUnit::Pc,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "in" => LengthUnit::In,
            _ => return None,
        };

        Some(unit)
    }

    /// Returns a unit-to-pixel coefficient.
    ///
    /// Only the metric and inch units depend on the resolution,
    /// everything else is treated as a plain pixel value.
    pub fn coefficient(&self, dpi: f64) -> f64 {
        match *self {
            LengthUnit::Cm => dpi / 2.54,
            LengthUnit::Mm => dpi / 25.4,
            LengthUnit::In => dpi,
            _ => 1.0,
        }
    }

    /// Finds the first unit in the text.
    ///
    /// Units are searched in a fixed order: `pt`, `px`, `pc`, `cm`, `mm`, `in`.
    /// Returns the unit and the byte position of its suffix.
    pub fn find(text: &str) -> Option<(LengthUnit, usize)> {
        const ORDER: &[LengthUnit] = &[
            LengthUnit::Pt,
            LengthUnit::Px,
            LengthUnit::Pc,
            LengthUnit::Cm,
            LengthUnit::Mm,
            LengthUnit::In,
        ];

        ORDER.iter().filter_map(|u| text.find(u.suffix()).map(|pos| (*u, pos))).next()
    }
}

/// Parses a length string into pixels.
///
/// The unit suffix is stripped, then every character which is not
/// an ASCII digit or a dot is removed and the rest is parsed
/// as a locale-independent decimal number.
///
/// Never fails: an unparsable value is logged and resolved to `0`.
///
/// # Examples
///
/// ```
/// use svgedit::parse_length;
///
/// assert_eq!(parse_length("10px", 96.0), 10.0);
/// assert_eq!(parse_length("1in", 96.0), 96.0);
/// assert_eq!(parse_length("abc", 96.0), 0.0);
/// ```
pub fn parse_length(text: &str, dpi: f64) -> f64 {
    match try_parse_length(text, dpi) {
        Some(n) => n,
        None => {
            warn!("Failed to parse a length: '{}'. Fallback to 0.", text);
            0.0
        }
    }
}

/// Like [`parse_length`], but reports a failure instead of defaulting.
///
/// [`parse_length`]: fn.parse_length.html
pub fn try_parse_length(text: &str, dpi: f64) -> Option<f64> {
    let mut coeff = 1.0;
    let mut number = text;

    if let Some((unit, pos)) = LengthUnit::find(text) {
        // A unit at the very start is not a suffix.
        if pos > 0 {
            coeff = unit.coefficient(dpi);
            number = &text[..pos];
        }
    }

    let digits: String = number.trim().chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits.parse::<f64>().ok().map(|n| n * coeff)
}
