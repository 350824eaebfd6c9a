// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::str::FromStr;

/// An RGB color, which remembers the name it was created from.
///
/// Paint values which are not colors, like `none`, `currentColor` or
/// `url(#id)`, are kept by name with black components, so they are
/// written back unchanged.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    /// Red component.
    pub red: u8,
    /// Green component.
    pub green: u8,
    /// Blue component.
    pub blue: u8,
    name: Option<String>,
}

impl Color {
    /// Constructs a new unnamed color.
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue, name: None }
    }

    /// Constructs a color from a name, which is written as is.
    ///
    /// Components are taken from the name when it's a valid color,
    /// otherwise they are black.
    pub fn from_name(name: &str) -> Color {
        let (red, green, blue) = match svgtypes::Color::from_str(name.trim()) {
            Ok(c) => (c.red, c.green, c.blue),
            Err(_) => (0, 0, 0),
        };

        Color { red, green, blue, name: Some(name.to_string()) }
    }

    /// Returns the color name if it was created from a named color.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|s| s.as_str())
    }

    /// Returns `true` if the color was created from a named color.
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Returns the `#RRGGBB` notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = svgtypes::Error;

    /// Parses `#RRGGBB`, `#RGB`, `rgb(r, g, b)` or a named color.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let c = svgtypes::Color::from_str(text)?;

        let name = if text.bytes().all(|c| c.is_ascii_alphabetic()) {
            Some(text.to_string())
        } else {
            None
        };

        Ok(Color { red: c.red, green: c.green, blue: c.blue, name })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name {
            Some(ref name) => write!(f, "{}", name),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    macro_rules! test_color {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(Color::from_str($text).unwrap().to_string(), $result);
            }
        )
    }

    test_color!(parse_1, "#ff0000", "#FF0000");
    test_color!(parse_2, "#f00", "#FF0000");
    test_color!(parse_3, "rgb(10, 20, 30)", "#0A141E");
    test_color!(parse_4, "red", "red");
    test_color!(parse_5, " blue ", "blue");

    #[test]
    fn parse_named() {
        let c = Color::from_str("red").unwrap();
        assert_eq!((c.red, c.green, c.blue), (255, 0, 0));
        assert!(c.is_named());
    }

    #[test]
    fn parse_invalid() {
        assert!(Color::from_str("#12").is_err());
        assert!(Color::from_str("none").is_err());
        assert!(Color::from_str("qwe").is_err());
    }

    #[test]
    fn from_name() {
        let c = Color::from_name("url(#g)");
        assert_eq!(c.to_string(), "url(#g)");
        assert_eq!((c.red, c.green, c.blue), (0, 0, 0));

        let c = Color::from_name("blue");
        assert_eq!((c.red, c.green, c.blue), (0, 0, 255));
        assert_eq!(c.name(), Some("blue"));
    }
}
