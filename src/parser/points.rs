// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// A receiver of points found by [`parse_points`].
///
/// [`parse_points`]: fn.parse_points.html
pub trait PointsHandler {
    /// Called once before any point.
    fn start_points(&mut self);
    /// Called for every complete coordinate pair.
    fn point(&mut self, x: f64, y: f64);
    /// Called once after the last point, only on success.
    fn end_points(&mut self);
}

/// Point list parsing errors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PointsError {
    /// A token at the given position is not a number.
    InvalidNumber(usize),
    /// A comma at the given position has no number before or after it.
    UnexpectedComma(usize),
    /// The list has an x coordinate without a matching y.
    OddCount,
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PointsError::InvalidNumber(pos) => {
                write!(f, "invalid number at position {}", pos)
            }
            PointsError::UnexpectedComma(pos) => {
                write!(f, "unexpected comma at position {}", pos)
            }
            PointsError::OddCount => {
                write!(f, "odd number of coordinates")
            }
        }
    }
}

impl error::Error for PointsError {}

/// Parses a whitespace and/or comma separated list of coordinates.
///
/// Numbers are lexed by `svgtypes`. A comma must sit between two numbers,
/// so a leading, trailing or doubled comma is an error.
///
/// The handler receives points as soon as they are complete, so on error
/// it may have seen a part of the list. It's up to the handler
/// to drop such data.
pub fn parse_points<H: PointsHandler>(text: &str, handler: &mut H) -> Result<(), PointsError> {
    handler.start_points();

    let offset = text.len() - text.trim_start().len();
    let text = text.trim();

    if text.ends_with(',') {
        return Err(PointsError::UnexpectedComma(offset + text.len() - 1));
    }

    let mut x: Option<f64> = None;
    for n in svgtypes::NumberListParser::from(text) {
        let n = n.map_err(|e| number_error(text, offset, e))?;
        match x.take() {
            Some(x) => handler.point(x, n),
            None => x = Some(n),
        }
    }

    if x.is_some() {
        return Err(PointsError::OddCount);
    }

    handler.end_points();
    Ok(())
}

// Converts a 1-based char position reported by `svgtypes` into a byte offset
// of the original text.
fn number_error(text: &str, offset: usize, e: svgtypes::Error) -> PointsError {
    let pos = match e {
        svgtypes::Error::InvalidNumber(pos) => {
            text.char_indices().nth(pos.saturating_sub(1)).map_or(text.len(), |(i, _)| i)
        }
        _ => text.len(),
    };

    if text[pos..].starts_with(',') {
        PointsError::UnexpectedComma(offset + pos)
    } else {
        PointsError::InvalidNumber(offset + pos)
    }
}

/// Representation of the `points` attribute data.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Points(Vec<(f64, f64)>);

impl Points {
    /// Constructs a new points container.
    pub fn new() -> Self {
        Points(Vec::new())
    }

    /// Replaces the content with points parsed from the text.
    ///
    /// The list is left empty when the text is malformed.
    pub fn load(&mut self, text: &str) -> Result<(), PointsError> {
        let res = parse_points(text, self);
        if res.is_err() {
            self.0.clear();
        }

        res
    }

    /// Parses points, logging and dropping a malformed list.
    pub fn parse_lossy(text: &str) -> Points {
        let mut points = Points::new();
        if let Err(e) = points.load(text) {
            warn!("Failed to parse points '{}' cause {}.", text, e);
        }

        points
    }
}

impl PointsHandler for Points {
    fn start_points(&mut self) {
        self.0.clear();
    }

    fn point(&mut self, x: f64, y: f64) {
        self.0.push((x, y));
    }

    fn end_points(&mut self) {}
}

impl FromStr for Points {
    type Err = PointsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut points = Points::new();
        points.load(text)?;
        Ok(points)
    }
}

impl From<Vec<(f64, f64)>> for Points {
    fn from(v: Vec<(f64, f64)>) -> Self {
        Points(v)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &(x, y)) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{},{}", x, y)?;
        }

        Ok(())
    }
}

impl Deref for Points {
    type Target = Vec<(f64, f64)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Points {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    macro_rules! test_points {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                let points = Points::from_str($text).unwrap();
                assert_eq!(*points, $result);
            }
        )
    }

    test_points!(parse_1, "10 20 30 40", vec![(10.0, 20.0), (30.0, 40.0)]);
    test_points!(parse_2, "10,20 30,40", vec![(10.0, 20.0), (30.0, 40.0)]);
    test_points!(parse_3, " 10 , 20 ,30, 40 ", vec![(10.0, 20.0), (30.0, 40.0)]);
    test_points!(parse_4, "1.5-2.5", vec![(1.5, -2.5)]);
    test_points!(parse_5, "1e1,.5", vec![(10.0, 0.5)]);
    test_points!(parse_6, "", Vec::<(f64, f64)>::new());
    test_points!(parse_7, "\n\t", Vec::<(f64, f64)>::new());

    macro_rules! test_points_err {
        ($name:ident, $text:expr, $err:expr) => (
            #[test]
            fn $name() {
                assert_eq!(Points::from_str($text).unwrap_err(), $err);
            }
        )
    }

    test_points_err!(parse_err_1, "10,20 30", PointsError::OddCount);
    test_points_err!(parse_err_2, "10,,20", PointsError::UnexpectedComma(3));
    test_points_err!(parse_err_3, ",10 20", PointsError::UnexpectedComma(0));
    test_points_err!(parse_err_4, "10 20,", PointsError::UnexpectedComma(5));
    test_points_err!(parse_err_5, "10 x", PointsError::InvalidNumber(3));
    test_points_err!(parse_err_6, "  10 20 , ", PointsError::UnexpectedComma(8));
    test_points_err!(parse_err_7, "10 NaN", PointsError::InvalidNumber(3));
    test_points_err!(parse_err_8, " 1 2,, 3 4", PointsError::UnexpectedComma(5));

    #[test]
    fn failed_load_clears_list() {
        let mut points = Points::from(vec![(1.0, 2.0)]);
        assert!(points.load("10,20 30,40 50").is_err());
        assert!(points.is_empty());
    }

    #[test]
    fn handler_sees_partial_data() {
        struct Counter(usize, bool);

        impl PointsHandler for Counter {
            fn start_points(&mut self) {}
            fn point(&mut self, _: f64, _: f64) { self.0 += 1; }
            fn end_points(&mut self) { self.1 = true; }
        }

        let mut c = Counter(0, false);
        assert!(parse_points("1 2 3 4 5", &mut c).is_err());
        assert_eq!(c.0, 2);
        assert_eq!(c.1, false);
    }

    #[test]
    fn write() {
        let points = Points::from(vec![(10.0, 20.5), (-3.0, 4.0)]);
        assert_eq!(points.to_string(), "10,20.5 -3,4");
    }
}
