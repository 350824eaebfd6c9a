// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::str::FromStr;

/// An affine transform parsed from a `transform` list.
///
/// All list entries are folded into a single matrix.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    /// Constructs a new transform.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform { a, b, c, d, e, f }
    }

    /// Returns `true` for the identity matrix.
    pub fn is_default(&self) -> bool {
        *self == Transform::default()
    }

    /// Maps a point through the matrix.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y + self.e, self.b * x + self.d * y + self.f)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

impl FromStr for Transform {
    type Err = svgtypes::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let ts = svgtypes::Transform::from_str(text)?;
        Ok(Transform::new(ts.a, ts.b, ts.c, ts.d, ts.e, ts.f))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "matrix({} {} {} {} {} {})", self.a, self.b, self.c, self.d, self.e, self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_ts {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(Transform::from_str($text).unwrap(), $result);
            }
        )
    }

    test_ts!(parse_1, "translate(10 20)", Transform::new(1.0, 0.0, 0.0, 1.0, 10.0, 20.0));
    test_ts!(parse_2, "scale(2)", Transform::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0));
    test_ts!(parse_3, "matrix(1 0 0 1 5 6)", Transform::new(1.0, 0.0, 0.0, 1.0, 5.0, 6.0));
    test_ts!(parse_4, "translate(10) scale(2)", Transform::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));

    #[test]
    fn apply() {
        let ts = Transform::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0);
        assert_eq!(ts.apply(1.0, 1.0), (12.0, 2.0));
        assert!(Transform::default().is_default());
    }

    #[test]
    fn write() {
        assert_eq!(Transform::default().to_string(), "matrix(1 0 0 1 0 0)");
    }
}
