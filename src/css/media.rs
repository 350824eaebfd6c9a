// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// A list of media types of an `@media` rule.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct MediaList(Vec<String>);

impl MediaList {
    /// Parses a comma-separated list. Names are lowercased.
    pub fn parse(text: &str) -> MediaList {
        let list = text.split(',')
            .map(|m| m.trim().to_ascii_lowercase())
            .filter(|m| !m.is_empty())
            .collect();

        MediaList(list)
    }

    /// Checks that the list applies to a medium.
    ///
    /// An empty list and `all` match anything.
    pub fn matches(&self, medium: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|m| m == "all" || m.eq_ignore_ascii_case(medium))
    }

    /// Returns the number of media types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MediaList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
