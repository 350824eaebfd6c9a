// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::OnceLock;

use regex::{Captures, Regex};

// Comments and strings are matched in a single pass, so a comment marker
// inside a string and a quote inside a comment are not special.
fn string_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?s)/\*.*?\*/|"[^"]*"|'[^']*'"#).unwrap())
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?<quote>")?<<<(?<number>[0-9]+)>>>"?"#).unwrap())
}

/// String literals cut out of a CSS text before parsing.
///
/// Quoted strings may contain any character, including `{`, `;` and `,`,
/// so they are replaced with `"<<<N>>>"` placeholders first
/// and restored in the parsed values.
#[derive(Clone, Default, Debug)]
pub struct ReplacedStrings {
    list: Vec<String>,
}

impl ReplacedStrings {
    /// Constructs an empty list.
    pub fn new() -> Self {
        ReplacedStrings::default()
    }

    /// Replaces every quoted string in `text` with a placeholder
    /// and removes comments.
    ///
    /// Literals are stored with their quotes.
    pub fn protect(&mut self, text: &str) -> String {
        let list = &mut self.list;
        string_regex().replace_all(text, |caps: &Captures| {
            if caps[0].starts_with("/*") {
                return String::new();
            }

            list.push(caps[0].to_string());
            format!("\"<<<{}>>>\"", list.len() - 1)
        }).into_owned()
    }

    /// Replaces placeholders with the stored literals.
    ///
    /// A quoted placeholder gets the literal with its quotes,
    /// a bare one gets the literal without them.
    pub fn restore(&self, text: &str) -> String {
        placeholder_regex().replace_all(text, |caps: &Captures| {
            let literal = caps.name("number")
                .and_then(|n| n.as_str().parse::<usize>().ok())
                .and_then(|n| self.list.get(n));

            let literal = match literal {
                Some(s) => s.as_str(),
                None => {
                    warn!("Unknown string placeholder '{}'.", &caps[0]);
                    return String::new();
                }
            };

            if caps.name("quote").is_some() {
                literal.to_string()
            } else {
                literal.trim_matches(|c| c == '\'' || c == '"').to_string()
            }
        }).into_owned()
    }

    /// Returns the number of stored literals.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing was replaced.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
