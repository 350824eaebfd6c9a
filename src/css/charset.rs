// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::OnceLock;

use regex::Regex;

use crate::CssError;
use super::ReplacedStrings;

fn charset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^@charset\s"(?<enc>[^"]+)";"#).unwrap())
}

/// An `@charset` rule.
#[derive(Clone, PartialEq, Debug)]
pub struct CharsetRule {
    encoding: String,
    read_only: bool,
}

impl CharsetRule {
    /// Parses an `@charset` rule at the start of `text`.
    ///
    /// On success, the rule is cut from `text`. Otherwise `text` is left untouched.
    pub fn parse(text: &mut &str, strings: &ReplacedStrings) -> Option<CharsetRule> {
        let input: &str = *text;

        let (len, encoding) = {
            let caps = charset_regex().captures(input)?;
            let enc = caps.name("enc")?;
            (caps.get(0)?.end(), strings.restore(enc.as_str()))
        };

        *text = &input[len..];

        Some(CharsetRule {
            encoding,
            read_only: false,
        })
    }

    /// Returns the encoding name.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Sets the encoding name.
    pub fn set_encoding(&mut self, encoding: &str) -> Result<(), CssError> {
        if self.read_only {
            return Err(CssError::NoModificationAllowed);
        }

        self.encoding = encoding.to_string();
        Ok(())
    }

    /// Returns `true` if the rule can't be modified.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub(crate) fn set_read_only(&mut self, flag: bool) {
        self.read_only = flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_consume() {
        let mut strings = ReplacedStrings::new();
        let css = strings.protect("@charset \"UTF-8\";rect { fill: red }");
        let mut text = css.as_str();

        let rule = CharsetRule::parse(&mut text, &strings).unwrap();
        assert_eq!(rule.encoding(), "UTF-8");
        assert_eq!(text, "rect { fill: red }");
    }

    #[test]
    fn no_match() {
        let strings = ReplacedStrings::new();
        let mut text = "rect { fill: red }";
        assert!(CharsetRule::parse(&mut text, &strings).is_none());
        assert_eq!(text, "rect { fill: red }");

        // Must be at the very start.
        let mut text = " @charset \"UTF-8\";";
        assert!(CharsetRule::parse(&mut text, &strings).is_none());
        assert_eq!(text, " @charset \"UTF-8\";");
    }

    #[test]
    fn read_only() {
        let strings = ReplacedStrings::new();
        let mut text = "@charset \"latin1\";";
        let mut rule = CharsetRule::parse(&mut text, &strings).unwrap();
        assert!(rule.set_encoding("UTF-8").is_ok());

        rule.set_read_only(true);
        assert_eq!(rule.set_encoding("KOI8-R"), Err(CssError::NoModificationAllowed));
        assert_eq!(rule.encoding(), "UTF-8");
    }
}
