// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::CssError;
use super::{
    CharsetRule,
    MediaList,
    MediaRule,
    Origin,
    Property,
    ReplacedStrings,
    Rule,
    RuleId,
    RuleKind,
    RuleParent,
    Selector,
    StyleDeclaration,
    StyleRule,
};

/// A parsed CSS style sheet.
///
/// Rules are stored in an arena and addressed by `RuleId`.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    origin: Origin,
    read_only: bool,
    rules: Vec<Rule>,
    top_level: Vec<RuleId>,
}

impl StyleSheet {
    /// Parses a modifiable style sheet.
    pub fn parse(text: &str, origin: Origin) -> StyleSheet {
        StyleSheet::parse_with(text, origin, false)
    }

    /// Parses a style sheet, optionally read-only.
    pub fn parse_with(text: &str, origin: Origin, read_only: bool) -> StyleSheet {
        let mut strings = ReplacedStrings::new();
        let protected = strings.protect(text);
        let mut input = protected.trim_start();

        let mut parser = RuleParser {
            strings: &strings,
            origin,
            read_only,
            rules: Vec::new(),
        };

        let mut top_level = Vec::new();

        if let Some(mut charset) = CharsetRule::parse(&mut input, &strings) {
            charset.set_read_only(read_only);
            top_level.push(parser.push(RuleParent::StyleSheet, RuleKind::Charset(charset)));
        }

        top_level.extend(parser.parse_rules(input, RuleParent::StyleSheet));

        StyleSheet {
            origin,
            read_only,
            rules: parser.rules,
            top_level,
        }
    }

    /// Returns the style sheet origin.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns `true` if the style sheet can't be modified.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns top-level rules.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.top_level.iter().map(move |id| (*id, &self.rules[id.0]))
    }

    /// Returns the total number of rules, including nested ones.
    pub fn rules_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns a rule by ID.
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.0)
    }

    /// Returns the `@charset` rule, if any.
    pub fn charset(&self) -> Option<&CharsetRule> {
        self.top_level.first()
            .and_then(|id| self.rules.get(id.0))
            .and_then(|r| r.as_charset())
    }

    /// Sets the encoding of a `@charset` rule.
    pub fn set_charset_encoding(&mut self, rule: RuleId, encoding: &str) -> Result<(), CssError> {
        match self.rules.get_mut(rule.0).map(|r| &mut r.kind) {
            Some(RuleKind::Charset(charset)) => charset.set_encoding(encoding),
            _ => Err(CssError::InvalidRule),
        }
    }

    /// Sets a property of a style rule.
    pub fn set_property(
        &mut self,
        rule: RuleId,
        name: &str,
        value: &str,
        important: bool,
    ) -> Result<(), CssError> {
        let decl = self.declaration_mut(rule)?;
        decl.set_property(name, value, important);
        Ok(())
    }

    /// Removes a property from a style rule.
    pub fn remove_property(&mut self, rule: RuleId, name: &str) -> Result<Option<Property>, CssError> {
        let decl = self.declaration_mut(rule)?;
        Ok(decl.remove_property(name))
    }

    fn declaration_mut(&mut self, rule: RuleId) -> Result<&mut StyleDeclaration, CssError> {
        let rule = self.rules.get_mut(rule.0).ok_or(CssError::InvalidRule)?;
        if rule.read_only {
            return Err(CssError::NoModificationAllowed);
        }

        match rule.kind {
            RuleKind::Style(ref mut style) => Ok(&mut style.declaration),
            _ => Err(CssError::InvalidRule),
        }
    }

    /// Returns style rules which apply to a medium, in the source order.
    pub fn style_rules<'a>(&'a self, medium: &'a str) -> Vec<&'a StyleRule> {
        let mut list = Vec::new();
        self.collect_style_rules(&self.top_level, medium, &mut list);
        list
    }

    fn collect_style_rules<'a>(&'a self, ids: &[RuleId], medium: &str, list: &mut Vec<&'a StyleRule>) {
        for id in ids {
            match self.rules[id.0].kind {
                RuleKind::Style(ref rule) => list.push(rule),
                RuleKind::Media(ref media) => {
                    if media.media.matches(medium) {
                        self.collect_style_rules(&media.rules, medium, list);
                    }
                }
                _ => {}
            }
        }
    }
}

struct RuleParser<'a> {
    strings: &'a ReplacedStrings,
    origin: Origin,
    read_only: bool,
    rules: Vec<Rule>,
}

impl<'a> RuleParser<'a> {
    fn push(&mut self, parent: RuleParent, kind: RuleKind) -> RuleId {
        let id = RuleId(self.rules.len());
        self.rules.push(Rule {
            parent,
            origin: self.origin,
            kind,
            read_only: self.read_only,
        });
        id
    }

    fn parse_rules(&mut self, text: &str, parent: RuleParent) -> Vec<RuleId> {
        let mut ids = Vec::new();
        let mut text = text.trim_start();

        while !text.is_empty() {
            let rest = if text.starts_with('@') {
                self.parse_at_rule(text, parent, &mut ids)
            } else {
                self.parse_style_rule(text, parent, &mut ids)
            };

            text = match rest {
                Some(rest) => rest.trim_start(),
                None => break,
            };
        }

        ids
    }

    fn parse_at_rule<'t>(
        &mut self,
        text: &'t str,
        parent: RuleParent,
        ids: &mut Vec<RuleId>,
    ) -> Option<&'t str> {
        let name_len = text[1..]
            .find(|c: char| !(c.is_alphanumeric() || c == '-'))
            .map(|n| n + 1)
            .unwrap_or_else(|| text.len());
        let name = text[1..name_len].to_ascii_lowercase();

        let block = text.find('{');
        let semicolon = text.find(';');

        let is_block = match (block, semicolon) {
            (Some(b), Some(s)) => b < s,
            (Some(_), None) => true,
            _ => false,
        };

        if name == "media" && is_block {
            let start = block?;
            let end = find_block_end(text, start)?;

            let media = MediaList::parse(&text[name_len..start]);
            let id = self.push(parent, RuleKind::Media(MediaRule {
                media,
                rules: Vec::new(),
            }));
            ids.push(id);

            let nested = self.parse_rules(&text[start + 1..end], RuleParent::Rule(id));
            if let RuleKind::Media(ref mut media) = self.rules[id.0].kind {
                media.rules = nested;
            }

            return Some(&text[end + 1..]);
        }

        let end = if is_block {
            find_block_end(text, block?)
        } else {
            semicolon
        };

        let end = match end {
            Some(end) => end,
            None => {
                warn!("Unterminated '@{}' rule.", name);
                return None;
            }
        };

        warn!("Unsupported CSS at-rule '@{}'. Skipped.", name);
        let rule_text = self.strings.restore(&text[..end + 1]);
        ids.push(self.push(parent, RuleKind::Unknown(rule_text)));

        Some(&text[end + 1..])
    }

    fn parse_style_rule<'t>(
        &mut self,
        text: &'t str,
        parent: RuleParent,
        ids: &mut Vec<RuleId>,
    ) -> Option<&'t str> {
        let start = match text.find('{') {
            Some(start) => start,
            None => {
                warn!("Invalid CSS rule '{}'.", self.strings.restore(text.trim()));
                return None;
            }
        };

        let end = match find_block_end(text, start) {
            Some(end) => end,
            None => {
                warn!("Unterminated CSS rule.");
                return None;
            }
        };

        let selector_text = self.strings.restore(&text[..start]);

        let mut selectors = Vec::new();
        for part in selector_text.split(',') {
            match Selector::parse(part) {
                Some(selector) => selectors.push(selector),
                None => {
                    warn!("Unsupported selector '{}'. The rule is skipped.", part.trim());
                    return Some(&text[end + 1..]);
                }
            }
        }

        let declaration = StyleDeclaration::parse(&text[start + 1..end], self.strings);
        ids.push(self.push(parent, RuleKind::Style(StyleRule {
            selectors,
            declaration,
        })));

        Some(&text[end + 1..])
    }
}

// Returns the position of `}` that closes the block opened at `start`.
fn find_block_end(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in text[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }

    None
}
