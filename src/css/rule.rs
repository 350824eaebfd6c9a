// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::{
    CharsetRule,
    MediaList,
    Origin,
    Selector,
    StyleDeclaration,
};

/// A rule index inside a `StyleSheet`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RuleId(pub(crate) usize);

/// A rule owner.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RuleParent {
    /// A top-level rule.
    StyleSheet,
    /// A rule nested inside an `@media` block.
    Rule(RuleId),
}

/// A rule type.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RuleType {
    Charset,
    Style,
    Media,
    Unknown,
}

/// A style rule: selectors and a declaration block.
#[derive(Clone, PartialEq, Debug)]
pub struct StyleRule {
    /// Selectors, in the source order.
    pub selectors: Vec<Selector>,
    /// Declarations.
    pub declaration: StyleDeclaration,
}

impl StyleRule {
    /// Returns the selector list text.
    pub fn selector_text(&self) -> String {
        let list: Vec<_> = self.selectors.iter().map(|s| s.text()).collect();
        list.join(", ")
    }
}

/// An `@media` rule.
#[derive(Clone, PartialEq, Debug)]
pub struct MediaRule {
    /// Media types.
    pub media: MediaList,
    /// Nested rules.
    pub rules: Vec<RuleId>,
}

/// A rule data.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum RuleKind {
    Charset(CharsetRule),
    Style(StyleRule),
    Media(MediaRule),
    /// An unsupported at-rule. Contains its text.
    Unknown(String),
}

/// A CSS rule.
#[derive(Clone, PartialEq, Debug)]
pub struct Rule {
    /// Rule owner.
    pub parent: RuleParent,
    /// Origin of the style sheet which contains the rule.
    pub origin: Origin,
    /// Rule data.
    pub kind: RuleKind,
    pub(crate) read_only: bool,
}

impl Rule {
    /// Returns the rule type.
    pub fn rule_type(&self) -> RuleType {
        match self.kind {
            RuleKind::Charset(_) => RuleType::Charset,
            RuleKind::Style(_) => RuleType::Style,
            RuleKind::Media(_) => RuleType::Media,
            RuleKind::Unknown(_) => RuleType::Unknown,
        }
    }

    /// Returns `true` if the rule can't be modified.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns the style rule data.
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self.kind {
            RuleKind::Style(ref rule) => Some(rule),
            _ => None,
        }
    }

    /// Returns the charset rule data.
    pub fn as_charset(&self) -> Option<&CharsetRule> {
        match self.kind {
            RuleKind::Charset(ref rule) => Some(rule),
            _ => None,
        }
    }

    /// Returns the media rule data.
    pub fn as_media(&self) -> Option<&MediaRule> {
        match self.kind {
            RuleKind::Media(ref rule) => Some(rule),
            _ => None,
        }
    }
}
