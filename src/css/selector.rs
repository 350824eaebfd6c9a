// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use simplecss::{
    AttributeOperator,
    PseudoClass,
    SelectorToken,
    SelectorTokenizer,
};

/// An element as seen by selectors.
pub trait SelectorElement: Clone {
    /// Returns the element tag name.
    fn local_name(&self) -> &str;

    /// Returns the parent element.
    fn parent_element(&self) -> Option<Self>;

    /// Returns the previous sibling element.
    fn prev_sibling_element(&self) -> Option<Self>;

    /// Returns an attribute value.
    fn attribute(&self, name: &str) -> Option<String>;
}

// Exposes a `SelectorElement` to `simplecss` matching.
struct MatchElement<E>(E);

impl<E: SelectorElement> simplecss::Element for MatchElement<E> {
    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(MatchElement)
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.0.prev_sibling_element().map(MatchElement)
    }

    fn has_local_name(&self, name: &str) -> bool {
        self.0.local_name() == name
    }

    fn attribute_matches(&self, local_name: &str, operator: AttributeOperator) -> bool {
        match self.0.attribute(local_name) {
            Some(value) => operator.matches(&value),
            None => false,
        }
    }

    fn pseudo_class_matches(&self, class: PseudoClass) -> bool {
        match class {
            PseudoClass::FirstChild => self.0.prev_sibling_element().is_none(),
            _ => false,
        }
    }
}

/// A selector specificity: ids, classes and types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
pub struct Specificity(pub u16, pub u16, pub u16);

/// A parsed selector.
///
/// Type, universal, id, class and attribute selectors, `:first-child`,
/// descendant, child and adjacent sibling combinators are supported.
/// A pseudo-element may end the selector.
#[derive(Clone, PartialEq, Debug)]
pub struct Selector {
    text: String,
    // The selector without the pseudo-element.
    element_text: String,
    pseudo_element: Option<String>,
    specificity: Specificity,
}

const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

impl Selector {
    /// Parses a single selector.
    ///
    /// Returns `None` for an invalid or unsupported one.
    pub fn parse(text: &str) -> Option<Selector> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (element_text, pseudo_element) = split_pseudo_element(text);
        let element_text = match element_text.trim() {
            "" => "*",
            s => s,
        };

        for token in SelectorTokenizer::from(element_text) {
            match token {
                Ok(SelectorToken::PseudoClass("first-child")) => {}
                Ok(SelectorToken::PseudoClass(name)) | Ok(SelectorToken::LangPseudoClass(name)) => {
                    warn!("Unsupported pseudo-class '{}'.", name);
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Invalid selector '{}' cause {}.", text, e);
                    return None;
                }
            }
        }

        let selector = simplecss::Selector::parse(element_text)?;
        let [ids, classes, types] = selector.specificity();
        let mut specificity = Specificity(ids as u16, classes as u16, types as u16);
        if pseudo_element.is_some() {
            specificity.2 += 1;
        }

        Some(Selector {
            text: text.to_string(),
            element_text: element_text.to_string(),
            pseudo_element,
            specificity,
        })
    }

    /// Returns the selector text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the selector specificity.
    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Returns the pseudo-element name, without colons.
    pub fn pseudo_element(&self) -> Option<&str> {
        self.pseudo_element.as_ref().map(|s| s.as_str())
    }

    /// Checks that the selector matches an element and a pseudo-element.
    ///
    /// `pseudo_element` may be written with or without leading colons.
    pub fn matches<E: SelectorElement>(&self, element: &E, pseudo_element: Option<&str>) -> bool {
        let pseudo = pseudo_element
            .map(|p| p.trim_start_matches(':').to_ascii_lowercase())
            .filter(|p| !p.is_empty());

        if pseudo != self.pseudo_element {
            return false;
        }

        match simplecss::Selector::parse(&self.element_text) {
            Some(selector) => selector.matches(&MatchElement(element.clone())),
            None => false,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Splits `rect::before` into `rect` and `before`.
//
// Only a trailing pseudo-element is cut off. Anything else is left
// for the selector tokenizer to reject.
fn split_pseudo_element(text: &str) -> (&str, Option<String>) {
    let mut depth = 0;
    let mut colon = None;
    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ':' if depth == 0 => colon = Some(i),
            _ => {}
        }
    }

    let idx = match colon {
        Some(idx) => idx,
        None => return (text, None),
    };

    let name = &text[idx + 1..];
    let is_ident = !name.is_empty()
        && name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if !is_ident {
        return (text, None);
    }

    let name = name.to_ascii_lowercase();
    let is_double = text[..idx].ends_with(':');
    if is_double {
        (&text[..idx - 1], Some(name))
    } else if LEGACY_PSEUDO_ELEMENTS.contains(&name.as_str()) {
        (&text[..idx], Some(name))
    } else {
        (text, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Node {
        path: Vec<(&'static str, &'static str, &'static str)>,
        first: bool,
    }

    // A chain of (tag, id, class) from the root to the element.
    impl SelectorElement for Node {
        fn local_name(&self) -> &str {
            self.path.last().map(|n| n.0).unwrap_or("")
        }

        fn parent_element(&self) -> Option<Self> {
            if self.path.len() < 2 {
                return None;
            }

            let mut path = self.path.clone();
            path.pop();
            Some(Node { path, first: true })
        }

        fn prev_sibling_element(&self) -> Option<Self> {
            if self.first { None } else { Some(self.clone()) }
        }

        fn attribute(&self, name: &str) -> Option<String> {
            let n = self.path.last()?;
            let v = match name {
                "id" => n.1,
                "class" => n.2,
                _ => return None,
            };

            if v.is_empty() { None } else { Some(v.to_string()) }
        }
    }

    fn node() -> Node {
        Node {
            path: vec![("svg", "", ""), ("g", "layer", "a"), ("rect", "r1", "big red")],
            first: true,
        }
    }

    macro_rules! test_match {
        ($name:ident, $text:expr, $pseudo:expr, $result:expr) => (
            #[test]
            fn $name() {
                let selector = Selector::parse($text).unwrap();
                assert_eq!(selector.matches(&node(), $pseudo), $result);
            }
        )
    }

    test_match!(match_type, "rect", None, true);
    test_match!(match_universal, "*", None, true);
    test_match!(match_id, "#r1", None, true);
    test_match!(match_class, "rect.red.big", None, true);
    test_match!(match_wrong_class, ".blue", None, false);
    test_match!(match_attr, "[id]", None, true);
    test_match!(match_attr_value, "[class=\"big red\"]", None, true);
    test_match!(match_descendant, "svg rect", None, true);
    test_match!(match_child, "g > rect", None, true);
    test_match!(match_child_fail, "svg > rect", None, false);
    test_match!(match_descendant_chain, "svg #layer .big", None, true);
    test_match!(match_first_child, "rect:first-child", None, true);
    test_match!(pseudo_element_required, "rect::before", None, false);
    test_match!(pseudo_element, "rect::before", Some("before"), true);
    test_match!(pseudo_element_colons, "rect:after", Some("::after"), true);
    test_match!(pseudo_element_only, "rect", Some("before"), false);
    test_match!(pseudo_element_alone, "::before", Some("before"), true);
    test_match!(match_attr_contains, "[class~=red]", None, true);

    macro_rules! test_specificity {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(Selector::parse($text).unwrap().specificity(), $result);
            }
        )
    }

    test_specificity!(spec_type, "rect", Specificity(0, 0, 1));
    test_specificity!(spec_complex, "g#a.b[c] rect:first-child", Specificity(1, 3, 2));
    test_specificity!(spec_pseudo, "text::first-line", Specificity(0, 0, 2));
    test_specificity!(spec_universal, "*", Specificity(0, 0, 0));

    #[test]
    fn invalid() {
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("a:hover").is_none());
        assert!(Selector::parse("a::before b").is_none());
        assert!(Selector::parse("[x").is_none());
        assert!(Selector::parse("a:lang(en)").is_none());
    }

    #[test]
    fn split() {
        assert_eq!(split_pseudo_element("rect::before"), ("rect", Some("before".to_string())));
        assert_eq!(split_pseudo_element("rect:AFTER"), ("rect", Some("after".to_string())));
        assert_eq!(split_pseudo_element("rect:first-child"), ("rect:first-child", None));
        assert_eq!(split_pseudo_element("[a=':b']"), ("[a=':b']", None));
    }
}
