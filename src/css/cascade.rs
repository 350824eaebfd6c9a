// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice::Iter;

use super::{
    declaration::write_properties,
    Origin,
    Property,
    ReplacedStrings,
    SelectorElement,
    Specificity,
    StyleDeclaration,
    StyleSheet,
};

/// The medium used by `StyleResolver::new`.
pub const DEFAULT_MEDIUM: &str = "screen";

/// A property which won the cascade.
#[derive(Clone, PartialEq, Debug)]
pub struct CollectedProperty {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
    /// `!important` flag.
    pub important: bool,
    /// Origin of the declaration. The inline style is `Origin::Author`.
    pub origin: Origin,
    /// Specificity of the matched selector. Zero for the inline style.
    pub specificity: Specificity,
}

/// The result of the cascade for a single element.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct CollectedStyleDeclaration {
    properties: Vec<CollectedProperty>,
}

impl CollectedStyleDeclaration {
    /// Returns a property value.
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.value.as_str())
    }

    /// Returns `"important"` for an `!important` property and an empty string otherwise.
    pub fn get_property_priority(&self, name: &str) -> &'static str {
        match self.get(name) {
            Some(p) if p.important => "important",
            _ => "",
        }
    }

    /// Returns the origin of a property.
    pub fn get_property_origin(&self, name: &str) -> Option<Origin> {
        self.get(name).map(|p| p.origin)
    }

    /// Returns a property.
    pub fn get(&self, name: &str) -> Option<&CollectedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns an iterator over properties.
    pub fn iter(&self) -> Iter<CollectedProperty> {
        self.properties.iter()
    }

    /// Returns all properties as CSS text.
    pub fn css_text(&self) -> String {
        write_properties(self.properties.iter().map(|p| (p.name.as_str(), p.value.as_str(), p.important)))
    }

    fn insert(&mut self, prop: CollectedProperty) {
        match self.properties.iter().position(|p| p.name == prop.name) {
            Some(idx) => self.properties[idx] = prop,
            None => self.properties.push(prop),
        }
    }
}

struct Match<'a> {
    tier: u8,
    specificity: Specificity,
    order: usize,
    origin: Origin,
    property: &'a Property,
}

// CSS 2.2 §6.4.1: normal declarations by origin, the inline style above author ones,
// then important author, important inline and important user declarations.
fn cascade_tier(origin: Origin, important: bool, inline: bool) -> u8 {
    match (important, origin) {
        (_, Origin::UserAgent) => 0,
        (false, Origin::User) => 1,
        (false, Origin::Author) => if inline { 3 } else { 2 },
        (true, Origin::Author) => if inline { 5 } else { 4 },
        (true, Origin::User) => 6,
    }
}

/// Computes styles of elements from an ordered list of style sheets.
#[derive(Clone, Debug)]
pub struct StyleResolver {
    sheets: Vec<StyleSheet>,
    medium: String,
}

impl Default for StyleResolver {
    fn default() -> Self {
        StyleResolver::new()
    }
}

impl StyleResolver {
    /// Constructs a resolver for the `screen` medium.
    pub fn new() -> Self {
        StyleResolver::with_medium(DEFAULT_MEDIUM)
    }

    /// Constructs a resolver for a medium.
    pub fn with_medium(medium: &str) -> Self {
        StyleResolver {
            sheets: Vec::new(),
            medium: medium.to_string(),
        }
    }

    /// Returns the medium.
    pub fn medium(&self) -> &str {
        &self.medium
    }

    /// Appends a style sheet. Later sheets win on equal precedence.
    pub fn add_style_sheet(&mut self, sheet: StyleSheet) {
        self.sheets.push(sheet);
    }

    /// Returns style sheets.
    pub fn style_sheets(&self) -> &[StyleSheet] {
        &self.sheets
    }

    /// Returns mutable style sheets.
    pub fn style_sheets_mut(&mut self) -> &mut [StyleSheet] {
        &mut self.sheets
    }

    /// Collects declarations which apply to an element and a pseudo-element.
    ///
    /// The inline `style` attribute applies only when `pseudo_element` is `None`.
    pub fn get_computed_style<E: SelectorElement>(
        &self,
        element: &E,
        pseudo_element: Option<&str>,
    ) -> CollectedStyleDeclaration {
        let inline = match pseudo_element {
            None => element.attribute("style").map(|text| parse_inline_style(&text)),
            Some(_) => None,
        };

        let mut matches = Vec::new();
        let mut order = 0;

        for sheet in &self.sheets {
            for rule in sheet.style_rules(&self.medium) {
                order += 1;

                let specificity = rule.selectors.iter()
                    .filter(|s| s.matches(element, pseudo_element))
                    .map(|s| s.specificity())
                    .max();

                let specificity = match specificity {
                    Some(v) => v,
                    None => continue,
                };

                for property in rule.declaration.iter() {
                    matches.push(Match {
                        tier: cascade_tier(sheet.origin(), property.important, false),
                        specificity,
                        order,
                        origin: sheet.origin(),
                        property,
                    });
                }
            }
        }

        if let Some(ref inline) = inline {
            order += 1;
            for property in inline.iter() {
                matches.push(Match {
                    tier: cascade_tier(Origin::Author, property.important, true),
                    specificity: Specificity::default(),
                    order,
                    origin: Origin::Author,
                    property,
                });
            }
        }

        matches.sort_by(|a, b| {
            (a.tier, a.specificity, a.order).cmp(&(b.tier, b.specificity, b.order))
        });

        let mut collected = CollectedStyleDeclaration::default();
        for m in matches {
            collected.insert(CollectedProperty {
                name: m.property.name.clone(),
                value: m.property.value.clone(),
                important: m.property.important,
                origin: m.origin,
                specificity: m.specificity,
            });
        }

        collected
    }
}

fn parse_inline_style(text: &str) -> StyleDeclaration {
    let mut strings = ReplacedStrings::new();
    let text = strings.protect(text);
    StyleDeclaration::parse(&text, &strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Elem {
        name: &'static str,
        attrs: Vec<(&'static str, &'static str)>,
    }

    impl SelectorElement for Elem {
        fn local_name(&self) -> &str {
            self.name
        }

        fn parent_element(&self) -> Option<Self> {
            None
        }

        fn prev_sibling_element(&self) -> Option<Self> {
            None
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.iter().find(|a| a.0 == name).map(|a| a.1.to_string())
        }
    }

    fn rect(style: &'static str) -> Elem {
        let mut attrs = vec![("id", "r1"), ("class", "big")];
        if !style.is_empty() {
            attrs.push(("style", style));
        }

        Elem { name: "rect", attrs }
    }

    fn resolver(sheets: &[(&str, Origin)]) -> StyleResolver {
        let mut resolver = StyleResolver::new();
        for &(text, origin) in sheets {
            resolver.add_style_sheet(StyleSheet::parse(text, origin));
        }

        resolver
    }

    macro_rules! test_cascade {
        ($name:ident, $sheets:expr, $style:expr, $result:expr, $origin:expr) => (
            #[test]
            fn $name() {
                let style = resolver($sheets).get_computed_style(&rect($style), None);
                assert_eq!(style.get_property_value("fill"), Some($result));
                assert_eq!(style.get_property_origin("fill"), Some($origin));
            }
        )
    }

    test_cascade!(origin_order,
        &[("rect { fill: author }", Origin::Author),
          ("rect { fill: user }", Origin::User),
          ("rect { fill: ua }", Origin::UserAgent)],
        "", "author", Origin::Author);

    test_cascade!(specificity_order,
        &[("#r1 { fill: id } .big { fill: class } rect { fill: type }", Origin::Author)],
        "", "id", Origin::Author);

    test_cascade!(source_order,
        &[("rect { fill: first } rect { fill: second }", Origin::Author)],
        "", "second", Origin::Author);

    test_cascade!(important_author,
        &[("rect { fill: author !important } #r1 { fill: id }", Origin::Author)],
        "", "author", Origin::Author);

    test_cascade!(important_user_wins,
        &[("rect { fill: user !important }", Origin::User),
          ("#r1 { fill: author !important }", Origin::Author)],
        "", "user", Origin::User);

    test_cascade!(inline_over_author,
        &[("#r1 { fill: id }", Origin::Author)],
        "fill: inline", "inline", Origin::Author);

    test_cascade!(important_over_inline,
        &[("rect { fill: author !important }", Origin::Author)],
        "fill: inline", "author", Origin::Author);

    test_cascade!(important_inline,
        &[("rect { fill: author !important }", Origin::Author)],
        "fill: inline !important", "inline", Origin::Author);

    test_cascade!(media_screen,
        &[("@media print { rect { fill: print } } @media screen { rect { fill: screen } }",
           Origin::Author)],
        "", "screen", Origin::Author);

    #[test]
    fn pseudo_element_isolation() {
        let resolver = resolver(&[("rect { fill: a } rect::before { stroke: b }", Origin::Author)]);

        let style = resolver.get_computed_style(&rect("opacity: 0.5"), Some("before"));
        assert_eq!(style.len(), 1);
        assert_eq!(style.get_property_value("stroke"), Some("b"));

        let style = resolver.get_computed_style(&rect("opacity: 0.5"), None);
        assert_eq!(style.css_text(), "fill: a; opacity: 0.5;");
    }

    #[test]
    fn no_match() {
        let resolver = resolver(&[("circle { fill: a }", Origin::Author)]);
        let style = resolver.get_computed_style(&rect(""), None);
        assert!(style.is_empty());
        assert_eq!(style.get_property_priority("fill"), "");
    }
}
