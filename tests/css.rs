// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate pretty_assertions;
extern crate svgedit;

use svgedit::css::{
    Origin,
    RuleType,
    StyleResolver,
    StyleSheet,
};
use svgedit::{
    CssError,
    Document,
    NodeId,
};

fn first_child(doc: &Document) -> NodeId {
    doc.children(doc.root().unwrap()).find(|id| {
        doc.get_svg_element(*id).unwrap().xml_name() != "style"
    }).unwrap()
}

#[test]
fn author_rules() {
    let doc = Document::from_str(
        "<svg>\
            <style>\
                rect { fill: red; stroke: blue }\
                #r1 { fill: green }\
            </style>\
            <rect id='r1'/>\
        </svg>"
    ).unwrap();

    let rect = first_child(&doc);
    let style = doc.computed_style(rect, None, &doc.style_resolver()).unwrap();

    assert_eq!(style.get_property_value("fill"), Some("green"));
    assert_eq!(style.get_property_value("stroke"), Some("blue"));
    assert_eq!(style.get_property_origin("fill"), Some(Origin::Author));
    assert_eq!(style.get_property_value("opacity"), None);
}

#[test]
fn inline_style_wins() {
    let doc = Document::from_str(
        "<svg>\
            <style>#r1 { fill: green; stroke: red !important }</style>\
            <rect id='r1' style='fill: blue; stroke: black'/>\
        </svg>"
    ).unwrap();

    let rect = first_child(&doc);
    let style = doc.computed_style(rect, None, &doc.style_resolver()).unwrap();

    assert_eq!(style.get_property_value("fill"), Some("blue"));
    assert_eq!(style.get_property_value("stroke"), Some("red"));
    assert_eq!(style.get_property_priority("stroke"), "important");
    assert_eq!(style.get_property_priority("fill"), "");
}

#[test]
fn user_important_wins() {
    let doc = Document::from_str(
        "<svg>\
            <style>rect { fill: green !important }</style>\
            <rect style='fill: blue !important'/>\
        </svg>"
    ).unwrap();

    let mut resolver = doc.style_resolver();
    resolver.add_style_sheet(StyleSheet::parse("* { fill: yellow !important }", Origin::User));
    resolver.add_style_sheet(StyleSheet::parse("rect { fill: black; stroke: gray }", Origin::UserAgent));

    let rect = first_child(&doc);
    let style = doc.computed_style(rect, None, &resolver).unwrap();

    assert_eq!(style.get_property_value("fill"), Some("yellow"));
    assert_eq!(style.get_property_origin("fill"), Some(Origin::User));
    assert_eq!(style.get_property_value("stroke"), Some("gray"));
    assert_eq!(style.get_property_origin("stroke"), Some(Origin::UserAgent));
}

#[test]
fn descendant_selectors() {
    let doc = Document::from_str(
        "<svg>\
            <style>\
                g rect { fill: red }\
                svg > rect { fill: blue }\
                .a.b { stroke: green }\
            </style>\
            <g><rect class='a b'/></g>\
            <rect class='a'/>\
        </svg>"
    ).unwrap();

    let resolver = doc.style_resolver();
    let root = doc.root().unwrap();
    let g = doc.children(root).nth(1).unwrap();
    let inner = doc.children(g).next().unwrap();
    let outer = doc.children(root).nth(2).unwrap();

    let style = doc.computed_style(inner, None, &resolver).unwrap();
    assert_eq!(style.get_property_value("fill"), Some("red"));
    assert_eq!(style.get_property_value("stroke"), Some("green"));

    let style = doc.computed_style(outer, None, &resolver).unwrap();
    assert_eq!(style.get_property_value("fill"), Some("blue"));
    assert_eq!(style.get_property_value("stroke"), None);
}

#[test]
fn media_rules() {
    let doc = Document::from_str(
        "<svg>\
            <style>\
                @media print { rect { fill: black } }\
                @media screen, print { rect { stroke: red } }\
            </style>\
            <rect/>\
        </svg>"
    ).unwrap();

    let rect = first_child(&doc);

    let style = doc.computed_style(rect, None, &doc.style_resolver()).unwrap();
    assert_eq!(style.get_property_value("fill"), None);
    assert_eq!(style.get_property_value("stroke"), Some("red"));

    let mut resolver = StyleResolver::with_medium("print");
    for sheet in doc.style_sheets() {
        resolver.add_style_sheet(sheet.clone());
    }

    let style = doc.computed_style(rect, None, &resolver).unwrap();
    assert_eq!(style.get_property_value("fill"), Some("black"));
}

#[test]
fn pseudo_elements() {
    let doc = Document::from_str(
        "<svg>\
            <style>\
                text::first-line { fill: red }\
                text { fill: blue }\
            </style>\
            <text style='stroke: green'>Text</text>\
        </svg>"
    ).unwrap();

    let text = first_child(&doc);
    let resolver = doc.style_resolver();

    let style = doc.computed_style(text, Some("first-line"), &resolver).unwrap();
    assert_eq!(style.get_property_value("fill"), Some("red"));
    assert_eq!(style.get_property_value("stroke"), None);

    let style = doc.computed_style(text, None, &resolver).unwrap();
    assert_eq!(style.get_property_value("fill"), Some("blue"));
    assert_eq!(style.get_property_value("stroke"), Some("green"));
}

#[test]
fn style_sheet_structure() {
    let sheet = StyleSheet::parse(
        "@charset \"UTF-8\";\n\
         /* comment */\n\
         rect, circle { fill: red }\n\
         @font-face { font-family: X }\n\
         @media print { g { fill: none } }\n\
         ??? { fill: red }",
        Origin::Author,
    );

    let types: Vec<RuleType> = sheet.rules().map(|(_, r)| r.rule_type()).collect();
    assert_eq!(types, vec![RuleType::Charset, RuleType::Style, RuleType::Unknown, RuleType::Media]);
    assert_eq!(sheet.rules_count(), 5);
    assert_eq!(sheet.charset().unwrap().encoding(), "UTF-8");

    let (_, rule) = sheet.rules().nth(1).unwrap();
    assert_eq!(rule.as_style().unwrap().selector_text(), "rect, circle");
}

#[test]
fn modify_rules() {
    let mut sheet = StyleSheet::parse("@charset \"UTF-8\"; rect { fill: red }", Origin::Author);
    let charset = sheet.rules().next().unwrap().0;
    let style = sheet.rules().nth(1).unwrap().0;

    sheet.set_property(style, "stroke", "blue", true).unwrap();
    assert_eq!(sheet.rule(style).unwrap().as_style().unwrap().declaration.css_text(),
               "fill: red; stroke: blue !important;");

    let removed = sheet.remove_property(style, "fill").unwrap();
    assert_eq!(removed.map(|p| p.value), Some("red".to_string()));

    sheet.set_charset_encoding(charset, "ISO-8859-1").unwrap();
    assert_eq!(sheet.charset().unwrap().encoding(), "ISO-8859-1");

    assert_eq!(sheet.set_property(charset, "fill", "red", false), Err(CssError::InvalidRule));
}

#[test]
fn read_only_rules() {
    let mut sheet = StyleSheet::parse_with("@charset \"UTF-8\"; rect { fill: red }",
                                           Origin::UserAgent, true);
    let charset = sheet.rules().next().unwrap().0;
    let style = sheet.rules().nth(1).unwrap().0;

    assert!(sheet.is_read_only());
    assert_eq!(sheet.set_property(style, "fill", "blue", false),
               Err(CssError::NoModificationAllowed));
    assert_eq!(sheet.set_charset_encoding(charset, "UTF-16"),
               Err(CssError::NoModificationAllowed));
    assert_eq!(sheet.charset().unwrap().encoding(), "UTF-8");
}

#[test]
fn quoted_values() {
    let doc = Document::from_str(
        "<svg>\
            <style>text { font-family: \"Times New Roman\"; content: 'a;b' }</style>\
            <text>Text</text>\
        </svg>"
    ).unwrap();

    let text = first_child(&doc);
    let style = doc.computed_style(text, None, &doc.style_resolver()).unwrap();
    assert_eq!(style.get_property_value("font-family"), Some("\"Times New Roman\""));
    assert_eq!(style.get_property_value("content"), Some("'a;b'"));
}
