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

use svgedit::{
    Color,
    Document,
    PathData,
    Points,
    Shape,
    ShapeStyle,
    DEFAULT_DPI,
};

fn last_child_xml(doc: &Document) -> String {
    let node = doc.children(doc.root().unwrap()).last().unwrap();
    doc.element_to_xml(node)
}

#[test]
fn add_rect() {
    let mut doc = Document::create_new_document();
    let shape = Shape::Rect {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.5,
        style: ShapeStyle::default(),
    };

    let id = doc.add_shape(None, &shape).unwrap();
    assert_eq!(doc.get_svg_element(id).unwrap().parent(), doc.root());
    assert_eq!(last_child_xml(&doc),
               "<rect x=\"10\" y=\"20\" width=\"30\" height=\"40.5\" \
                stroke=\"#000000\" stroke-width=\"1\" />\r\n");
}

#[test]
fn add_named_shape() {
    let mut doc = Document::create_new_document();
    let style = ShapeStyle {
        fill: Some(Color::new(255, 0, 0)),
        stroke: None,
        stroke_width: 2.5,
        name: "Frame".to_string(),
    };

    let shape = Shape::Line { x1: 0.0, y1: 0.0, x2: 5.0, y2: 5.0, style };
    doc.add_shape(None, &shape);

    assert_eq!(last_child_xml(&doc),
               "<line x1=\"0\" y1=\"0\" x2=\"5\" y2=\"5\" \
                fill=\"#FF0000\" stroke-width=\"2.5\" />\r\n");
}

#[test]
fn add_polygon_and_path() {
    let mut doc = Document::create_new_document();

    let points: Points = "0,0 10,0 10,10".parse().unwrap();
    doc.add_shape(None, &Shape::Polygon { points, style: ShapeStyle::default() });
    assert!(last_child_xml(&doc).starts_with("<polygon points=\"0,0 10,0 10,10\""));

    let mut data = PathData::new();
    data.move_to(0.0, 0.0);
    data.line_to(10.0, 0.0);
    data.line_to(10.0, 10.0);
    data.close();
    doc.add_shape(None, &Shape::Path { data, style: ShapeStyle::default() });
    assert!(last_child_xml(&doc).starts_with("<path d=\"M0 0L10 0 10 10Z\""));
}

#[test]
fn text_round_trip() {
    let mut doc = Document::create_new_document();
    let shape = Shape::Text {
        x: 5.0,
        y: 15.0,
        text: "Label".to_string(),
        font_family: "Arial".to_string(),
        font_size: 12.0,
        style: ShapeStyle {
            stroke: None,
            .. ShapeStyle::default()
        },
    };

    let id = doc.add_shape(None, &shape).unwrap();
    assert_eq!(Shape::from_element(&doc, id, DEFAULT_DPI), Some(shape));
}

#[test]
fn read_shapes() {
    let doc = Document::from_str(
        "<svg>\
            <rect x='1in' y='2' width='3' height='4' ShapeName='Box'/>\
            <polyline points='1,2 3,4'/>\
            <image x='1' y='2' width='3' height='4' xlink:href='a.png'/>\
        </svg>"
    ).unwrap();

    let shapes: Vec<Shape> = doc.children(doc.root().unwrap())
        .filter_map(|id| Shape::from_element(&doc, id, DEFAULT_DPI))
        .collect();

    assert_eq!(shapes.len(), 3);

    match shapes[0] {
        Shape::Rect { x, width, ref style, .. } => {
            assert_eq!(x, 96.0);
            assert_eq!(width, 3.0);
            assert_eq!(style.name, "Box");
            assert_eq!(style.stroke, None);
            assert_eq!(style.stroke_width, 1.0);
        }
        _ => panic!("not a rect"),
    }

    match shapes[1] {
        Shape::Polygon { ref points, .. } => assert_eq!(points.to_vec(), vec![(1.0, 2.0), (3.0, 4.0)]),
        _ => panic!("not a polygon"),
    }

    assert_eq!(shapes[2], Shape::Image {
        x: 1.0,
        y: 2.0,
        width: 3.0,
        height: 4.0,
        href: "a.png".to_string(),
    });
    assert_eq!(shapes[2].style(), None);
}
