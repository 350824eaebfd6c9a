// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate bencher;
extern crate svgedit;

use bencher::Bencher;

use svgedit::{
    Document,
    PathData,
    WriteBuffer,
};

const ONE_MIB: usize = 1024 * 1024;

fn gen_svg(count: usize) -> String {
    let mut text = String::from("<svg xmlns='http://www.w3.org/2000/svg'>\n\
                                 <style>rect { fill: red } .a > path { stroke: blue }</style>\n");
    for i in 0..count {
        text.push_str(&format!(
            "<g id='g{0}' class='a'>\
                <rect id='r{0}' x='{0}' y='{0}' width='10mm' height='1in' fill='#00ff00'/>\
                <path d='M{0} 0L10 10 20 {0}Z' style='stroke-width:2'/>\
                <text x='1' y='2'>Text {0}</text>\
            </g>\n", i));
    }
    text.push_str("</svg>");
    text
}

macro_rules! do_parse {
    ($name:ident, $count:expr) => (
        fn $name(bencher: &mut Bencher) {
            let text = gen_svg($count);
            bencher.iter(|| {
                let _ = Document::from_str(&text).unwrap();
            })
        }
    )
}

do_parse!(parse_small, 10);
do_parse!(parse_medium, 100);
do_parse!(parse_large, 1000);

macro_rules! do_write {
    ($name:ident, $count:expr) => (
        fn $name(bencher: &mut Bencher) {
            let doc = Document::from_str(&gen_svg($count)).unwrap();
            let mut output_data = Vec::with_capacity(ONE_MIB);
            bencher.iter(|| {
                doc.write_buf(&mut output_data);
                output_data.clear();
            })
        }
    )
}

do_write!(write_small, 10);
do_write!(write_medium, 100);
do_write!(write_large, 1000);

fn computed_style(bencher: &mut Bencher) {
    let doc = Document::from_str(&gen_svg(100)).unwrap();
    let resolver = doc.style_resolver();
    let nodes: Vec<_> = doc.descendants(doc.root().unwrap()).collect();
    bencher.iter(|| {
        for node in &nodes {
            let _ = doc.computed_style(*node, None, &resolver);
        }
    })
}

fn path_data(bencher: &mut Bencher) {
    let text = "M10 10L20 20 30 30 40 40 50 50 60 60 70 70 80 80 90 90Z";
    bencher.iter(|| {
        let path = PathData::parse(text);
        let _ = path.to_path_string();
    })
}

benchmark_group!(benches1, parse_small, parse_medium, parse_large);
benchmark_group!(benches2, write_small, write_medium, write_large);
benchmark_group!(benches3, computed_style, path_data);
benchmark_main!(benches1, benches2, benches3);
