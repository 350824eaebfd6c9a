// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// A path command supported by the editor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathCommand {
    /// `M`
    MoveTo,
    /// `L`
    LineTo,
    /// `Z`
    ClosePath,
}

impl PathCommand {
    /// Parses a command letter. Lowercase letters are accepted as well.
    pub fn from_char(c: char) -> Option<PathCommand> {
        match c {
            'M' | 'm' => Some(PathCommand::MoveTo),
            'L' | 'l' => Some(PathCommand::LineTo),
            'Z' | 'z' => Some(PathCommand::ClosePath),
            _ => None,
        }
    }

    /// Returns an uppercase command letter.
    pub fn as_char(&self) -> char {
        match *self {
            PathCommand::MoveTo => 'M',
            PathCommand::LineTo => 'L',
            PathCommand::ClosePath => 'Z',
        }
    }
}

/// A point with the command that leads to it.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathSegment {
    pub x: f64,
    pub y: f64,
    pub command: PathCommand,
}

impl PathSegment {
    /// Constructs a new segment.
    pub fn new(x: f64, y: f64, command: PathCommand) -> Self {
        PathSegment { x, y, command }
    }
}

/// An ordered list of path segments.
///
/// Segments are applied left to right. A list parsed from a `d` attribute
/// always ends with a `ClosePath` segment, even if the source data
/// was an open path.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PathData(Vec<PathSegment>);

#[derive(Default)]
struct PairState<'a> {
    x: Option<&'a str>,
    y: Option<&'a str>,
    next_x: Option<&'a str>,
}

impl<'a> PairState<'a> {
    fn push_coord(&mut self, s: &'a str) {
        if self.x.is_none() {
            self.x = Some(s);
        } else {
            self.y = Some(s);
        }
    }
}

fn parse_coord(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn find_command(token: &str) -> Option<(usize, PathCommand)> {
    token.char_indices().filter_map(|(i, c)| PathCommand::from_char(c).map(|cmd| (i, cmd))).next()
}

impl PathData {
    /// Constructs an empty path.
    pub fn new() -> Self {
        PathData(Vec::new())
    }

    /// Parses the editor flavor of path data.
    ///
    /// Only `M`, `L` and `Z` are recognized. Tokens are separated by spaces,
    /// a command letter may be glued to the beginning or the end of a number,
    /// or sit between two numbers, like in `10L20`.
    pub fn parse(text: &str) -> PathData {
        let text = text.trim().replace('\r', "").replace('\n', " ").replace(',', " ");

        let mut list = Vec::new();
        let mut state = PairState::default();
        let mut curr_cmd = PathCommand::MoveTo;
        let mut next_cmd = PathCommand::MoveTo;

        for token in text.split(' ') {
            match find_command(token) {
                Some((idx, cmd)) => {
                    let last = token.len() - 1;
                    if idx == 0 {
                        curr_cmd = cmd;
                        if token.len() > 1 {
                            state.push_coord(&token[1..]);
                        }
                    } else if idx == last {
                        curr_cmd = cmd;
                        state.push_coord(&token[..idx]);
                    } else {
                        state.y = Some(&token[..idx]);
                        state.next_x = Some(&token[idx + 1..]);
                        next_cmd = cmd;
                        if state.x.is_none() {
                            state.x = Some("");
                        }
                    }
                }
                None => {
                    if parse_coord(token).is_some() {
                        state.push_coord(token);
                    }
                }
            }

            if let (Some(x), Some(y)) = (state.x, state.y) {
                match (parse_coord(x), parse_coord(y)) {
                    (Some(x), Some(y)) => list.push(PathSegment::new(x, y, curr_cmd)),
                    _ => warn!("Invalid path coordinates: '{}' '{}'.", x, y),
                }

                match state.next_x.take() {
                    Some(next_x) if !next_x.is_empty() => {
                        state.x = Some(next_x);
                        state.y = None;
                        curr_cmd = next_cmd;
                    }
                    _ => {
                        state.x = None;
                        state.y = None;
                    }
                }
            }
        }

        let mut path = PathData(list);
        path.close();
        path
    }

    /// Starts a new subpath.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.0.push(PathSegment::new(x, y, PathCommand::MoveTo));
    }

    /// Adds a line to the point.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.0.push(PathSegment::new(x, y, PathCommand::LineTo));
    }

    /// Turns the last segment into a `ClosePath`.
    pub fn close(&mut self) {
        if let Some(seg) = self.0.last_mut() {
            seg.command = PathCommand::ClosePath;
        }
    }

    /// Returns the path in the editor's `d` notation.
    ///
    /// A command letter is written only when the command changes
    /// and a trailing `Z` is always present.
    pub fn to_path_string(&self) -> String {
        let mut s = String::new();
        let mut prev: Option<PathCommand> = None;
        let mut has_close = false;

        for seg in &self.0 {
            if prev != Some(seg.command) {
                if seg.command == PathCommand::ClosePath {
                    s.push_str(&format!("{} {}Z", seg.x, seg.y));
                    has_close = true;
                } else {
                    s.truncate(s.trim_end().len());
                    if prev == Some(PathCommand::ClosePath) {
                        s.push(' ');
                    }

                    s.push(seg.command.as_char());
                    s.push_str(&format!("{} {}", seg.x, seg.y));
                }

                prev = Some(seg.command);
            } else {
                s.push_str(&format!("{} {}", seg.x, seg.y));
            }

            s.push(' ');
        }

        if !has_close {
            s.push('Z');
        }

        s.trim_end().to_string()
    }
}

impl From<Vec<PathSegment>> for PathData {
    fn from(v: Vec<PathSegment>) -> Self {
        PathData(v)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_path_string())
    }
}

impl Deref for PathData {
    type Target = Vec<PathSegment>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PathData {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
