// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use crate::error::{
    ParserError,
    Result,
};

/// Entities declared in the DOCTYPE.
pub type Entities<'a> = HashMap<&'a str, &'a str>;

// Entities can reference other entities, but not indefinitely.
const MAX_ENTITY_DEPTH: u32 = 8;

// How much entity expansion may grow a single value.
const MAX_EXPANDED_LEN: usize = 1 << 20;

/// Expands character and entity references.
pub fn unescape(text: &str, entities: &Entities) -> Result<String> {
    if !text.contains('&') {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let limit = text.len() + MAX_EXPANDED_LEN;
    unescape_into(text, entities, 0, limit, &mut out)?;
    Ok(out)
}

fn unescape_into(
    text: &str,
    entities: &Entities,
    depth: u32,
    limit: usize,
    out: &mut String,
) -> Result<()> {
    if !text.contains('&') {
        return push_checked(out, text, limit);
    }

    let mut rest = text;

    while let Some(start) = rest.find('&') {
        push_checked(out, &rest[..start], limit)?;
        rest = &rest[start + 1..];

        let end = rest.find(';')
            .filter(|end| *end > 0 && !rest[..*end].contains(char::is_whitespace));

        let end = match end {
            Some(end) => end,
            None => {
                // Not a reference. Keep as is.
                out.push('&');
                continue;
            }
        };

        let name = &rest[..end];
        rest = &rest[end + 1..];

        if let Some(c) = parse_char_ref(name) {
            out.push(c);
            continue;
        }

        match name {
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "amp" => out.push('&'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let value = match entities.get(name) {
                    Some(value) if depth < MAX_ENTITY_DEPTH => value,
                    _ => return Err(ParserError::UnknownEntity(name.to_string())),
                };

                unescape_into(value, entities, depth + 1, limit, out)?;
            }
        }
    }

    push_checked(out, rest, limit)
}

fn push_checked(out: &mut String, text: &str, limit: usize) -> Result<()> {
    if out.len() + text.len() > limit {
        return Err(ParserError::EntityLimitExceeded);
    }

    out.push_str(text);
    Ok(())
}

fn parse_char_ref(name: &str) -> Option<char> {
    let code = if name.starts_with("#x") || name.starts_with("#X") {
        u32::from_str_radix(&name[2..], 16).ok()?
    } else if name.starts_with('#') {
        name[1..].parse::<u32>().ok()?
    } else {
        return None;
    };

    ::std::char::from_u32(code)
}
