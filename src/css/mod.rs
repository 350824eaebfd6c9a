// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CSS object model and cascade.

use std::fmt;

pub use self::cascade::*;
pub use self::charset::*;
pub use self::declaration::*;
pub use self::media::*;
pub use self::placeholder::*;
pub use self::rule::*;
pub use self::selector::*;
pub use self::stylesheet::*;

mod cascade;
mod charset;
mod declaration;
mod media;
mod placeholder;
mod rule;
mod selector;
mod stylesheet;

/// A style sheet origin.
///
/// Ordered by the cascade precedence of normal declarations.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Origin {
    /// Built-in defaults.
    UserAgent,
    /// Style sheets supplied by the user.
    User,
    /// Style sheets of the document itself.
    Author,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Origin::UserAgent => "user-agent",
            Origin::User => "user",
            Origin::Author => "author",
        };

        write!(f, "{}", name)
    }
}
