// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use self::element::*;
pub use self::element_ref::*;
pub use self::element_type::*;
pub use self::iterators::*;

mod element;
mod element_ref;
mod element_type;
mod iterators;
