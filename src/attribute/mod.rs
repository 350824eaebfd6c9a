// Copyright 2018 Evgeniy Reizner
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use self::attribute::*;
pub use self::attribute_id::*;
pub use self::attribute_value::*;
pub use self::attributes::*;
pub use self::color::*;

mod attribute;
mod attribute_id;
mod attribute_value;
mod attributes;
mod color;
