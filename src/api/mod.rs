/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod client;
pub mod errors;
pub mod image;
pub mod pod;
pub mod post;
pub mod properties;
pub mod token;
pub mod user;

pub use client::*;
pub use errors::*;
pub use image::*;
pub use pod::*;
pub use post::*;
pub use properties::*;
pub use token::*;
pub use user::*;
