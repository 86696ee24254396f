//! Models are structs that represent a color in one of the supported color
//! spaces. Conversions are implemented on the models themselves; the free
//! functions in [`crate::convert`] compose them.

mod cmyk;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;
