//! chromasync keeps a color expressed as RGB, CMYK and CIE-Lab mutually
//! consistent.
//!
//! Edits to any one representation are clamped into range, routed through RGB
//! (the hub) and used to derive the other two. The [`Synchronizer`] owns the
//! current [`ColorState`] and guards against re-entrant edits, which happen
//! when an observer writes derived values back into fields that are
//! themselves observed.
//!
//! ```rust
//! use chromasync::{SourceGroup, Synchronizer};
//!
//! let sync = Synchronizer::new();
//! let update = sync.submit_edit(SourceGroup::Rgb, &[255, 0, 0]).unwrap();
//! assert_eq!(update.state.cmyk.into_array(), [0, 100, 100, 0]);
//! assert_eq!(update.state.lab.into_array(), [53, 80, 67]);
//! ```
//!
//! The conversions are also available as pure functions in [`convert`] for
//! callers that need a one-shot conversion without the synchronization guard.

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod color;
pub mod convert;
mod gamut;
mod math;
mod models;
mod parse;
mod state;
mod sync;

pub use color::{Component, Components, Field, SourceGroup};
pub use gamut::{check_range, clamp, validate, Flags, RangeWarning, Validated};
pub use models::{Cmyk, Lab, Rgb, ToXyz, Xyz, D65};
pub use parse::{accepts_keystroke, parse_lenient};
pub use state::{ColorState, Source};
pub use sync::{Phase, Synchronizer, Update};
