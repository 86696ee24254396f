//! Scalar types and the editable fields of a color.

use std::fmt;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for all intermediate math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for all intermediate math.
pub type Component = f64;

/// Three unquantized components of a color, used between conversion steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The group of fields an edit originates from. The group that was edited
/// last is the source of truth; the other two are derived from it through
/// RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SourceGroup {
    /// Red, green and blue in [0, 255].
    Rgb = 0,
    /// Cyan, magenta, yellow and key as percentages.
    Cmyk = 1,
    /// CIE-Lab lightness and the a/b axes.
    Lab = 2,
}

impl SourceGroup {
    /// All groups, in field order.
    pub const ALL: [SourceGroup; 3] = [SourceGroup::Rgb, SourceGroup::Cmyk, SourceGroup::Lab];

    /// The fields that make up this group, in the order values are submitted.
    pub const fn fields(self) -> &'static [Field] {
        use Field as F;

        match self {
            SourceGroup::Rgb => &[F::Red, F::Green, F::Blue],
            SourceGroup::Cmyk => &[F::Cyan, F::Magenta, F::Yellow, F::Key],
            SourceGroup::Lab => &[F::Lightness, F::A, F::B],
        }
    }
}

impl fmt::Display for SourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceGroup::Rgb => "RGB",
            SourceGroup::Cmyk => "CMYK",
            SourceGroup::Lab => "Lab",
        })
    }
}

/// A single editable channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// RGB red.
    Red,
    /// RGB green.
    Green,
    /// RGB blue.
    Blue,
    /// CMYK cyan.
    Cyan,
    /// CMYK magenta.
    Magenta,
    /// CMYK yellow.
    Yellow,
    /// CMYK key (black).
    Key,
    /// Lab lightness.
    Lightness,
    /// Lab green-red axis.
    A,
    /// Lab blue-yellow axis.
    B,
}

impl Field {
    /// Short label shown next to the field, also used in warnings.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Red => "R",
            Field::Green => "G",
            Field::Blue => "B",
            Field::Cyan => "C",
            Field::Magenta => "M",
            Field::Yellow => "Y",
            Field::Key => "K",
            Field::Lightness => "L",
            Field::A => "a",
            Field::B => "b",
        }
    }

    /// The inclusive range of valid values.
    ///
    /// Lab a/b are limited to the signed byte range rather than the
    /// theoretical unbounded Lab axes, so very saturated colors are clipped.
    pub const fn range(self) -> (i64, i64) {
        match self {
            Field::Red | Field::Green | Field::Blue => (0, 255),
            Field::Cyan | Field::Magenta | Field::Yellow | Field::Key => (0, 100),
            Field::Lightness => (0, 100),
            Field::A | Field::B => (-128, 127),
        }
    }

    /// The group this field belongs to.
    pub const fn group(self) -> SourceGroup {
        match self {
            Field::Red | Field::Green | Field::Blue => SourceGroup::Rgb,
            Field::Cyan | Field::Magenta | Field::Yellow | Field::Key => SourceGroup::Cmyk,
            Field::Lightness | Field::A | Field::B => SourceGroup::Lab,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
