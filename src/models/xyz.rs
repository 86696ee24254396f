//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// Reference white used for all XYZ/Lab conversions (CIE D65, 2°).
pub const D65: Components = Components(0.95047, 1.0, 1.08883);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

chromasync_macros::gen_model! {
    /// A color in the CIE-XYZ color space relative to [`D65`]. This is the
    /// device independent intermediate between RGB and Lab.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl From<Components> for Xyz {
    fn from(Components(x, y, z): Components) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Xyz> for Components {
    fn from(value: Xyz) -> Self {
        Components(value.x, value.y, value.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip() {
        let xyz = Xyz::from(Components(0.1, 0.2, 0.3));
        assert_eq!(xyz.into_array(), [0.1, 0.2, 0.3]);
        assert_eq!(Components::from(xyz), Components(0.1, 0.2, 0.3));
    }
}
