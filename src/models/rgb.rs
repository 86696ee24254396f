//! Model a color in the sRGB color space.
//!
//! RGB is the hub: every conversion between CMYK and Lab passes through it,
//! and it is the only model that is always quantized to whole channel values.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

mod gamma {
    use crate::color::Components;

    /// Apply the sRGB transfer function to linear light components.
    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            if value > 0.0031308 {
                1.055 * value.powf(1.0 / 2.4) - 0.055
            } else {
                12.92 * value
            }
        })
    }

    /// Remove the sRGB transfer function from gamma encoded components.
    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value| {
            if value > 0.04045 {
                ((value + 0.055) / 1.055).powf(2.4)
            } else {
                value / 12.92
            }
        })
    }
}

chromasync_macros::gen_model! {
    /// A color in the sRGB color space with 8-bit gamma encoded channels.
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Returns true if all channels are zero.
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }

    /// Render the color as `#rrggbb`, e.g. for a preview swatch.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// The channels normalized to [0, 1].
    pub(crate) fn to_unit(self) -> Components {
        let [red, green, blue] = self.into_array().map(Component::from);
        Components(red, green, blue).map(|v| v / 255.0)
    }

    /// Build a color from normalized channels. Values outside [0, 1] are
    /// clipped before scaling and rounding.
    pub(crate) fn from_unit(unit: Components) -> Self {
        let Components(red, green, blue) =
            unit.map(|v| (v.clamp(0.0, 1.0) * 255.0).round());
        Rgb::new(red as u8, green as u8, blue as u8)
    }
}

impl ToXyz for Rgb {
    fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        transform(&TO_XYZ, gamma::to_linear_light(&self.to_unit())).into()
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2406, -0.9689,  0.0557,
            -1.5372,  1.8758, -0.2040,
            -0.4986,  0.0415,  1.0570,
        );

        let linear = transform(&FROM_XYZ, value.into());
        Rgb::from_unit(gamma::to_gamma_encoded(&linear))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn gamma_branches() {
        // Below the threshold the curve is linear.
        let linear = gamma::to_linear_light(&Components(0.04, 0.0, 1.0));
        assert_component_eq!(linear.0, 0.04 / 12.92);
        assert_component_eq!(linear.1, 0.0);
        assert_component_eq!(linear.2, 1.0);

        let encoded = gamma::to_gamma_encoded(&Components(0.003, 0.0, 1.0));
        assert_component_eq!(encoded.0, 0.003 * 12.92);
        assert_component_eq!(encoded.1, 0.0);
        assert_component_eq!(encoded.2, 1.0);
    }

    #[test]
    fn gamma_round_trip() {
        let original = Components(0.2, 0.5, 0.8);
        let back = gamma::to_gamma_encoded(&gamma::to_linear_light(&original));
        assert_component_eq!(back.0, original.0);
        assert_component_eq!(back.1, original.1);
        assert_component_eq!(back.2, original.2);
    }

    #[test]
    fn white_to_xyz_is_the_reference_white() {
        let xyz = Rgb::WHITE.to_xyz();
        assert_component_eq!(xyz.x, 0.9505, 1.0e-4);
        assert_component_eq!(xyz.y, 1.0, 1.0e-4);
        assert_component_eq!(xyz.z, 1.089, 1.0e-4);
    }

    #[test]
    fn xyz_round_trip_is_exact_after_rounding() {
        for rgb in [
            Rgb::BLACK,
            Rgb::WHITE,
            Rgb::new(255, 0, 0),
            Rgb::new(10, 128, 240),
            Rgb::new(210, 105, 30),
        ] {
            assert_eq!(Rgb::from(rgb.to_xyz()), rgb);
        }
    }

    #[test]
    fn out_of_gamut_xyz_is_clipped() {
        assert_eq!(Rgb::from(Xyz::new(-1.0, -1.0, -1.0)), Rgb::BLACK);
        assert_eq!(Rgb::from(Xyz::new(5.0, 5.0, 5.0)), Rgb::WHITE);
    }

    #[test]
    fn hex() {
        assert_eq!(Rgb::new(210, 105, 30).to_hex(), "#d2691e");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert!(Rgb::BLACK.is_black());
        assert!(!Rgb::new(0, 0, 1).is_black());
    }
}
