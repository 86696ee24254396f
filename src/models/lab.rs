//! Model a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components, Field},
    gamut::{clamp, saturate},
    models::xyz::{ToXyz, Xyz, D65},
};

/// Below this ratio to the reference white the forward nonlinearity is
/// linear.
const EPSILON: Component = 0.008856;

/// Below this value of `f(t)` the inverse nonlinearity is linear.
const INVERSE_EPSILON: Component = 0.206893;

/// Slope of the linear segment.
const SLOPE: Component = 7.787;

const OFFSET: Component = 16.0 / 116.0;

fn f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        SLOPE * t + OFFSET
    }
}

fn f_inverse(t: Component) -> Component {
    if t > INVERSE_EPSILON {
        t * t * t
    } else {
        (t - OFFSET) / SLOPE
    }
}

chromasync_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to the D65 white point.
    ///
    /// Conversions produce `Lab<Component>`; a [`crate::ColorState`] stores
    /// the quantized `Lab<i16>`.
    pub struct Lab<T = Component> {
        /// The lightness, nominally in [0, 100].
        lightness: T,
        /// The green (negative) to red (positive) axis.
        a: T,
        /// The blue (negative) to yellow (positive) axis.
        b: T,
    }
}

impl Lab<Component> {
    /// Round each channel to a whole number and clamp it into the range of
    /// its field.
    pub fn quantize(&self) -> Lab<i16> {
        let quantize = |value: Component, field: Field| -> i16 {
            let (min, max) = field.range();
            saturate(clamp(value.round() as i64, min, max))
        };

        Lab::new(
            quantize(self.lightness, Field::Lightness),
            quantize(self.a, Field::A),
            quantize(self.b, Field::B),
        )
    }
}

impl Lab<i16> {
    /// Widen the quantized channels back into components for conversion.
    pub fn to_components(self) -> Lab<Component> {
        Lab::new(
            Component::from(self.lightness),
            Component::from(self.a),
            Component::from(self.b),
        )
    }
}

impl ToXyz for Lab<Component> {
    fn to_xyz(&self) -> Xyz {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            f_inverse(fx) * D65.0,
            f_inverse(fy) * D65.1,
            f_inverse(fz) * D65.2,
        )
    }
}

impl From<Xyz> for Lab<Component> {
    fn from(value: Xyz) -> Self {
        let Components(fx, fy, fz) = Components(
            value.x / D65.0,
            value.y / D65.1,
            value.z / D65.2,
        )
        .map(f);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn nonlinearity_branches() {
        // Linear segment just below the threshold.
        assert_component_eq!(f(0.008), SLOPE * 0.008 + OFFSET);
        assert_component_eq!(f(0.0), OFFSET);
        assert_component_eq!(f(0.125), 0.5);

        assert_component_eq!(f_inverse(0.5), 0.125);
        assert_component_eq!(f_inverse(OFFSET), 0.0);
        assert_component_eq!(f_inverse(0.2), (0.2 - OFFSET) / SLOPE);
    }

    #[test]
    fn reference_white_is_full_lightness() {
        let lab = Lab::<Component>::from(Xyz::from(D65));
        assert_component_eq!(lab.lightness, 100.0, 1.0e-3);
        assert_component_eq!(lab.a, 0.0, 1.0e-3);
        assert_component_eq!(lab.b, 0.0, 1.0e-3);
    }

    #[test]
    fn xyz_round_trip() {
        let lab = Lab::<Component>::new(53.0, 80.0, 67.0);
        let back = Lab::<Component>::from(lab.to_xyz());
        assert_component_eq!(back.lightness, lab.lightness, 1.0e-3);
        assert_component_eq!(back.a, lab.a, 1.0e-3);
        assert_component_eq!(back.b, lab.b, 1.0e-3);
    }

    #[test]
    fn quantize_rounds_and_clamps_to_the_signed_byte_range() {
        let lab = Lab::<Component>::new(53.24, 80.5, -67.5).quantize();
        assert_eq!(lab, Lab::new(53, 81, -68));

        let lab = Lab::<Component>::new(104.0, 210.0, -300.0).quantize();
        assert_eq!(lab, Lab::new(100, 127, -128));

        let lab = Lab::<Component>::new(-0.4, 0.0, 0.0).quantize();
        assert_eq!(lab, Lab::new(0, 0, 0));
    }

    #[test]
    fn to_components_widens() {
        assert_eq!(
            Lab::<i16>::new(53, -80, 67).to_components(),
            Lab::new(53.0, -80.0, 67.0)
        );
    }
}
