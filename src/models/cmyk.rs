//! Model a color with the subtractive CMYK process colors.

use crate::{
    color::{Component, Components, Field},
    gamut::{clamp, saturate},
    models::rgb::Rgb,
};

chromasync_macros::gen_model! {
    /// A color expressed as cyan, magenta, yellow and key (black)
    /// percentages.
    ///
    /// Conversions produce `Cmyk<Component>`; a [`crate::ColorState`] stores
    /// the quantized `Cmyk<u8>`.
    pub struct Cmyk<T = Component> {
        /// The cyan percentage.
        cyan: T,
        /// The magenta percentage.
        magenta: T,
        /// The yellow percentage.
        yellow: T,
        /// The key (black) percentage.
        key: T,
    }
}

impl Cmyk<Component> {
    /// Derive the process colors from an RGB color.
    ///
    /// Pure black maps to `(0, 0, 0, 100)`; the general formula would divide
    /// by `1 - k = 0`.
    pub fn from_rgb(rgb: Rgb) -> Self {
        if rgb.is_black() {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let Components(red, green, blue) = rgb.to_unit();
        let key = 1.0 - red.max(green).max(blue);
        let chroma = |channel: Component| (1.0 - channel - key) / (1.0 - key) * 100.0;

        Cmyk::new(chroma(red), chroma(green), chroma(blue), key * 100.0)
    }

    /// Convert the process colors back to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let white = 1.0 - self.key / 100.0;
        let channel = |ink: Component| (1.0 - ink / 100.0) * white;

        Rgb::from_unit(Components(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        ))
    }

    /// Round each channel to a whole percentage and clamp it into [0, 100].
    pub fn quantize(&self) -> Cmyk<u8> {
        let quantize = |value: Component, field: Field| -> u8 {
            let (min, max) = field.range();
            saturate(clamp(value.round() as i64, min, max))
        };

        Cmyk::new(
            quantize(self.cyan, Field::Cyan),
            quantize(self.magenta, Field::Magenta),
            quantize(self.yellow, Field::Yellow),
            quantize(self.key, Field::Key),
        )
    }
}

impl Cmyk<u8> {
    /// Pure black.
    pub const BLACK: Cmyk<u8> = Cmyk::new(0, 0, 0, 100);

    /// Widen the quantized channels back into components for conversion.
    pub fn to_components(self) -> Cmyk<Component> {
        let [cyan, magenta, yellow, key] = self.into_array().map(Component::from);
        Cmyk::new(cyan, magenta, yellow, key)
    }
}
