//! The consistent triple of representations owned by the synchronizer.

use crate::{
    color::SourceGroup,
    convert,
    gamut::saturate,
    models::{Cmyk, Lab, Rgb},
};

/// The clamped values of the group that was edited. Each variant knows how
/// to reach the RGB hub; everything else is derived from there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Source {
    /// An RGB edit, already the hub.
    Rgb(Rgb),
    /// A CMYK edit.
    Cmyk(Cmyk<u8>),
    /// A Lab edit.
    Lab(Lab<i16>),
}

impl Source {
    /// Build a source from clamped channels in the field order of `group`.
    /// Unused trailing channels are ignored.
    pub fn from_channels(group: SourceGroup, channels: [i64; 4]) -> Self {
        let [c0, c1, c2, c3] = channels;

        match group {
            SourceGroup::Rgb => Source::Rgb(Rgb::new(saturate(c0), saturate(c1), saturate(c2))),
            SourceGroup::Cmyk => Source::Cmyk(Cmyk::new(
                saturate(c0),
                saturate(c1),
                saturate(c2),
                saturate(c3),
            )),
            SourceGroup::Lab => Source::Lab(Lab::new(saturate(c0), saturate(c1), saturate(c2))),
        }
    }

    /// The group this source belongs to.
    pub fn group(&self) -> SourceGroup {
        match self {
            Source::Rgb(_) => SourceGroup::Rgb,
            Source::Cmyk(_) => SourceGroup::Cmyk,
            Source::Lab(_) => SourceGroup::Lab,
        }
    }

    /// Convert the source to the RGB hub.
    pub fn to_hub(&self) -> Rgb {
        match *self {
            Source::Rgb(rgb) => rgb,
            Source::Cmyk(cmyk) => convert::cmyk_to_rgb(cmyk.to_components()),
            Source::Lab(lab) => convert::lab_to_rgb(lab.to_components()),
        }
    }
}

/// RGB, CMYK and Lab values describing the same color, up to quantization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorState {
    /// The hub representation.
    pub rgb: Rgb,
    /// Whole percentages in [0, 100].
    pub cmyk: Cmyk<u8>,
    /// Lightness in [0, 100], a and b in [-128, 127].
    pub lab: Lab<i16>,
}

impl ColorState {
    /// Derive all three representations from an RGB color.
    pub fn from_hub(rgb: Rgb) -> Self {
        Self {
            rgb,
            cmyk: convert::rgb_to_cmyk(rgb).quantize(),
            lab: convert::rgb_to_lab(rgb).quantize(),
        }
    }

    /// Derive the state for an edit. The edited group keeps its (clamped)
    /// values; the other two are derived through the hub.
    pub fn from_source(source: Source) -> Self {
        let derived = Self::from_hub(source.to_hub());

        match source {
            Source::Rgb(_) => derived,
            Source::Cmyk(cmyk) => Self { cmyk, ..derived },
            Source::Lab(lab) => Self { lab, ..derived },
        }
    }

    /// The color as `#rrggbb` for a preview swatch.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

impl Default for ColorState {
    /// Black.
    fn default() -> Self {
        Self::from_hub(Rgb::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        let state = ColorState::default();
        assert_eq!(state.rgb, Rgb::BLACK);
        assert_eq!(state.cmyk, Cmyk::BLACK);
        assert_eq!(state.lab, Lab::new(0, 0, 0));
        assert_eq!(state.hex(), "#000000");
    }

    #[test]
    fn from_hub_red() {
        let state = ColorState::from_hub(Rgb::new(255, 0, 0));
        assert_eq!(state.cmyk, Cmyk::new(0, 100, 100, 0));
        assert_eq!(state.lab, Lab::new(53, 80, 67));
    }

    #[test]
    fn source_group_is_preserved() {
        // Mid gray with equal inks is not what rgb_to_cmyk would produce
        // (that would be pure key), but it is what was typed.
        let source = Source::Cmyk(Cmyk::new(50, 50, 50, 0));
        let state = ColorState::from_source(source);
        assert_eq!(state.cmyk, Cmyk::new(50, 50, 50, 0));
        assert_eq!(state.rgb, Rgb::new(128, 128, 128));
        assert_eq!(state.lab, ColorState::from_hub(state.rgb).lab);
    }

    #[test]
    fn lab_source_derives_rgb_and_cmyk() {
        let state = ColorState::from_source(Source::Lab(Lab::new(100, 0, 0)));
        assert_eq!(state.rgb, Rgb::WHITE);
        assert_eq!(state.cmyk, Cmyk::new(0, 0, 0, 0));
        assert_eq!(state.lab, Lab::new(100, 0, 0));
    }

    #[test]
    fn from_channels_matches_group() {
        let source = Source::from_channels(SourceGroup::Lab, [50, -20, 30, 99]);
        assert_eq!(source, Source::Lab(Lab::new(50, -20, 30)));
        assert_eq!(source.group(), SourceGroup::Lab);

        let source = Source::from_channels(SourceGroup::Cmyk, [1, 2, 3, 4]);
        assert_eq!(source, Source::Cmyk(Cmyk::new(1, 2, 3, 4)));
        assert_eq!(source.group(), SourceGroup::Cmyk);
    }
}
