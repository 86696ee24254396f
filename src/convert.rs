//! One-shot conversions between the color models.
//!
//! These are pure functions without the synchronization guard, e.g. for a
//! color picker that hands over an RGB triple and wants CMYK and Lab back
//! immediately. RGB results are quantized; CMYK, Lab and XYZ results are not,
//! see [`Cmyk::quantize`] and [`Lab::quantize`].
//!
//! There is no direct formula between Lab and CMYK. Both directions go
//! through RGB so that the three representations can never disagree about
//! which colors they describe.
//!
//! ```rust
//! use chromasync::{convert, Rgb};
//!
//! let cmyk = convert::rgb_to_cmyk(Rgb::new(0, 0, 0));
//! assert_eq!(cmyk.quantize().into_array(), [0, 0, 0, 100]);
//!
//! let lab = convert::rgb_to_lab(Rgb::new(255, 255, 255)).quantize();
//! assert_eq!(lab.into_array(), [100, 0, 0]);
//! ```

use crate::models::{Cmyk, Lab, Rgb, ToXyz, Xyz};

/// Convert gamma encoded sRGB to CIE-XYZ (D65).
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    rgb.to_xyz()
}

/// Convert CIE-XYZ (D65) to sRGB, clipping out of gamut colors.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    Rgb::from(xyz)
}

/// Convert CIE-XYZ to CIE-Lab, both relative to D65.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    Lab::from(xyz)
}

/// Convert CIE-Lab to CIE-XYZ, both relative to D65.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// Convert sRGB to CMYK percentages.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    Cmyk::from_rgb(rgb)
}

/// Convert CMYK percentages to sRGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    cmyk.to_rgb()
}

/// Convert sRGB to CIE-Lab through XYZ.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert CIE-Lab to sRGB through XYZ.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Convert CIE-Lab to CMYK through RGB.
pub fn lab_to_cmyk(lab: Lab) -> Cmyk {
    rgb_to_cmyk(lab_to_rgb(lab))
}

/// Convert CMYK to CIE-Lab through RGB.
pub fn cmyk_to_lab(cmyk: Cmyk) -> Lab {
    rgb_to_lab(cmyk_to_rgb(cmyk))
}
