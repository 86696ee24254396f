//! Range checking and clamping shared by all representations.
//!
//! Out of range input never aborts an edit. Each offending value produces a
//! [`RangeWarning`] for the caller to show, and is then clamped and applied
//! like any other value. Someone typing `-5` into a field passes through `-`
//! first; that must not freeze the other fields.

use bitflags::bitflags;
use num_traits::{Bounded, NumCast};

use crate::{
    color::{Field, SourceGroup},
    state::Source,
};

/// Saturating clamp of `value` into `[lo, hi]`.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    num_traits::clamp(value, lo, hi)
}

/// Convert an already clamped value into a narrower channel type, saturating
/// at the bounds of that type.
pub(crate) fn saturate<T: Bounded + NumCast>(value: i64) -> T {
    num_traits::cast(value).unwrap_or_else(|| {
        if value < 0 {
            T::min_value()
        } else {
            T::max_value()
        }
    })
}

/// A value outside the valid interval of its field. Non-fatal: the value is
/// clamped and the edit proceeds.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {value} out of range [{min}; {max}]")]
pub struct RangeWarning {
    /// The field that received the value.
    pub field: Field,
    /// The value as submitted, before clamping.
    pub value: i64,
    /// Lower bound of the field.
    pub min: i64,
    /// Upper bound of the field.
    pub max: i64,
}

/// Check that `value` is within `[lo, hi]`. If it is not, a warning is pushed
/// to `warnings` and `false` is returned. Nothing is clamped here.
pub fn check_range(
    value: i64,
    lo: i64,
    hi: i64,
    field: Field,
    warnings: &mut Vec<RangeWarning>,
) -> bool {
    if (lo..=hi).contains(&value) {
        return true;
    }

    let warning = RangeWarning {
        field,
        value,
        min: lo,
        max: hi,
    };
    tracing::debug!(%warning, "value out of range");
    warnings.push(warning);

    false
}

bitflags! {
    /// Marks the channels of an edit that had to be clamped, in the order of
    /// [`SourceGroup::fields`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags : u8 {
        /// Set when the first channel was clamped.
        const C0_CLAMPED = 1 << 0;
        /// Set when the second channel was clamped.
        const C1_CLAMPED = 1 << 1;
        /// Set when the third channel was clamped.
        const C2_CLAMPED = 1 << 2;
        /// Set when the fourth channel (CMYK key) was clamped.
        const C3_CLAMPED = 1 << 3;
    }
}

impl Flags {
    /// The flag for the channel at `index`.
    pub fn channel(index: usize) -> Self {
        match index {
            0 => Flags::C0_CLAMPED,
            1 => Flags::C1_CLAMPED,
            2 => Flags::C2_CLAMPED,
            3 => Flags::C3_CLAMPED,
            _ => Flags::empty(),
        }
    }
}

/// The clamped source of an edit along with everything that was wrong with
/// the raw values.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated {
    /// The source representation, every channel within range.
    pub source: Source,
    /// One warning per out of range value.
    pub warnings: Vec<RangeWarning>,
    /// The channels that were clamped.
    pub clamped: Flags,
}

/// Range check and clamp raw values for `group`.
///
/// Values are matched to [`SourceGroup::fields`] by position. Missing values
/// count as zero, the same as an empty field; extra values are ignored.
pub fn validate(group: SourceGroup, values: &[i64]) -> Validated {
    let fields = group.fields();

    if values.len() > fields.len() {
        tracing::debug!(
            %group,
            expected = fields.len(),
            received = values.len(),
            "ignoring extra values"
        );
    }

    let mut warnings = Vec::new();
    let mut clamped = Flags::empty();
    let mut channels = [0_i64; 4];

    for (index, field) in fields.iter().enumerate() {
        let value = values.get(index).copied().unwrap_or(0);
        let (min, max) = field.range();

        if !check_range(value, min, max, *field, &mut warnings) {
            clamped |= Flags::channel(index);
        }

        channels[index] = clamp(value, min, max);
    }

    Validated {
        source: Source::from_channels(group, channels),
        warnings,
        clamped,
    }
}
