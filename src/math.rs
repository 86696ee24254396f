//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a transform from a 3x3 matrix. Each row holds the contribution of
/// one input component to the three output components.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    #[rustfmt::skip]
    let transform = Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    transform
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_input_contributions() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 2.0, 3.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );

        assert_eq!(transform(&M, Components(1.0, 0.0, 0.0)), Components(1.0, 2.0, 3.0));
        assert_eq!(transform(&M, Components(0.0, 1.0, 1.0)), Components(0.0, 1.0, 1.0));
    }
}
