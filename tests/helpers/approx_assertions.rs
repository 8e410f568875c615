//! Floating-point assertions with a fixed tolerance.

use sbbasis::{Quaternion, Real};

/// Tolerance used by every helper in this module.
pub const ACCURACY: Real = 1e-9;

/// Assert `actual` is within [`ACCURACY`] of `expected`.
pub fn assert_close(actual: Real, expected: Real) {
    assert!(
        (actual - expected).abs() <= ACCURACY,
        "Expected {} to be within {} of {}",
        actual,
        ACCURACY,
        expected
    );
}

/// Assert each coordinate is within [`ACCURACY`] of its expected value.
pub fn assert_coords(actual: [Real; 3], expected: [Real; 3]) {
    for (axis, (a, e)) in actual.into_iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= ACCURACY,
            "Coordinate {} differs: expected {:?}, got {:?}",
            axis,
            expected,
            actual
        );
    }
}

/// Assert two quaternions encode the same rotation (`q` and `-q` agree).
pub fn assert_same_rotation(actual: &Quaternion, expected: &Quaternion) {
    let distance = (*actual - *expected)
        .norm()
        .min((*actual + *expected).norm());
    assert!(
        distance <= ACCURACY,
        "Expected rotation {:?}, got {:?}",
        expected,
        actual
    );
}
