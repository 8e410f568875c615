
use super::Quaternion;
use crate::base::Real;

pub(super) const ACCURACY: Real = Quaternion::EPSILON;

pub(super) fn assert_close(actual: Real, expected: Real) {
    assert!(
        (actual - expected).abs() <= ACCURACY,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn check_values(q: &Quaternion, q0: Real, q1: Real, q2: Real, q3: Real) {
    assert_close(q.q0, q0);
    assert_close(q.q1, q1);
    assert_close(q.q2, q2);
    assert_close(q.q3, q3);
}
