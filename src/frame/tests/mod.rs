#![allow(clippy::unwrap_used)]


use std::f64::consts::FRAC_PI_2;

use super::{Frame, FrameId, FrameTree, Orientation, Position};
use crate::base::{AngleUnit, Axis, LengthUnit, Real};

const ACCURACY: Real = 1e-9;

fn assert_close(actual: Real, expected: Real) {
    assert!(
        (actual - expected).abs() <= ACCURACY,
        "expected {expected}, got {actual}"
    );
}

fn assert_coords(actual: [Real; 3], expected: [Real; 3]) {
    for (a, e) in actual.into_iter().zip(expected) {
        assert_close(a, e);
    }
}

/// A quarter turn about `axis` of the root frame.
fn quarter_turn(axis: Axis) -> Orientation {
    Orientation::from_axis_angle(FrameId::ROOT, axis, FRAC_PI_2, AngleUnit::Radian)
}

/// Insert a frame translated `x` meters along the parent's x axis.
fn translated(tree: &mut FrameTree, parent: FrameId, x: Real) -> FrameId {
    let position = Position::new(parent, LengthUnit::Meter, x, 0.0, 0.0);
    tree.insert(Frame::from_position(&position)).unwrap()
}

/// Insert a frame rotated `angle` radians about the parent's z axis.
fn rotated_z(tree: &mut FrameTree, parent: FrameId, angle: Real) -> FrameId {
    let orientation = Orientation::from_axis_angle(parent, Axis::Z, angle, AngleUnit::Radian);
    tree.insert(Frame::from_orientation(&orientation)).unwrap()
}
