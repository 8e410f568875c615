//! Frame tree tests
//!
//! A spacecraft carrying a camera, both expressed relative to a base frame
//! that also holds the sun.

mod helpers;

use std::f64::consts::{FRAC_PI_2, PI};

use helpers::approx_assertions::*;
use sbbasis::{
    AngleUnit, Axis, Direction, DualQuaternion, Frame, FrameError, FrameId, FrameTree, Framed,
    LengthUnit, Orientation, Position, Quaternion, Real, Rotatable, Transformable,
};

struct Scene {
    tree: FrameTree,
    spacecraft: FrameId,
    camera: FrameId,
    sun: Position,
}

/// Sun 100 m along the base x axis; spacecraft at the base origin; camera
/// mounted 1 m above the spacecraft, looking along its own x axis.
fn scene() -> Scene {
    let mut tree = FrameTree::new();
    let base = tree.root();

    let spacecraft = tree
        .insert(Frame::from_orientation(&Orientation::identity(base)))
        .unwrap();
    let mount = Position::new(spacecraft, LengthUnit::Meter, 0.0, 0.0, 1.0);
    let camera = tree
        .insert_at(spacecraft, &mount, &Orientation::identity(spacecraft))
        .unwrap();
    let sun = Position::new(base, LengthUnit::Meter, 100.0, 0.0, 1.0);

    Scene {
        tree,
        spacecraft,
        camera,
        sun,
    }
}

/// Angle between the camera boresight and the line of sight to the sun.
fn sun_angle(scene: &Scene) -> Real {
    let sun = scene.sun.transform_to(&scene.tree, scene.camera).unwrap();
    let [x, y, z] = sun.coordinates();
    let line_of_sight = Direction::new(scene.camera, x, y, z).unwrap();
    let boresight = Direction::from_axis(scene.camera, Axis::X);
    boresight.angle_to(&line_of_sight).unwrap()
}

#[test]
fn test_camera_sees_sun_ahead() {
    let scene = scene();
    assert_eq!(scene.tree.depth(scene.camera).unwrap(), 2);
    let sun = scene.sun.transform_to(&scene.tree, scene.camera).unwrap();
    assert_coords(sun.coordinates(), [100.0, 0.0, 0.0]);
    assert_close(sun_angle(&scene), 0.0);
}

#[test]
fn test_spacecraft_slew_moves_camera() {
    let mut scene = scene();
    let slew = DualQuaternion::from_rotation(Quaternion::from_axis_angle(Axis::Z, FRAC_PI_2));
    scene.tree.set_placement(scene.spacecraft, slew).unwrap();

    let sun = scene.sun.transform_to(&scene.tree, scene.camera).unwrap();
    assert_coords(sun.coordinates(), [0.0, -100.0, 0.0]);
    assert_close(sun_angle(&scene), FRAC_PI_2);
}

#[test]
fn test_spacecraft_turns_away() {
    let mut scene = scene();
    let turn = DualQuaternion::from_rotation(Quaternion::from_axis_angle(Axis::Z, PI));
    scene.tree.set_placement(scene.spacecraft, turn).unwrap();
    // acos is ill-conditioned near -1
    assert!((sun_angle(&scene) - PI).abs() < 1e-6);
}

#[test]
fn test_camera_detached_keeps_view() {
    let mut scene = scene();
    scene.tree.transformed_to(scene.camera, FrameId::ROOT).unwrap();

    let slew = DualQuaternion::from_rotation(Quaternion::from_axis_angle(Axis::Z, FRAC_PI_2));
    scene.tree.set_placement(scene.spacecraft, slew).unwrap();

    assert!(!scene.tree.has_ancestor(scene.camera, scene.spacecraft).unwrap());
    assert_close(sun_angle(&scene), 0.0);
}

#[test]
fn test_boresight_in_base_frame() {
    let mut scene = scene();
    let boresight = Direction::from_axis(scene.camera, Axis::X);

    let tilt = Orientation::from_axis_angle(scene.spacecraft, Axis::Y, -90.0, AngleUnit::Degree);
    let placement = Frame::from_orientation(&tilt);
    scene
        .tree
        .set_placement(scene.spacecraft, placement.dual())
        .unwrap();

    let in_base = boresight.transform_to(&scene.tree, FrameId::ROOT).unwrap();
    assert_eq!(in_base.frame(), FrameId::ROOT);
    assert_coords(in_base.components(), [0.0, 0.0, 1.0]);
}

#[test]
fn test_rotate_position_about_frame_origin() {
    let scene = scene();
    let quarter =
        Orientation::from_axis_angle(FrameId::ROOT, Axis::Z, FRAC_PI_2, AngleUnit::Radian);
    let rotated = scene.sun.rotate(&scene.tree, &quarter).unwrap();
    assert_coords(rotated.coordinates(), [0.0, 100.0, 1.0]);
}

#[test]
fn test_errors_surface_through_public_api() {
    let scene = scene();
    let stranger = FrameId(77);
    assert_eq!(
        scene.sun.transform_to(&scene.tree, stranger).unwrap_err(),
        FrameError::UnknownFrame(stranger)
    );
    let message = FrameError::Cycle {
        frame: scene.spacecraft,
        target: scene.camera,
    }
    .to_string();
    assert_eq!(message, "Re-parenting frame#1 under frame#2 would create a cycle");
}

#[cfg(feature = "serde")]
#[test]
fn test_placements_serialize() {
    let scene = scene();
    let frame = *scene.tree.get(scene.camera).unwrap();
    let json = serde_json::to_string(&frame).unwrap();
    let restored: Frame = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, frame);
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialized_directions_are_normalized() {
    let d: Direction = serde_json::from_str(r#"{"frame":0,"x":3.0,"y":0.0,"z":4.0}"#).unwrap();
    assert_eq!(d.frame(), FrameId::ROOT);
    assert_coords(d.components(), [0.6, 0.0, 0.8]);

    let zero = serde_json::from_str::<Direction>(r#"{"frame":0,"x":0.0,"y":0.0,"z":0.0}"#);
    assert!(zero.unwrap_err().to_string().contains("zero length"));
}
