// Host-side tests for the camera rig: transitions, superseding, parallax
// and ray construction.

use folio_web::camera::{section_pose, CameraRig};
use folio_web::constants::*;
use glam::Vec2;

const FRAME: f32 = 1.0 / 60.0;

fn settle(rig: &mut CameraRig, ndc: Vec2, from: f32, to: f32) {
    let mut t = from;
    while t < to {
        rig.update(ndc, t);
        t += FRAME;
    }
}

#[test]
fn pose_table_covers_exactly_five_sections() {
    for i in 0..SECTION_COUNT {
        assert!(section_pose(i).is_some(), "missing pose {}", i);
    }
    assert!(section_pose(SECTION_COUNT).is_none());
}

#[test]
fn out_of_range_move_is_a_noop() {
    let mut rig = CameraRig::new();
    rig.move_to_section(99, 0.0);
    assert!(!rig.transitioning());
}

#[test]
fn transition_reaches_target_pose() {
    let mut rig = CameraRig::new();
    rig.move_to_section(2, 0.0);
    assert!(rig.transitioning());
    settle(&mut rig, Vec2::ZERO, 0.0, CAMERA_TRANSITION_SEC + 5.0);
    assert!(!rig.transitioning());

    let pose = section_pose(2).unwrap();
    assert!((rig.eye() - pose.eye).length() < 1e-3);
    assert!((rig.look_at() - pose.look_at).length() < 1e-3);
}

#[test]
fn retarget_mid_flight_restarts_from_live_value() {
    let mut rig = CameraRig::new();
    let hero = section_pose(0).unwrap();
    rig.move_to_section(4, 0.0);
    settle(&mut rig, Vec2::ZERO, 0.0, 0.75);
    let mid = rig.eye();
    assert!((mid - hero.eye).length() > 1.0, "should be under way");

    // Supersede: eventually lands on the new target with no residue of
    // the abandoned transition.
    rig.move_to_section(1, 0.75);
    settle(&mut rig, Vec2::ZERO, 0.75, 0.75 + CAMERA_TRANSITION_SEC + 5.0);
    let about = section_pose(1).unwrap();
    assert!((rig.eye() - about.eye).length() < 1e-3);
}

#[test]
fn parallax_offsets_the_settled_eye() {
    let mut rig = CameraRig::new();
    let hero = section_pose(0).unwrap();
    settle(&mut rig, Vec2::new(1.0, 0.0), 0.0, 10.0);
    assert!((rig.eye().x - (hero.eye.x + PARALLAX_STRENGTH_X)).abs() < 1e-3);

    // Moving the pointer back re-centers; only the position is smoothed,
    // the offset itself follows the raw input immediately.
    settle(&mut rig, Vec2::ZERO, 10.0, 20.0);
    assert!((rig.eye() - hero.eye).length() < 1e-3);
}

#[test]
fn center_ray_points_at_look_target() {
    let mut rig = CameraRig::new();
    settle(&mut rig, Vec2::ZERO, 0.0, 5.0);
    let (origin, dir) = rig.screen_ray(Vec2::ZERO, 16.0 / 9.0);
    assert_eq!(origin, rig.eye());
    let expected = (rig.look_at() - rig.eye()).normalize();
    assert!((dir - expected).length() < 1e-4);
}
