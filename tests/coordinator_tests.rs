// Host-side tests for the section coordinator: state machine rules,
// visibility transitions and wheel debouncing.

use folio_web::camera::{section_pose, CameraRig};
use folio_web::constants::*;
use folio_web::coordinator::SectionCoordinator;
use folio_web::scene::{Scene, SectionId};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME: f32 = 1.0 / 60.0;

struct World {
    scene: Scene,
    camera: CameraRig,
    coordinator: SectionCoordinator,
}

impl World {
    fn new() -> Self {
        Self {
            scene: Scene::generate(&mut StdRng::seed_from_u64(7)),
            camera: CameraRig::new(),
            coordinator: SectionCoordinator::new(),
        }
    }

    fn run(&mut self, from: f32, to: f32) {
        let mut t = from;
        while t < to {
            self.coordinator.update(&mut self.scene, t);
            self.camera.update(Vec2::ZERO, t);
            t += FRAME;
        }
    }

    fn visibilities(&self, id: SectionId) -> Vec<f32> {
        self.scene
            .section(id)
            .primitives
            .iter()
            .map(|p| p.visibility)
            .collect()
    }
}

#[test]
fn starts_on_hero() {
    let w = World::new();
    assert_eq!(w.coordinator.current(), SectionId::Hero);
}

#[test]
fn navigate_is_idempotent_for_every_section() {
    for i in 0..SECTION_COUNT {
        let mut w = World::new();
        w.coordinator
            .navigate_to(i, &mut w.scene, &mut w.camera, 0.0);
        assert_eq!(w.coordinator.current().index(), i);
        // Second request for the active section is a no-op
        let changed = w
            .coordinator
            .navigate_to(i, &mut w.scene, &mut w.camera, 0.1);
        assert!(!changed);
        assert_eq!(w.coordinator.current().index(), i);
    }
}

#[test]
fn out_of_range_navigation_is_ignored() {
    let mut w = World::new();
    assert!(!w
        .coordinator
        .navigate_to(SECTION_COUNT, &mut w.scene, &mut w.camera, 0.0));
    assert_eq!(w.coordinator.current(), SectionId::Hero);
}

#[test]
fn stepping_clamps_at_both_ends() {
    let mut w = World::new();
    // Below zero from Hero
    assert!(!w.coordinator.step(-1, &mut w.scene, &mut w.camera, 0.0));
    assert_eq!(w.coordinator.current(), SectionId::Hero);

    // Walk to the end, then try to step past it
    for t in 1..SECTION_COUNT {
        w.coordinator
            .navigate_to(t, &mut w.scene, &mut w.camera, t as f32);
    }
    assert_eq!(w.coordinator.current(), SectionId::Contact);
    assert!(!w.coordinator.step(1, &mut w.scene, &mut w.camera, 10.0));
    assert_eq!(w.coordinator.current(), SectionId::Contact);
}

#[test]
fn cta_always_targets_about() {
    let mut w = World::new();
    w.coordinator
        .navigate_to(3, &mut w.scene, &mut w.camera, 0.0);
    assert!(w.coordinator.activate_cta(&mut w.scene, &mut w.camera, 1.0));
    assert_eq!(w.coordinator.current(), SectionId::About);
}

#[test]
fn wheel_is_debounced_within_quiet_window() {
    let mut w = World::new();
    assert!(w.coordinator.wheel(1, &mut w.scene, &mut w.camera, 0.0));
    // Second event 50 ms later: same gesture, swallowed
    assert!(!w.coordinator.wheel(1, &mut w.scene, &mut w.camera, 0.05));
    assert_eq!(w.coordinator.current(), SectionId::About);
    // Past the quiet window, a new gesture steps again
    assert!(w.coordinator.wheel(1, &mut w.scene, &mut w.camera, 0.3));
    assert_eq!(w.coordinator.current(), SectionId::Projects);
}

#[test]
fn continuous_wheel_stream_steps_once() {
    let mut w = World::new();
    // Inertial trackpad scroll: events every 60 ms for 360 ms. The stream
    // never goes quiet, so only the first event navigates.
    let mut steps = 0;
    for i in 0..7 {
        if w.coordinator
            .wheel(1, &mut w.scene, &mut w.camera, i as f32 * 0.06)
        {
            steps += 1;
        }
    }
    assert_eq!(steps, 1);
    assert_eq!(w.coordinator.current(), SectionId::About);
    // Once the stream has been quiet past the window, the next gesture
    // steps again.
    assert!(w.coordinator.wheel(1, &mut w.scene, &mut w.camera, 0.6));
    assert_eq!(w.coordinator.current(), SectionId::Projects);
}

#[test]
fn show_tween_overshoots_then_settles() {
    let mut w = World::new();
    w.coordinator
        .navigate_to(2, &mut w.scene, &mut w.camera, 0.0);
    // Track the first Projects primitive (no stagger delay) through its
    // show tween; back-out easing exceeds 1 before settling.
    let mut peak = 0.0_f32;
    let mut t = 0.0;
    while t < SHOW_DURATION_SEC {
        w.coordinator.update(&mut w.scene, t);
        peak = peak.max(w.scene.section(SectionId::Projects).primitives[0].visibility);
        t += FRAME / 4.0;
    }
    assert!(peak > 1.0, "expected overshoot, peak={}", peak);
    w.coordinator.update(&mut w.scene, SHOW_DURATION_SEC + 0.1);
    assert_eq!(
        w.scene.section(SectionId::Projects).primitives[0].visibility,
        1.0
    );
}

// Full round trip: Hero -> Projects -> Hero. Final camera pose matches
// the stored Hero pose, Hero is fully visible, Projects fully hidden.
#[test]
fn round_trip_restores_hero_exactly() {
    let mut w = World::new();

    w.coordinator
        .navigate_to(2, &mut w.scene, &mut w.camera, 0.0);
    w.run(0.0, 3.0);
    assert!(w.visibilities(SectionId::Hero).iter().all(|&v| v == 0.0));

    w.coordinator
        .navigate_to(0, &mut w.scene, &mut w.camera, 3.0);
    // Hero's stagger spans its whole primitive list; run well past it so
    // every show tween and the camera smoothing have settled.
    let hero_len = w.scene.section(SectionId::Hero).primitives.len();
    let settle_until = 3.0 + hero_len as f32 * SHOW_STAGGER_SEC + SHOW_DURATION_SEC + 6.0;
    w.run(3.0, settle_until);

    assert_eq!(w.coordinator.current(), SectionId::Hero);
    assert!(w.visibilities(SectionId::Hero).iter().all(|&v| v == 1.0));
    assert!(w
        .visibilities(SectionId::Projects)
        .iter()
        .all(|&v| v == 0.0));

    let hero = section_pose(0).unwrap();
    assert!((w.camera.eye() - hero.eye).length() < 1e-3);
    assert!((w.camera.look_at() - hero.look_at).length() < 1e-3);
}
