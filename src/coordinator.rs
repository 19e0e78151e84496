//! Section coordinator: owns the current-section state machine and
//! orchestrates transitions across camera pose and object visibility.
//!
//! Transitions are any-to-any. On a change, every primitive in the scene
//! gets a hide tween toward visibility 0 and the target section's
//! primitives get a staggered, overshooting show tween toward 1. The show
//! tween supersedes the hide tween on the target section, so the two
//! phases need no sequencing: a newly shown primitive simply starts from
//! whatever visibility it currently has.

use crate::camera::CameraRig;
use crate::constants::*;
use crate::scene::{Scene, SectionId};
use crate::tween::{Easing, Tween};

pub struct SectionCoordinator {
    current: SectionId,
    last_wheel_nav: f32,
}

impl SectionCoordinator {
    pub fn new() -> Self {
        Self {
            current: SectionId::Hero,
            last_wheel_nav: f32::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Navigate to a section by index. Out-of-range targets and requests
    /// for the already-active section are silent no-ops. Returns whether
    /// the active section changed, so the caller can mirror the state
    /// into the page markup.
    pub fn navigate_to(
        &mut self,
        index: usize,
        scene: &mut Scene,
        camera: &mut CameraRig,
        now: f32,
    ) -> bool {
        let Some(target) = SectionId::from_index(index) else {
            return false;
        };
        if target == self.current {
            return false;
        }
        self.current = target;
        camera.move_to_section(index, now);

        // Hide everything, then overwrite the target section with
        // staggered show tweens. Both run on the same clock.
        for section in &mut scene.sections {
            for p in &mut section.primitives {
                p.vis_tween = Some(Tween::new(
                    p.visibility,
                    0.0,
                    now,
                    HIDE_DURATION_SEC,
                    Easing::OutQuad,
                ));
            }
        }
        for (i, p) in scene.sections[index].primitives.iter_mut().enumerate() {
            p.vis_tween = Some(Tween::new(
                p.visibility,
                1.0,
                now + i as f32 * SHOW_STAGGER_SEC,
                SHOW_DURATION_SEC,
                Easing::OutBack,
            ));
        }
        true
    }

    /// Relative navigation, clamped at the ends (no wraparound).
    pub fn step(
        &mut self,
        delta: i32,
        scene: &mut Scene,
        camera: &mut CameraRig,
        now: f32,
    ) -> bool {
        let next = self.current.index() as i32 + delta;
        if next < 0 || next >= SECTION_COUNT as i32 {
            return false;
        }
        self.navigate_to(next as usize, scene, camera, now)
    }

    /// Primary call-to-action shortcut; always targets the About section.
    pub fn activate_cta(&mut self, scene: &mut Scene, camera: &mut CameraRig, now: f32) -> bool {
        self.navigate_to(SectionId::About.index(), scene, camera, now)
    }

    /// Wheel-driven step with a quiet-window debounce so one physical
    /// gesture produces a single section jump. Every event refreshes the
    /// window, so inertial scrolls that keep emitting events stay
    /// swallowed until the stream goes quiet.
    pub fn wheel(
        &mut self,
        direction: i32,
        scene: &mut Scene,
        camera: &mut CameraRig,
        now: f32,
    ) -> bool {
        let debounced = now - self.last_wheel_nav < WHEEL_DEBOUNCE_SEC;
        self.last_wheel_nav = now;
        if debounced {
            return false;
        }
        self.step(direction.signum(), scene, camera, now)
    }

    /// Sample every in-flight visibility tween; finished tweens land on
    /// their end value exactly and are dropped.
    pub fn update(&self, scene: &mut Scene, now: f32) {
        for section in &mut scene.sections {
            for p in &mut section.primitives {
                if let Some(tw) = p.vis_tween {
                    p.visibility = tw.sample(now);
                    if tw.finished(now) {
                        p.vis_tween = None;
                    }
                }
            }
        }
    }
}

impl Default for SectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
