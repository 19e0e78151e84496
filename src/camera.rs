//! Camera controller: per-section poses, eased transitions, pointer
//! parallax, and the matrices/rays the renderer and picker build on.

use crate::constants::*;
use crate::scene::SectionId;
use crate::tween::{Easing, Tween3};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Target pose associated with a section; immutable after configuration.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_at: Vec3,
}

/// One pose per section. Views stay roughly down -Z so the billboarded
/// primitives read well from every section.
pub fn section_pose(index: usize) -> Option<CameraPose> {
    let id = SectionId::from_index(index)?;
    let anchor = section_anchor(index);
    let pose = match id {
        SectionId::Hero => CameraPose {
            eye: anchor + Vec3::new(0.0, 1.2, 12.0),
            look_at: anchor,
        },
        SectionId::About => CameraPose {
            eye: anchor + Vec3::new(1.5, 2.0, 10.0),
            look_at: anchor + Vec3::new(0.0, 0.5, 0.0),
        },
        SectionId::Projects => CameraPose {
            eye: anchor + Vec3::new(0.0, 0.5, 9.0),
            look_at: anchor,
        },
        SectionId::Skills => CameraPose {
            eye: anchor + Vec3::new(-1.0, 3.0, 11.0),
            look_at: anchor + Vec3::new(0.0, 0.3, 0.0),
        },
        SectionId::Contact => CameraPose {
            eye: anchor + Vec3::new(0.0, 1.8, 8.5),
            look_at: anchor,
        },
    };
    Some(pose)
}

/// Live camera state. Section transitions tween the *base* pose; each
/// frame the live eye is exponentially smoothed toward base + parallax,
/// so a transition started mid-flight retargets without discontinuity.
pub struct CameraRig {
    base_eye: Vec3,
    base_look: Vec3,
    eye: Vec3,
    look_at: Vec3,
    eye_tween: Option<Tween3>,
    look_tween: Option<Tween3>,
    parallax: Vec3,
}

impl CameraRig {
    pub fn new() -> Self {
        let pose = section_pose(0).unwrap_or(CameraPose {
            eye: Vec3::new(0.0, 0.0, 10.0),
            look_at: Vec3::ZERO,
        });
        Self {
            base_eye: pose.eye,
            base_look: pose.look_at,
            eye: pose.eye,
            look_at: pose.look_at,
            eye_tween: None,
            look_tween: None,
            parallax: Vec3::ZERO,
        }
    }

    /// Start concurrent eased transitions of eye and look-at toward the
    /// section's pose. Out-of-range indices are a silent no-op. A new call
    /// supersedes any in-flight transition, restarting from the current
    /// base values.
    pub fn move_to_section(&mut self, index: usize, now: f32) {
        let Some(pose) = section_pose(index) else {
            return;
        };
        self.eye_tween = Some(Tween3::new(
            self.base_eye,
            pose.eye,
            now,
            CAMERA_TRANSITION_SEC,
            Easing::InOutCubic,
        ));
        self.look_tween = Some(Tween3::new(
            self.base_look,
            pose.look_at,
            now,
            CAMERA_TRANSITION_SEC,
            Easing::InOutCubic,
        ));
    }

    /// Per-frame update. The parallax offset is recomputed from the raw
    /// pointer NDC every call (only the resulting position is smoothed,
    /// never the input itself).
    pub fn update(&mut self, pointer_ndc: Vec2, now: f32) {
        if let Some(tw) = self.eye_tween {
            self.base_eye = tw.sample(now);
            if tw.finished(now) {
                self.eye_tween = None;
            }
        }
        if let Some(tw) = self.look_tween {
            self.base_look = tw.sample(now);
            if tw.finished(now) {
                self.look_tween = None;
            }
        }
        self.parallax = Vec3::new(
            pointer_ndc.x * PARALLAX_STRENGTH_X,
            pointer_ndc.y * PARALLAX_STRENGTH_Y,
            0.0,
        );
        let eye_target = self.base_eye + self.parallax;
        self.eye += (eye_target - self.eye) * PARALLAX_SMOOTHING;
        self.look_at += (self.base_look - self.look_at) * LOOK_SMOOTHING;
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    #[inline]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn transitioning(&self) -> bool {
        self.eye_tween.is_some() || self.look_tween.is_some()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray from the eye through a pointer position in NDC
    /// ([-1,1] on both axes, +y up).
    pub fn screen_ray(&self, ndc: Vec2, aspect: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj(aspect).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        let dir = (far - self.eye).normalize();
        (self.eye, dir)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
