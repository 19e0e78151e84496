//! Per-frame animator.
//!
//! Applies every primitive's animation tag, across all sections, not just
//! the active one: hidden sections keep animating so that navigating back
//! resumes mid-motion instead of from a frozen pose.
//!
//! Note the deliberate asymmetry preserved from the original behavior:
//! `Orbit`, `HoverBob`, `PulseScale` and `StaticSpin` are pure functions
//! of elapsed time (re-running the same instant is idempotent), while
//! `Float` accumulates a small increment per call and therefore drifts
//! with frame-rate variance.

use crate::constants::*;
use crate::scene::{AnimationTag, Primitive, Scene};
use glam::Quat;

/// Advance every primitive to (or by, for `Float`) the given elapsed time.
pub fn advance(scene: &mut Scene, elapsed: f32) {
    for section in &mut scene.sections {
        for p in &mut section.primitives {
            advance_primitive(p, elapsed);
        }
    }
}

fn advance_primitive(p: &mut Primitive, elapsed: f32) {
    match p.tag {
        AnimationTag::Orbit {
            center,
            angle,
            radius,
            speed,
        } => {
            let a = angle + elapsed * speed;
            p.position.x = center.x + a.cos() * radius;
            p.position.z = center.z + a.sin() * radius;
            p.position.y = center.y + (elapsed + angle).sin() * ORBIT_BOB_AMPLITUDE;
        }
        AnimationTag::Float { phase_offset } => {
            p.position.y += (elapsed * WAVE_RATE + phase_offset).sin() * FLOAT_AMPLITUDE;
        }
        AnimationTag::HoverBob { base_y } => {
            p.position.y = base_y + (elapsed * WAVE_RATE).sin() * HOVER_BOB_AMPLITUDE;
        }
        AnimationTag::PulseScale { delay } => {
            p.scale = 1.0 + (elapsed * WAVE_RATE - delay).sin() * PULSE_SCALE_AMPLITUDE;
        }
        AnimationTag::StaticSpin { axis, rate } => {
            p.rotation = Quat::from_axis_angle(axis, elapsed * rate);
        }
        AnimationTag::Fixed => {}
    }
}
