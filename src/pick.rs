//! Pointer interaction resolver: hover highlighting, click feedback, and
//! the transient effects both spawn.
//!
//! Rays are cast against the active section's primitives only; inactive
//! sections keep existing and animating but never receive interaction.
//! All feedback timing (pulse revert, ripple lifetime) is scheduled
//! against the simulation clock rather than host timers, so the whole
//! resolver is deterministic under a fake clock.

use crate::constants::*;
use crate::input::ray_sphere;
use crate::scene::{Scene, SectionId};
use glam::Vec3;
use smallvec::SmallVec;

/// The at-most-one hovered primitive, identified by indices rather than
/// an owning reference, plus the snapshot needed to revert on exit.
#[derive(Clone, Copy, Debug)]
struct Hover {
    section: usize,
    index: usize,
    prev_emissive: f32,
}

#[derive(Clone, Copy, Debug)]
struct PendingPulse {
    section: usize,
    index: usize,
    revert_at: f32,
}

#[derive(Default)]
pub struct Picker {
    hover: Option<Hover>,
    pulses: SmallVec<[PendingPulse; 2]>,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently hovered primitive within the active
    /// section, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.map(|h| h.index)
    }

    /// Re-cast the hover ray. Entering a new target restores the previous
    /// one first, then snapshots and overrides the new target's emissive;
    /// a miss restores and clears.
    pub fn resolve(
        &mut self,
        scene: &mut Scene,
        ray_origin: Vec3,
        ray_dir: Vec3,
        active: SectionId,
    ) -> Option<usize> {
        let hit = nearest_hit(scene, ray_origin, ray_dir, active);
        match (self.hover, hit) {
            (Some(h), Some(index)) if h.section == active.index() && h.index == index => {}
            (_, Some(index)) => {
                self.clear_hover(scene);
                let p = &mut scene.sections[active.index()].primitives[index];
                self.hover = Some(Hover {
                    section: active.index(),
                    index,
                    prev_emissive: p.material.emissive,
                });
                p.material.emissive = HOVER_EMISSIVE;
            }
            (_, None) => self.clear_hover(scene),
        }
        hit
    }

    /// Restore the pre-hover emissive snapshot, if any hover is live.
    pub fn clear_hover(&mut self, scene: &mut Scene) {
        if let Some(h) = self.hover.take() {
            if let Some(p) = scene.sections[h.section].primitives.get_mut(h.index) {
                p.material.emissive = h.prev_emissive;
            }
        }
    }

    /// Resolve a click with an independent cast (hover state is not
    /// reused). A hit triggers a brief scale pulse on the target and
    /// spawns an expanding ring ripple at the hit position.
    pub fn click(
        &mut self,
        scene: &mut Scene,
        ray_origin: Vec3,
        ray_dir: Vec3,
        active: SectionId,
        now: f32,
    ) -> Option<usize> {
        let index = nearest_hit(scene, ray_origin, ray_dir, active)?;
        let (position, color) = {
            let p = &mut scene.sections[active.index()].primitives[index];
            p.pulse = CLICK_PULSE_SCALE;
            (p.position, p.material.color)
        };
        // One pending revert per primitive; a re-click extends the pulse
        self.pulses
            .retain(|pp| !(pp.section == active.index() && pp.index == index));
        self.pulses.push(PendingPulse {
            section: active.index(),
            index,
            revert_at: now + CLICK_PULSE_SEC,
        });
        scene.spawn_ripple(position, color, now);
        Some(index)
    }

    /// Run due timed tasks: revert expired click pulses and advance or
    /// expire ripples (releasing their resources).
    pub fn update(&mut self, scene: &mut Scene, now: f32) {
        let mut i = 0;
        while i < self.pulses.len() {
            if now >= self.pulses[i].revert_at {
                let pp = self.pulses.swap_remove(i);
                if let Some(p) = scene.sections[pp.section].primitives.get_mut(pp.index) {
                    p.pulse = 1.0;
                }
            } else {
                i += 1;
            }
        }
        scene.update_ripples(now);
    }
}

/// Nearest intersection of the ray with the active section's primitives.
fn nearest_hit(
    scene: &Scene,
    ray_origin: Vec3,
    ray_dir: Vec3,
    active: SectionId,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in scene.sections[active.index()].primitives.iter().enumerate() {
        if p.visibility <= 0.0 {
            continue;
        }
        if let Some(t) = ray_sphere(ray_origin, ray_dir, p.position, p.pick_radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
