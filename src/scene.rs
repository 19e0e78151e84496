//! Scene data model and the procedural object builder.
//!
//! The five sections and their primitives are built once at startup from
//! hardcoded parametric rules plus a caller-supplied RNG. Membership is
//! fixed for the lifetime of the scene; only transforms, materials and
//! visibility mutate afterwards. These types are platform-independent and
//! natively testable.

use crate::constants::*;
use crate::tween::Tween;
use glam::{Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Skills => 3,
            SectionId::Contact => 4,
        }
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Stable slug used for nav-link element ids (`#nav-hero` etc.).
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum GeometryKind {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
    Ring { inner: f32, outer: f32 },
    Torus { radius: f32, tube: f32 },
    Point { size: f32 },
}

impl GeometryKind {
    /// Nominal world-space radius, used for render sizing and picking.
    pub fn bounding_radius(self) -> f32 {
        match self {
            GeometryKind::Sphere { radius } => radius,
            GeometryKind::Box { half_extents } => half_extents.length(),
            GeometryKind::Ring { outer, .. } => outer,
            GeometryKind::Torus { radius, tube } => radius + tube,
            GeometryKind::Point { size } => size,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: f32,
    pub alpha: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn solid(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: 0.0,
            alpha: 1.0,
            metalness: 0.3,
            roughness: 0.6,
        }
    }

    pub fn emissive(color: [f32; 3], emissive: f32) -> Self {
        Self {
            emissive,
            ..Self::solid(color)
        }
    }
}

/// Per-frame motion rule. Exactly one per primitive, matched exhaustively
/// by the animator.
#[derive(Clone, Copy, Debug)]
pub enum AnimationTag {
    /// Position recomputed purely from elapsed time (idempotent).
    Orbit {
        center: Vec3,
        angle: f32,
        radius: f32,
        speed: f32,
    },
    /// Vertical drift accumulated per update call (intentionally
    /// frame-rate dependent, unlike Orbit).
    Float { phase_offset: f32 },
    /// Absolute bob around a remembered base height.
    HoverBob { base_y: f32 },
    /// Uniform breathing of the animation scale.
    PulseScale { delay: f32 },
    /// Constant-rate rotation, assigned absolutely from elapsed time so
    /// pausing and resuming never jumps.
    StaticSpin { axis: Vec3, rate: f32 },
    Fixed,
}

pub struct Primitive {
    pub geometry: GeometryKind,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Quat,
    /// Animation scale; written by PulseScale, 1.0 otherwise.
    pub scale: f32,
    /// Section-transition factor in [0, 1] (transiently above 1 while the
    /// show easing overshoots). Multiplied into the rendered scale.
    pub visibility: f32,
    pub vis_tween: Option<Tween>,
    /// Transient click-feedback multiplier, reverted by the picker.
    pub pulse: f32,
    pub pick_radius: f32,
    pub tag: AnimationTag,
}

impl Primitive {
    pub fn new(geometry: GeometryKind, material: Material, position: Vec3, tag: AnimationTag) -> Self {
        Self {
            geometry,
            material,
            position,
            rotation: Quat::IDENTITY,
            scale: 1.0,
            visibility: 0.0,
            vis_tween: None,
            pulse: 1.0,
            pick_radius: geometry.bounding_radius(),
            tag,
        }
    }

    /// Scale actually rendered: animation scale gated by section
    /// visibility and the click pulse.
    #[inline]
    pub fn effective_scale(&self) -> f32 {
        self.scale * self.visibility.max(0.0) * self.pulse
    }
}

pub struct Section {
    pub id: SectionId,
    pub anchor: Vec3,
    pub primitives: Vec<Primitive>,
}

/// Short-lived expanding ring spawned by clicks; removed and released
/// after `RIPPLE_LIFETIME_SEC`.
#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub position: Vec3,
    pub born_at: f32,
    pub radius: f32,
    pub alpha: f32,
    pub color: [f32; 3],
}

/// Counts live geometry/material allocations so teardown leaks are
/// observable. Every primitive and ripple holds one of each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceLedger {
    pub geometries: usize,
    pub materials: usize,
}

impl ResourceLedger {
    fn acquire(&mut self) {
        self.geometries += 1;
        self.materials += 1;
    }

    fn release(&mut self) {
        self.geometries = self.geometries.saturating_sub(1);
        self.materials = self.materials.saturating_sub(1);
    }

    pub fn live(&self) -> usize {
        self.geometries + self.materials
    }
}

pub struct Scene {
    pub sections: Vec<Section>,
    pub ripples: SmallVec<[Ripple; 4]>,
    pub resources: ResourceLedger,
}

impl Scene {
    /// Build every section from its parametric rules. Construction cannot
    /// fail; the Hero section starts visible, all others hidden.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut scene = Scene {
            sections: Vec::with_capacity(SECTION_COUNT),
            ripples: SmallVec::new(),
            resources: ResourceLedger::default(),
        };
        for id in SectionId::ALL {
            let anchor = section_anchor(id.index());
            let primitives = match id {
                SectionId::Hero => build_hero(anchor, rng),
                SectionId::About => build_about(anchor),
                SectionId::Projects => build_projects(anchor),
                SectionId::Skills => build_skills(anchor, rng),
                SectionId::Contact => build_contact(anchor, rng),
            };
            for _ in &primitives {
                scene.resources.acquire();
            }
            scene.sections.push(Section {
                id,
                anchor,
                primitives,
            });
        }
        for p in &mut scene.sections[SectionId::Hero.index()].primitives {
            p.visibility = 1.0;
        }
        scene
    }

    #[inline]
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }

    #[inline]
    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.sections[id.index()]
    }

    pub fn spawn_ripple(&mut self, position: Vec3, color: [f32; 3], now: f32) {
        self.resources.acquire();
        self.ripples.push(Ripple {
            position,
            born_at: now,
            radius: 0.0,
            alpha: 1.0,
            color,
        });
    }

    /// Advance ripple expansion/fade and release any that outlived their
    /// fixed lifetime.
    pub fn update_ripples(&mut self, now: f32) {
        let resources = &mut self.resources;
        self.ripples.retain(|r| {
            let age = now - r.born_at;
            if age >= RIPPLE_LIFETIME_SEC {
                resources.release();
                return false;
            }
            true
        });
        for r in &mut self.ripples {
            let age = now - r.born_at;
            r.radius = age * RIPPLE_EXPAND_RATE;
            r.alpha = 1.0 - age / RIPPLE_LIFETIME_SEC;
        }
    }

    /// Tear down the whole scene, releasing every allocation.
    pub fn dispose(&mut self) {
        for section in &mut self.sections {
            for _ in section.primitives.drain(..) {
                self.resources.release();
            }
        }
        for _ in self.ripples.drain(..) {
            self.resources.release();
        }
    }
}

// ---------------- per-section builders ----------------

fn build_hero(anchor: Vec3, rng: &mut impl Rng) -> Vec<Primitive> {
    let palette = PALETTES[0];
    let mut out = Vec::new();

    // Central emissive orb
    out.push(Primitive::new(
        GeometryKind::Sphere { radius: 1.4 },
        Material::emissive(palette[0], 0.6),
        anchor,
        AnimationTag::StaticSpin {
            axis: Vec3::Y,
            rate: 0.3,
        },
    ));

    // Orbiting satellites, evenly phased
    for i in 0..HERO_SATELLITE_COUNT {
        let angle = i as f32 / HERO_SATELLITE_COUNT as f32 * std::f32::consts::TAU;
        let radius = 3.2 + (i % 2) as f32 * 0.8;
        let mut p = Primitive::new(
            GeometryKind::Sphere { radius: 0.35 },
            Material::emissive(palette[1], 0.3),
            anchor + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
            AnimationTag::Orbit {
                center: anchor,
                angle,
                radius,
                speed: 0.5,
            },
        );
        p.material.metalness = 0.7;
        out.push(p);
    }

    // Starfield shell; positions randomized, so assertions about it are
    // statistical (count, shell bounds) rather than exact.
    for _ in 0..HERO_STAR_COUNT {
        let dir = random_unit_vector(rng);
        let dist = rng.gen_range(HERO_STAR_SHELL_MIN..HERO_STAR_SHELL_MAX);
        out.push(Primitive::new(
            GeometryKind::Point { size: 0.05 },
            Material::emissive(palette[2], 0.8),
            anchor + dir * dist,
            AnimationTag::Float {
                phase_offset: rng.gen_range(0.0..std::f32::consts::TAU),
            },
        ));
    }
    out
}

fn build_about(anchor: Vec3) -> Vec<Primitive> {
    let palette = PALETTES[1];
    let mut out = Vec::new();

    out.push(Primitive::new(
        GeometryKind::Torus {
            radius: 1.2,
            tube: 0.35,
        },
        Material::emissive(palette[0], 0.4),
        anchor,
        AnimationTag::StaticSpin {
            axis: Vec3::new(1.0, 0.4, 0.0).normalize(),
            rate: 0.45,
        },
    ));

    for i in 0..ABOUT_CUBE_COUNT {
        let angle = i as f32 / ABOUT_CUBE_COUNT as f32 * std::f32::consts::TAU;
        let radius = 3.0;
        out.push(Primitive::new(
            GeometryKind::Box {
                half_extents: Vec3::splat(0.4),
            },
            Material::solid(palette[1]),
            anchor + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
            AnimationTag::Float {
                phase_offset: angle,
            },
        ));
    }
    out
}

fn build_projects(anchor: Vec3) -> Vec<Primitive> {
    let palette = PALETTES[2];
    let mut out = Vec::new();

    for row in 0..PROJECT_PANEL_ROWS {
        for col in 0..PROJECT_PANEL_COLS {
            let x = (col as f32 - (PROJECT_PANEL_COLS - 1) as f32 / 2.0) * 2.6;
            let y = (row as f32 - (PROJECT_PANEL_ROWS - 1) as f32 / 2.0) * 2.2;
            let pos = anchor + Vec3::new(x, y, 0.0);
            out.push(Primitive::new(
                GeometryKind::Box {
                    half_extents: Vec3::new(1.0, 0.7, 0.08),
                },
                Material::solid(palette[0]),
                pos,
                AnimationTag::HoverBob { base_y: pos.y },
            ));
        }
    }

    // Accent ring behind the grid
    out.push(Primitive::new(
        GeometryKind::Ring {
            inner: 4.2,
            outer: 4.5,
        },
        Material::emissive(palette[1], 0.5),
        anchor + Vec3::new(0.0, 0.0, -2.0),
        AnimationTag::StaticSpin {
            axis: Vec3::Z,
            rate: 0.15,
        },
    ));
    out
}

fn build_skills(anchor: Vec3, rng: &mut impl Rng) -> Vec<Primitive> {
    let palette = PALETTES[3];
    let mut out = Vec::new();

    out.push(Primitive::new(
        GeometryKind::Sphere { radius: 0.9 },
        Material::emissive(palette[0], 0.5),
        anchor,
        AnimationTag::PulseScale { delay: 0.0 },
    ));

    for i in 0..SKILL_NODE_COUNT {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = 2.0 + i as f32 * 0.35;
        let mut p = Primitive::new(
            GeometryKind::Sphere { radius: 0.3 },
            Material::solid(palette[1]),
            anchor + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius),
            AnimationTag::Orbit {
                center: anchor,
                angle,
                radius,
                speed: 0.8 - i as f32 * 0.05,
            },
        );
        p.material.emissive = 0.2;
        out.push(p);

        // Each orbiter carries a pulsing halo node at a fixed offset
        if i % 3 == 0 {
            out.push(Primitive::new(
                GeometryKind::Sphere { radius: 0.15 },
                Material::emissive(palette[2], 0.7),
                anchor + Vec3::new(angle.cos() * radius, 0.8, angle.sin() * radius),
                AnimationTag::PulseScale {
                    delay: i as f32 * 0.4,
                },
            ));
        }
    }
    out
}

fn build_contact(anchor: Vec3, rng: &mut impl Rng) -> Vec<Primitive> {
    let palette = PALETTES[4];
    let mut out = Vec::new();

    out.push(Primitive::new(
        GeometryKind::Torus {
            radius: 1.6,
            tube: 0.25,
        },
        Material::emissive(palette[0], 0.55),
        anchor,
        AnimationTag::StaticSpin {
            axis: Vec3::new(0.3, 1.0, 0.2).normalize(),
            rate: 0.6,
        },
    ));

    for _ in 0..CONTACT_PARTICLE_COUNT {
        let offset = Vec3::new(
            rng.gen_range(-4.0..4.0),
            rng.gen_range(-2.5..2.5),
            rng.gen_range(-3.0..1.0),
        );
        out.push(Primitive::new(
            GeometryKind::Point { size: 0.08 },
            Material::emissive(palette[1], 0.6),
            anchor + offset,
            AnimationTag::Float {
                phase_offset: rng.gen_range(0.0..std::f32::consts::TAU),
            },
        ));
    }
    out
}

fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    // Rejection sampling keeps the shell distribution uniform
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0_f32),
            rng.gen_range(-1.0..1.0_f32),
            rng.gen_range(-1.0..1.0_f32),
        );
        let len = v.length();
        if len > 1e-3 && len <= 1.0 {
            return v / len;
        }
    }
}
