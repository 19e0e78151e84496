/// Scene, animation and interaction tuning constants.
///
/// These express intended behavior (time constants, amplitudes, clamp
/// limits) and keep magic numbers out of the code.
use glam::Vec3;

// Section layout
pub const SECTION_COUNT: usize = 5;
pub const SECTION_SPACING: f32 = 40.0; // world-space X distance between section anchors

#[inline]
pub fn section_anchor(index: usize) -> Vec3 {
    Vec3::new(index as f32 * SECTION_SPACING, 0.0, 0.0)
}

// Animation amplitudes and rates
pub const ORBIT_BOB_AMPLITUDE: f32 = 0.5; // vertical bob layered on orbital motion
pub const FLOAT_AMPLITUDE: f32 = 0.002; // per-call increment; cumulative by design
pub const HOVER_BOB_AMPLITUDE: f32 = 0.25;
pub const PULSE_SCALE_AMPLITUDE: f32 = 0.18;
pub const WAVE_RATE: f32 = 2.0; // shared sin() rate for float/bob/pulse rules

// Camera
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_TRANSITION_SEC: f32 = 1.5;
pub const PARALLAX_STRENGTH_X: f32 = 0.9;
pub const PARALLAX_STRENGTH_Y: f32 = 0.5;
pub const PARALLAX_SMOOTHING: f32 = 0.05; // per-call exponential blend toward target
pub const LOOK_SMOOTHING: f32 = 0.08;

// Section transitions
pub const HIDE_DURATION_SEC: f32 = 0.5;
pub const SHOW_DURATION_SEC: f32 = 0.5;
pub const SHOW_STAGGER_SEC: f32 = 0.05; // per-primitive delay within the target section
pub const WHEEL_DEBOUNCE_SEC: f32 = 0.1; // quiet window; one gesture, one step

// Interaction feedback
pub const HOVER_EMISSIVE: f32 = 0.9;
pub const CLICK_PULSE_SCALE: f32 = 1.2;
pub const CLICK_PULSE_SEC: f32 = 0.15;
pub const RIPPLE_LIFETIME_SEC: f32 = 1.0;
pub const RIPPLE_EXPAND_RATE: f32 = 3.0; // world units of radius gained per second

// Procedural build parameters
pub const HERO_SATELLITE_COUNT: usize = 6;
pub const HERO_STAR_COUNT: usize = 120;
pub const HERO_STAR_SHELL_MIN: f32 = 8.0;
pub const HERO_STAR_SHELL_MAX: f32 = 18.0;
pub const ABOUT_CUBE_COUNT: usize = 8;
pub const PROJECT_PANEL_COLS: usize = 3;
pub const PROJECT_PANEL_ROWS: usize = 2;
pub const SKILL_NODE_COUNT: usize = 10;
pub const CONTACT_PARTICLE_COUNT: usize = 24;

// Per-section base palettes (rgb)
pub const PALETTES: [[[f32; 3]; 3]; SECTION_COUNT] = [
    // Hero: violet / cyan
    [[0.55, 0.35, 0.95], [0.25, 0.85, 0.95], [0.9, 0.9, 1.0]],
    // About: amber / teal
    [[0.95, 0.65, 0.25], [0.2, 0.75, 0.65], [0.95, 0.9, 0.8]],
    // Projects: blue / slate
    [[0.3, 0.5, 0.95], [0.55, 0.6, 0.75], [0.85, 0.9, 1.0]],
    // Skills: green / lime
    [[0.3, 0.85, 0.45], [0.7, 0.9, 0.3], [0.9, 1.0, 0.85]],
    // Contact: rose / magenta
    [[0.95, 0.35, 0.5], [0.8, 0.3, 0.85], [1.0, 0.85, 0.9]],
];
