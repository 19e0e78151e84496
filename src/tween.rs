//! Time-bounded, supersedable value transitions.
//!
//! Every transition in the experience (camera moves, section visibility,
//! click pulses) is a `Tween` sampled against the single simulation clock.
//! Starting a new tween on the same target simply replaces the old one,
//! and because tweens always start from the current live value there is
//! never a discontinuity.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    InOutCubic,
    OutQuad,
    /// Overshoots past the end value, then settles back onto it.
    OutBack,
}

impl Easing {
    /// Map normalized progress `t` in [0, 1] to an eased fraction.
    /// `OutBack` intentionally exceeds 1.0 before settling.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::OutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

/// A scalar transition over the simulation clock. Sampling before the
/// start time (stagger delay) returns the start value; sampling past the
/// end returns the end value exactly.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
    pub start_time: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: f32, end: f32, start_time: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
            easing,
        }
    }

    pub fn sample(&self, now: f32) -> f32 {
        if now <= self.start_time {
            return self.start;
        }
        let t = (now - self.start_time) / self.duration.max(1e-6);
        if t >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    pub fn finished(&self, now: f32) -> bool {
        now >= self.start_time + self.duration
    }
}

/// Vector-valued counterpart used by camera transitions.
#[derive(Clone, Copy, Debug)]
pub struct Tween3 {
    pub start: Vec3,
    pub end: Vec3,
    pub start_time: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl Tween3 {
    pub fn new(start: Vec3, end: Vec3, start_time: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            start_time,
            duration,
            easing,
        }
    }

    pub fn sample(&self, now: f32) -> Vec3 {
        if now <= self.start_time {
            return self.start;
        }
        let t = (now - self.start_time) / self.duration.max(1e-6);
        if t >= 1.0 {
            return self.end;
        }
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    pub fn finished(&self, now: f32) -> bool {
        now >= self.start_time + self.duration
    }
}
