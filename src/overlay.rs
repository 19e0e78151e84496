//! Optional performance readout. Polled once per frame with frame timing;
//! purely observational, no feedback into the experience.

use web_sys as web;

pub struct PerfOverlay {
    element: Option<web::Element>,
    fps_smoothed: f32,
    frames_since_write: u32,
}

impl PerfOverlay {
    pub fn new(document: &web::Document) -> Self {
        Self {
            element: document.get_element_by_id("perf-overlay"),
            fps_smoothed: 60.0,
            frames_since_write: 0,
        }
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if dt_sec > 0.0 {
            self.fps_smoothed = self.fps_smoothed * 0.95 + (1.0 / dt_sec) * 0.05;
        }
        self.frames_since_write += 1;
        // Rewriting the DOM every frame is wasteful; every ~15 is plenty
        if self.frames_since_write >= 15 {
            self.frames_since_write = 0;
            if let Some(el) = &self.element {
                el.set_text_content(Some(&format!("{:.0} fps", self.fps_smoothed)));
            }
        }
    }
}
