//! Event wiring: pointer, wheel, nav links, keyboard, resize. Each
//! handler is a forgotten wasm-bindgen closure over shared
//! `Rc<RefCell<…>>` state; handlers and the frame callback interleave in
//! whatever order the host dispatches them.

pub mod nav;
pub mod pointer;

use crate::camera::CameraRig;
use crate::coordinator::SectionCoordinator;
use crate::dom;
use crate::input::PointerState;
use crate::pick::Picker;
use crate::scene::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub coordinator: Rc<RefCell<SectionCoordinator>>,
    pub camera: Rc<RefCell<CameraRig>>,
    pub picker: Rc<RefCell<Picker>>,
    pub pointer: Rc<RefCell<PointerState>>,
    /// Simulation clock epoch shared with the frame loop.
    pub epoch: Instant,
}

impl Wiring {
    #[inline]
    pub fn now(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

pub fn wire_all(w: &Wiring) {
    pointer::wire(w);
    nav::wire(w);
}

/// Run a coordinator mutation and, if the active section changed, mirror
/// the new state into the page markup.
pub(crate) fn with_nav_outcome(
    w: &Wiring,
    f: impl FnOnce(&mut SectionCoordinator, &mut Scene, &mut CameraRig, f32) -> bool,
) {
    let now = w.now();
    let changed = {
        let mut coordinator = w.coordinator.borrow_mut();
        let mut scene = w.scene.borrow_mut();
        let mut camera = w.camera.borrow_mut();
        f(&mut coordinator, &mut scene, &mut camera, now)
    };
    if changed {
        if let Some(doc) = dom::window_document() {
            dom::set_active_nav(&doc, w.coordinator.borrow().current());
        }
    }
}
