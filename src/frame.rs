//! Per-frame driver: advances the simulation clock, runs the animator,
//! visibility tweens, camera, picker and overlay, then renders. Driven by
//! requestAnimationFrame.

use crate::camera::CameraRig;
use crate::coordinator::SectionCoordinator;
use crate::input::PointerState;
use crate::overlay::PerfOverlay;
use crate::pick::Picker;
use crate::scene::Scene;
use crate::{animate, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub coordinator: Rc<RefCell<SectionCoordinator>>,
    pub camera: Rc<RefCell<CameraRig>>,
    pub picker: Rc<RefCell<Picker>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub overlay: PerfOverlay,

    pub epoch: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.epoch).as_secs_f32();

        let ndc = self.pointer.borrow().ndc;
        let active = self.coordinator.borrow().current();

        {
            let mut scene = self.scene.borrow_mut();
            animate::advance(&mut scene, elapsed);
            self.coordinator.borrow().update(&mut scene, elapsed);

            let mut camera = self.camera.borrow_mut();
            camera.update(ndc, elapsed);

            // Hover is re-cast every frame: the camera moves even while
            // the pointer is still.
            let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
            let (ro, rd) = camera.screen_ray(ndc, aspect);
            let mut picker = self.picker.borrow_mut();
            picker.resolve(&mut scene, ro, rd, active);
            picker.update(&mut scene, elapsed);

            self.overlay.tick(dt_sec);

            // Keep the surface sized to the canvas backing store before
            // the frame is presented; the resize listener only updates
            // the backing store itself.
            let w = self.canvas.width();
            let h = self.canvas.height();
            self.gpu.resize_if_needed(w, h);
            if let Err(e) = self.gpu.render(&scene, &camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
