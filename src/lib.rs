//! Interactive single-page 3D showcase: five procedurally built sections,
//! continuous animation, scroll/click/menu navigation with animated
//! camera transitions, and pointer picking.
//!
//! The core modules below are platform-independent and natively tested;
//! the wasm-gated modules glue them to the canvas, DOM and WebGPU.

pub mod animate;
pub mod camera;
pub mod constants;
pub mod coordinator;
pub mod input;
pub mod pick;
pub mod scene;
pub mod tween;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::camera::CameraRig;
    use crate::coordinator::SectionCoordinator;
    use crate::input::PointerState;
    use crate::pick::Picker;
    use crate::scene::Scene;
    use crate::{dom, events, frame, overlay};
    use instant::Instant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("folio-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                // Fatal: the experience stays blank rather than partially
                // rendering.
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas_el = document
            .get_element_by_id("app-canvas")
            .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        // Build the whole scene up front; section membership never changes
        // afterwards. Unseeded so layouts vary run to run.
        let mut rng = StdRng::from_entropy();
        let scene = Rc::new(RefCell::new(Scene::generate(&mut rng)));
        let coordinator = Rc::new(RefCell::new(SectionCoordinator::new()));
        let camera = Rc::new(RefCell::new(CameraRig::new()));
        let picker = Rc::new(RefCell::new(Picker::new()));
        let pointer = Rc::new(RefCell::new(PointerState::default()));

        let gpu = frame::init_gpu(&canvas).await?;
        let perf = overlay::PerfOverlay::new(&document);

        dom::set_active_nav(&document, coordinator.borrow().current());

        let epoch = Instant::now();
        events::wire_all(&events::Wiring {
            canvas: canvas.clone(),
            scene: scene.clone(),
            coordinator: coordinator.clone(),
            camera: camera.clone(),
            picker: picker.clone(),
            pointer: pointer.clone(),
            epoch,
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            scene,
            coordinator,
            camera,
            picker,
            pointer,
            canvas,
            gpu,
            overlay: perf,
            epoch,
            last_instant: epoch,
        }));
        frame::start_loop(frame_ctx);

        Ok(())
    }
}
