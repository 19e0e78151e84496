//! Pointer and touch handlers: track NDC coordinates for parallax and
//! hover, resolve clicks against the active section.

use super::Wiring;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(w: &Wiring) {
    wire_pointermove(w);
    wire_pointerdown(w);
    wire_pointerup(w);
    wire_touchstart(w);
}

fn client_ndc(w: &Wiring, client_x: f32, client_y: f32) -> Vec2 {
    let rect = w.canvas.get_bounding_client_rect();
    input::client_to_ndc(
        client_x - rect.left() as f32,
        client_y - rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn wire_pointermove(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = client_ndc(&w, ev.client_x() as f32, ev.client_y() as f32);
        w.pointer.borrow_mut().ndc = ndc;
        // Hover itself is re-resolved by the frame loop; events only feed
        // the latest coordinates.
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = client_ndc(&w, ev.client_x() as f32, ev.client_y() as f32);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.ndc = ndc;
            ps.down = true;
        }
        click_at(&w, ndc);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().down = false;
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Some mobile browsers deliver touchstart without a pointer event; treat
// the first touch like a pointer tap.
fn wire_touchstart(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().item(0) {
            let ndc = client_ndc(&w, touch.client_x() as f32, touch.client_y() as f32);
            w.pointer.borrow_mut().ndc = ndc;
            click_at(&w, ndc);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn click_at(w: &Wiring, ndc: Vec2) {
    let now = w.now();
    let aspect = w.canvas.width() as f32 / w.canvas.height().max(1) as f32;
    let active = w.coordinator.borrow().current();
    let mut scene = w.scene.borrow_mut();
    let (ro, rd) = w.camera.borrow().screen_ray(ndc, aspect);
    if let Some(i) = w.picker.borrow_mut().click(&mut scene, ro, rd, active, now) {
        log::info!("[click] hit primitive {} in {}", i, active.slug());
    }
}
