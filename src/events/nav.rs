//! Navigation inputs: wheel (debounced), nav links, the call-to-action,
//! and arrow keys.

use super::{with_nav_outcome, Wiring};
use crate::dom;
use crate::input;
use crate::scene::SectionId;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(w: &Wiring) {
    wire_wheel(w);
    wire_links(w);
    wire_keydown(w);
}

fn wire_wheel(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let Some(dir) = input::wheel_direction(ev.delta_y()) else {
            return;
        };
        with_nav_outcome(&w, |coordinator, scene, camera, now| {
            coordinator.wheel(dir, scene, camera, now)
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_links(w: &Wiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for id in SectionId::ALL {
        let w_link = w.clone();
        dom::add_click_listener(&document, &format!("nav-{}", id.slug()), move || {
            with_nav_outcome(&w_link, |coordinator, scene, camera, now| {
                coordinator.navigate_to(id.index(), scene, camera, now)
            });
        });
    }
    let w_cta = w.clone();
    dom::add_click_listener(&document, "cta-button", move || {
        with_nav_outcome(&w_cta, |coordinator, scene, camera, now| {
            coordinator.activate_cta(scene, camera, now)
        });
    });
}

fn wire_keydown(w: &Wiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let delta = match ev.key().as_str() {
            "ArrowDown" | "ArrowRight" | "PageDown" => 1,
            "ArrowUp" | "ArrowLeft" | "PageUp" => -1,
            _ => return,
        };
        with_nav_outcome(&w, |coordinator, scene, camera, now| {
            coordinator.step(delta, scene, camera, now)
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
