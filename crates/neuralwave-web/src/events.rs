use crate::dom;
use crate::frame::{self, FrameContext, FrameHandle};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Pointer offsets normalized to [-1, 1] relative to the viewport center,
/// updated on every pointer move independently of the render cadence.
pub fn wire_pointer_move(pointer: Rc<RefCell<Vec2>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(wnd) = web::window() {
            let half_w = wnd
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
                / 2.0;
            let half_h = wnd
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
                / 2.0;
            if half_w > 0.0 && half_h > 0.0 {
                let mut p = pointer.borrow_mut();
                p.x = ((ev.client_x() as f64 - half_w) / half_w) as f32;
                p.y = ((ev.client_y() as f64 - half_h) / half_h) as f32;
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop ticking while the tab is hidden and re-kick the loop on return.
/// Entity phases are untouched either way, so motion resumes where the
/// wall clock puts it rather than where it left off.
pub fn wire_visibility_pause(
    document: &web::Document,
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: FrameHandle,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = doc.hidden();
        let was_running = frame_ctx.borrow().running;
        frame_ctx.borrow_mut().running = !hidden;
        if hidden {
            log::info!("[frame] paused, tab hidden");
        } else if !was_running {
            log::info!("[frame] resumed");
            frame::request_frame(&tick);
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
