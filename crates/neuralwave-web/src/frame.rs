use crate::render;
use glam::Vec2;
use instant::Instant;
use neuralwave_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything a frame tick needs, shared between the rAF closure and the
/// event handlers.
pub struct FrameContext<'a> {
    pub scene: SceneState,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<Vec2>>,
    pub running: bool,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let pointer = *self.pointer.borrow();
        self.scene.step(now_ms, Some(pointer));

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // The surface wants a 'static target; the canvas lives for the page
    // anyway, so leaking a clone is fine.
    let leaked: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init failed, running without rendering: {:?}", e);
            None
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop. The closure holds itself
/// through the returned handle so the visibility handler can re-kick it.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameHandle {
    let tick: FrameHandle = Rc::new(RefCell::new(None));
    let tick_inner = tick.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow().running {
            // Do not reschedule; resume re-kicks through request_frame.
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_inner);
    }) as Box<dyn FnMut()>));

    request_frame(&tick);
    tick
}

pub fn request_frame(tick: &FrameHandle) {
    if let Some(wnd) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = wnd.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
