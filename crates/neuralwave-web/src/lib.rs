#![cfg(target_arch = "wasm32")]
//! Web front-end: canvas acquisition, input wiring and the rAF frame driver
//! for the NeuralWave scene.

use instant::Instant;
use neuralwave_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neuralwave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Missing scene surface is a fatal precondition, not a silent no-op.
    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    events::wire_canvas_resize(&canvas);

    // Entity counts come from viewport/density signals, read once.
    let profile = dom::display_profile(&window);
    log::info!(
        "[scene] viewport={}px high_density={} -> nodes={} shapes={}",
        profile.viewport_width_px,
        profile.high_density,
        profile.node_count(),
        profile.shape_count()
    );

    // The visualization is ephemeral; every session gets a fresh seed.
    let seed = js_sys::Date::now() as u64;
    let scene = SceneState::new(&profile, seed);

    // Normalized pointer offset, written by the pointermove listener and
    // read once per frame tick.
    let pointer = Rc::new(RefCell::new(glam::Vec2::ZERO));
    events::wire_pointer_move(pointer.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas: canvas.clone(),
        pointer,
        running: true,
        started: Instant::now(),
    }));

    let tick = frame::start_loop(frame_ctx.clone());
    events::wire_visibility_pause(&document, frame_ctx, tick);

    Ok(())
}
