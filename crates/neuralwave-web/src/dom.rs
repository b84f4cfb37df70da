use neuralwave_core::DisplayProfile;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        // Pixel ratio clamped at 2, matching the renderer's cap.
        let dpr = w.device_pixel_ratio().min(2.0);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Viewport width and display density, read once to size the entity sets.
pub fn display_profile(window: &web::Window) -> DisplayProfile {
    let viewport_width_px = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    let high_density = window
        .match_media("(min-resolution: 2dppx)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    DisplayProfile {
        viewport_width_px,
        high_density,
    }
}
