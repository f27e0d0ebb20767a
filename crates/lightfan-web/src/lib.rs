#![cfg(target_arch = "wasm32")]
use instant::Instant;
use lightfan_core::{SceneConfig, Surface, Visualizer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod dom;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lightfan-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::wire_canvas_resize(&canvas);

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // Browsers keep the context suspended until a user gesture
    {
        let audio_resume = audio_ctx.clone();
        dom::add_event_listener(&document, "click", move || {
            if audio_resume.state() != web::AudioContextState::Running {
                _ = audio_resume.resume();
                log::info!("[audio] resumed");
            }
        });
    }
    let mut audio = audio::WebAudio::new(audio_ctx)?;

    let surface = canvas::CanvasSurface::new(canvas)?;
    let seed: u64 = rand::random();
    let visualizer = Visualizer::new(
        SceneConfig::default(),
        surface.size(),
        seed,
        &mut audio,
    )?;
    log::info!(
        "[audio] {} voices, context state {:?}",
        visualizer.voices().len(),
        audio.context().state()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        visualizer,
        surface,
        audio,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
