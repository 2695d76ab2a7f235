#![cfg(target_arch = "wasm32")]
use plotter_core::constants::CANVAS_SIZE;
use plotter_core::{PlotterConfig, PlotterWidget};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod input;
mod timer;

pub(crate) type Widget = PlotterWidget<canvas::CanvasSurface, dom::DomStatus>;
pub(crate) type SharedWidget = Rc<RefCell<Widget>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("plotter-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    // Fixed backing store; CSS may scale the element, pointer input is mapped back.
    canvas.set_width(CANVAS_SIZE as u32);
    canvas.set_height(CANVAS_SIZE as u32);

    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;
    let status = dom::DomStatus::new(&document)?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    log::info!("[init] seed={}", seed);
    let widget: SharedWidget = Rc::new(RefCell::new(PlotterWidget::new(
        PlotterConfig::default(),
        seed,
        surface,
        status,
    )?));

    events::wire_pointer_handlers(&canvas, &widget);
    events::wire_check_button(&document, &widget);
    Ok(())
}
