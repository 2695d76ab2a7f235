use crate::input;
use crate::SharedWidget;
use plotter_core::PointerInput;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, widget: &SharedWidget) {
    wire_pointer(canvas, widget, "pointerdown", |ev, canvas| {
        ev.prevent_default();
        PointerInput::Down(input::pointer_canvas_px(ev, canvas))
    });
    wire_pointer(canvas, widget, "pointermove", |ev, canvas| {
        PointerInput::Move(input::pointer_canvas_px(ev, canvas))
    });
    wire_pointer(canvas, widget, "pointerup", |_, _| PointerInput::Up);
    wire_pointer(canvas, widget, "pointerleave", |_, _| PointerInput::Leave);
}

fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    widget: &SharedWidget,
    event: &'static str,
    to_input: fn(&web::PointerEvent, &web::HtmlCanvasElement) -> PointerInput,
) {
    let widget = widget.clone();
    let canvas_for_listener = canvas.clone();
    let canvas = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Single pointer only; secondary touches are ignored.
        if !ev.is_primary() {
            return;
        }
        let input = to_input(&ev, &canvas);
        widget.borrow_mut().handle_pointer(input);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        canvas_for_listener.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::error!("[pointer] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}
