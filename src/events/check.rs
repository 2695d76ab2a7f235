use crate::constants::CHECK_BUTTON_ID;
use crate::dom;
use crate::timer;
use crate::SharedWidget;
use plotter_core::CheckOutcome;
use web_sys as web;

pub fn wire_check_button(document: &web::Document, widget: &SharedWidget) {
    let widget = widget.clone();
    dom::add_click_listener(document, CHECK_BUTTON_ID, move || {
        let outcome = widget.borrow_mut().check();
        if let CheckOutcome::Correct { timer: Some(t) } = outcome {
            let widget_for_timer = widget.clone();
            let armed = timer::set_timeout(t.delay, move || {
                widget_for_timer.borrow_mut().fire(t.handle);
            });
            if let Err(e) = armed {
                log::error!("[check] could not arm reroll timer: {:?}", e);
            }
        }
    });
}
