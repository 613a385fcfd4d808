use crate::dom;
use crate::events::pointer::{client_pos, NumberDragger};
use anyhow::anyhow;
use scrub_core::ScrubConfig;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lets `input` be scrubbed by dragging. Scrubbed values go to `on_change`; a
/// finished drag fires a `change` event on the input.
pub fn bind_number_dragger(
    input: &web::HtmlInputElement,
    on_change: impl Fn(f64) + 'static,
) -> anyhow::Result<Rc<NumberDragger>> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let dragger = NumberDragger::new(&document, ScrubConfig::default())?;
    dragger.set_on_value(on_change);

    let input_end = input.clone();
    dragger.set_on_end(move || {
        log::info!("[binder] #{} committed {}", input_end.id(), input_end.value());
        if let Ok(ev) = web::Event::new("change") {
            _ = input_end.dispatch_event(&ev);
        }
    });

    {
        let dragger = dragger.clone();
        let input_down = input.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let value = input_down.value_as_number();
            if !value.is_finite() {
                log::warn!("[binder] #{} holds no number; drag ignored", input_down.id());
                return;
            }
            let pos = client_pos(&ev);
            dragger.set_position(pos);
            dragger.begin(pos, value);
            ev.stop_propagation();
        }) as Box<dyn FnMut(_)>);
        _ = input.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let dragger_blur = dragger.clone();
    dom::add_listener(input, "blur", move |_| dragger_blur.end());
    dom::add_listener(input, "dragstart", |ev| ev.prevent_default());

    Ok(dragger)
}
