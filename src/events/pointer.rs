use crate::overlay::DomOverlay;
use crate::scheduler::{Handlers, WebScheduler};
use anyhow::anyhow;
use glam::Vec2;
use scrub_core::{DragScrubController, ScrubConfig, ScrubEvent, TierSet};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys as web;

type WebController = DragScrubController<DomOverlay, WebScheduler>;

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// A drag scrubber wired to the browser: the controller plus the host callbacks it
/// reports to. Callbacks run after the controller borrow is released.
pub struct NumberDragger {
    controller: RefCell<WebController>,
    on_value: RefCell<Option<Box<dyn Fn(f64)>>>,
    on_end: RefCell<Option<Box<dyn Fn()>>>,
}

impl NumberDragger {
    pub fn new(document: &web::Document, config: ScrubConfig) -> anyhow::Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let root: web::EventTarget = document
            .document_element()
            .ok_or_else(|| anyhow!("no documentElement"))?
            .into();
        let overlay = DomOverlay::new(document, &TierSet::from_config(&config))?;

        Ok(Rc::new_cyclic(|weak: &Weak<Self>| {
            let handlers = Handlers {
                on_move: move_handler(weak.clone()),
                on_release: release_handler(weak.clone()),
                on_show: show_handler(weak.clone()),
            };
            let scheduler = WebScheduler::new(window, root, handlers);
            Self {
                controller: RefCell::new(DragScrubController::new(config, overlay, scheduler)),
                on_value: RefCell::new(None),
                on_end: RefCell::new(None),
            }
        }))
    }

    pub fn set_on_value(&self, f: impl Fn(f64) + 'static) {
        *self.on_value.borrow_mut() = Some(Box::new(f));
    }

    pub fn set_on_end(&self, f: impl Fn() + 'static) {
        *self.on_end.borrow_mut() = Some(Box::new(f));
    }

    pub fn set_position(&self, pos: Vec2) {
        self.with_controller(|c, _| c.set_position(pos));
    }

    pub fn begin(&self, pointer: Vec2, value: f64) {
        self.with_controller(|c, _| c.begin(pointer, value));
    }

    /// Release or blur. Safe to call when no drag is in progress.
    pub fn end(&self) {
        self.with_controller(|c, events| c.end(events));
    }

    fn pointer_move(&self, pointer: Vec2) {
        self.with_controller(|c, events| c.pointer_move(pointer, events));
    }

    fn show_elapsed(&self) {
        self.with_controller(|c, _| c.show_elapsed());
    }

    fn with_controller(&self, f: impl FnOnce(&mut WebController, &mut Vec<ScrubEvent>)) {
        let mut events = Vec::new();
        match self.controller.try_borrow_mut() {
            Ok(mut c) => f(&mut *c, &mut events),
            Err(_) => {
                log::warn!("[scrub] controller busy; event dropped");
                return;
            }
        }
        for ev in events {
            match ev {
                ScrubEvent::ValueChanged(v) => {
                    if let Some(f) = self.on_value.borrow().as_ref() {
                        f(v);
                    }
                }
                ScrubEvent::Committed => {
                    if let Some(f) = self.on_end.borrow().as_ref() {
                        f();
                    }
                }
            }
        }
    }
}

fn move_handler(weak: Weak<NumberDragger>) -> Closure<dyn FnMut(web::MouseEvent)> {
    Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.stop_propagation();
        if let Some(d) = weak.upgrade() {
            d.pointer_move(client_pos(&ev));
        }
    }) as Box<dyn FnMut(_)>)
}

fn release_handler(weak: Weak<NumberDragger>) -> Closure<dyn FnMut(web::MouseEvent)> {
    Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        if let Some(d) = weak.upgrade() {
            d.end();
        }
    }) as Box<dyn FnMut(_)>)
}

fn show_handler(weak: Weak<NumberDragger>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        if let Some(d) = weak.upgrade() {
            d.show_elapsed();
        }
    }) as Box<dyn FnMut()>)
}
