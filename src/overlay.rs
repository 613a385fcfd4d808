//! The floating tier picker, rendered as a stack of `<div>` zones.

use crate::constants::{overlay_transform, ACCENT, HIGHLIGHT_TEXT, OVERLAY_STYLE, ZONE_PADDING};
use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use scrub_core::{Overlay, TierSet, ZoneBottoms};
use web_sys as web;

pub struct DomOverlay {
    body: web::HtmlElement,
    root: web::HtmlElement,
    zones: Vec<web::HtmlElement>,
}

impl DomOverlay {
    /// Builds the overlay detached from the page; `set_visible` attaches it.
    pub fn new(document: &web::Document, tiers: &TierSet) -> anyhow::Result<Self> {
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        let root: web::HtmlElement = dom::create(document, "div")?;
        dom::set_styles(&root, OVERLAY_STYLE);

        let mut zones = Vec::with_capacity(tiers.len());
        for tier in tiers.iter() {
            let zone: web::HtmlElement = dom::create(document, "div")?;
            dom::set_styles(&zone, &[("padding", ZONE_PADDING)]);
            zone.set_text_content(Some(&tier.label()));
            root.append_child(&zone)
                .map_err(|e| anyhow!("append zone: {:?}", e))?;
            zones.push(zone);
        }
        Ok(Self { body, root, zones })
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.root.parent_node().is_some()
    }
}

impl Overlay for DomOverlay {
    fn set_position(&mut self, pos: Vec2) {
        let style = self.root.style();
        _ = style.set_property("left", &format!("{}px", pos.x));
        _ = style.set_property("top", &format!("{}px", pos.y));
    }

    fn anchor_zone(&mut self, zone: usize, zone_count: usize) {
        _ = self
            .root
            .style()
            .set_property("transform", &overlay_transform(zone, zone_count));
    }

    fn highlight(&mut self, zone: usize) {
        for (i, el) in self.zones.iter().enumerate() {
            let style = el.style();
            if i == zone {
                _ = style.set_property("background-color", ACCENT);
                _ = style.set_property("color", HIGHLIGHT_TEXT);
                _ = style.set_property("font-weight", "bold");
            } else {
                _ = style.remove_property("background-color");
                _ = style.remove_property("color");
                _ = style.remove_property("font-weight");
            }
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if visible == self.is_attached() {
            return;
        }
        let result = if visible {
            self.body.append_child(&self.root).map(|_| ())
        } else {
            self.body.remove_child(&self.root).map(|_| ())
        };
        if let Err(e) = result {
            log::error!("[overlay] visibility change failed: {:?}", e);
        }
    }

    fn zone_bottoms(&self) -> ZoneBottoms {
        self.zones
            .iter()
            .map(|z| z.get_bounding_client_rect().bottom() as f32)
            .collect()
    }
}
