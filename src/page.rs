//! The texture calculator page: format picker, dimension inputs, mip listing.

use crate::constants::{
    clamp_input_value, input_to_u32, preview_scale, PREVIEW_BACKGROUND, PREVIEW_TILE,
    SELECTED_CLASS,
};
use crate::dom;
use crate::events;
use anyhow::anyhow;
use scrub_core::{hex0x, mip_chain, total_size, FormatCatalog, ImageDesc, MipLevel, PixelFormat};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Page {
    document: web::Document,
    catalog: FormatCatalog,
    selected: Cell<usize>,
    // Hover handlers for the current listing; replaced on every rebuild.
    hover_handlers: RefCell<Vec<Closure<dyn FnMut()>>>,
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let catalog = FormatCatalog::builtin()?;
    let page = Rc::new(Page {
        document: document.clone(),
        catalog,
        selected: Cell::new(0),
        hover_handlers: RefCell::new(Vec::new()),
    });
    build_format_select(&page)?;
    bind_inputs(&page)?;
    page.rebuild();
    log::info!("[page] ready with {} formats", page.catalog.formats().len());
    Ok(())
}

fn build_format_select(page: &Rc<Page>) -> anyhow::Result<()> {
    let select: web::HtmlSelectElement = dom::element_by_id(&page.document, "FormatSelect")?;
    for (group, formats) in page.catalog.groups() {
        let optgroup: web::HtmlOptGroupElement = dom::create(&page.document, "optgroup")?;
        optgroup.set_label(group);
        for format in formats {
            let option: web::HtmlOptionElement = dom::create(&page.document, "option")?;
            option.set_text(&format.name);
            option.set_value(&format.name);
            optgroup
                .append_child(&option)
                .map_err(|e| anyhow!("append option: {:?}", e))?;
        }
        select
            .append_child(&optgroup)
            .map_err(|e| anyhow!("append optgroup: {:?}", e))?;
    }

    let page_input = page.clone();
    let select_input = select.clone();
    dom::add_listener(&select, "input", move |_| {
        let name = select_input.value();
        match page_input.catalog.index_of(&name) {
            Some(i) => {
                page_input.selected.set(i);
                page_input.rebuild();
            }
            None => log::warn!("[page] unknown format {}", name),
        }
    });
    Ok(())
}

fn bind_inputs(page: &Rc<Page>) -> anyhow::Result<()> {
    let inputs = page
        .document
        .query_selector_all("input")
        .map_err(|e| anyhow!("query inputs: {:?}", e))?;
    for i in 0..inputs.length() {
        let Some(input) = inputs
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlInputElement>().ok())
        else {
            continue;
        };
        input.set_draggable(false);

        let page_input = page.clone();
        dom::add_listener(&input, "input", move |_| page_input.rebuild());

        let page_scrub = page.clone();
        let input_scrub = input.clone();
        events::bind_number_dragger(&input, move |value| {
            input_scrub.set_value_as_number(clamp_input_value(value));
            page_scrub.rebuild();
        })?;
    }
    Ok(())
}

impl Page {
    fn selected_format(&self) -> Option<&PixelFormat> {
        self.catalog.get(self.selected.get())
    }

    fn number(&self, id: &str) -> anyhow::Result<u32> {
        let input: web::HtmlInputElement = dom::element_by_id(&self.document, id)?;
        Ok(input_to_u32(input.value_as_number()))
    }

    fn image_desc(&self, format: &PixelFormat) -> anyhow::Result<ImageDesc> {
        let image = ImageDesc::new(format, self.number("ImageWidth")?, self.number("ImageHeight")?);
        if !format.is_custom() {
            return Ok(image);
        }
        Ok(image.with_block(
            self.number("CustomBlockWidth")?,
            self.number("CustomBlockHeight")?,
            self.number("CustomBytesPerBlock")?,
        ))
    }

    pub fn rebuild(&self) {
        if let Err(e) = self.try_rebuild() {
            log::error!("[page] rebuild failed: {:?}", e);
        }
    }

    fn try_rebuild(&self) -> anyhow::Result<()> {
        let format = self
            .selected_format()
            .ok_or_else(|| anyhow!("no format at {}", self.selected.get()))?;

        let custom_form: web::HtmlElement = dom::element_by_id(&self.document, "CustomFormat")?;
        _ = custom_form
            .style()
            .set_property("display", if format.is_custom() { "block" } else { "none" });

        let description: web::HtmlElement =
            dom::element_by_id(&self.document, "FormatDescription")?;
        description.set_text_content(Some(&format.description));

        let preview: web::HtmlElement = dom::element_by_id(&self.document, "TexturePreview")?;
        let output: web::HtmlElement = dom::element_by_id(&self.document, "OutputLog")?;
        dom::clear_element(&output);
        dom::clear_element(&preview);
        self.hover_handlers.borrow_mut().clear();

        let image = self.image_desc(format)?;
        let levels = match mip_chain(&image) {
            Ok(levels) => levels,
            Err(e) => {
                self.append_line(&output, &e.to_string())?;
                return Ok(());
            }
        };

        let scale = preview_scale(levels[0].width);
        for (i, level) in levels.iter().enumerate() {
            let tile = self.preview_tile(level, scale, i == 0)?;
            preview
                .append_child(&tile)
                .map_err(|e| anyhow!("append preview: {:?}", e))?;
            let line = self.append_line(&output, &describe_level(i, level))?;
            self.link_hover(&tile, &line);
            if i == 0 {
                set_selected(&tile, &line, true);
            }
        }
        self.append_line(
            &output,
            &format!("Total Size: {}", hex0x(total_size(&levels))),
        )?;
        Ok(())
    }

    fn preview_tile(
        &self,
        level: &MipLevel,
        scale: f64,
        first: bool,
    ) -> anyhow::Result<web::HtmlElement> {
        let tile: web::HtmlElement = dom::create(&self.document, "div")?;
        let width = format!("{}px", f64::from(level.width) * scale);
        let height = format!("{}px", f64::from(level.height) * scale);
        dom::set_styles(
            &tile,
            &[
                ("background", PREVIEW_BACKGROUND),
                ("background-size", PREVIEW_TILE),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("display", "grid"),
                ("place-content", "center"),
            ],
        );
        if first {
            dom::set_styles(&tile, &[("float", "left")]);
        }
        tile.set_text_content(Some(&format!("{}x{}", level.width, level.height)));
        Ok(tile)
    }

    fn append_line(&self, output: &web::HtmlElement, text: &str) -> anyhow::Result<web::HtmlElement> {
        let line: web::HtmlElement = dom::create(&self.document, "div")?;
        line.set_text_content(Some(text));
        output
            .append_child(&line)
            .map_err(|e| anyhow!("append line: {:?}", e))?;
        Ok(line)
    }

    fn link_hover(&self, tile: &web::HtmlElement, line: &web::HtmlElement) {
        let mut handlers = self.hover_handlers.borrow_mut();
        for target in [tile, line] {
            for (event, on) in [("mouseenter", true), ("mouseleave", false)] {
                let (t, l) = (tile.clone(), line.clone());
                let closure = Closure::wrap(Box::new(move || set_selected(&t, &l, on)) as Box<dyn FnMut()>);
                _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                handlers.push(closure);
            }
        }
    }
}

fn set_selected(tile: &web::HtmlElement, line: &web::HtmlElement, selected: bool) {
    _ = tile.class_list().toggle_with_force(SELECTED_CLASS, selected);
    _ = line.class_list().toggle_with_force(SELECTED_CLASS, selected);
}

fn describe_level(index: usize, level: &MipLevel) -> String {
    format!(
        "Mip {}, {}x{} ({}x{}), {} bytes, starting at {}",
        index,
        level.width,
        level.height,
        level.padded_width,
        level.padded_height,
        hex0x(level.byte_size),
        hex0x(level.offset)
    )
}
