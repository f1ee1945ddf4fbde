//! Browser DOM backing for [`PageSurface`] and the wasm entry point.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{console, Document, Element, HtmlElement, Window};

use crate::{
    config::BehaviorConfig,
    page,
    surface::{Handler, Marker, PageSurface},
};

struct DomSurface {
    window: Window,
    document: Document,
}

impl PageSurface for DomSurface {
    type Element = Element;

    fn query(&self, marker: Marker) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&marker.selector()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_top()))
            .unwrap_or(0.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) {
        let list = element.class_list();
        let _ = if present { list.add_1(class) } else { list.remove_1(class) };
    }

    fn root_has_class(&self, class: &str) -> bool {
        self.document
            .body()
            .map(|body| body.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        if let Some(body) = self.document.body() {
            let list = body.class_list();
            let _ = if present { list.add_1(class) } else { list.remove_1(class) };
        }
    }

    fn set_visible(&self, element: &Element, visible: bool) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            // "" falls back to the stylesheet's display
            let _ = el
                .style()
                .set_property("display", if visible { "" } else { "none" });
        }
    }

    fn on_scroll(&self, handler: Handler) {
        let closure = Closure::wrap(handler);
        let _ = self
            .window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        // lives as long as the page
        closure.forget();
    }

    fn on_click(&self, element: &Element, handler: Handler) {
        let closure = Closure::wrap(handler);
        let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn install_page(window: Window, document: Document) {
    let surface = Rc::new(DomSurface {
        window,
        document,
    });
    page::install(surface, BehaviorConfig::default());
}

/// Wasm entry point: wire the page behaviors once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(window) = web_sys::window() else {
        console::warn_1(&JsValue::from_str("folio: no global `window`, page behaviors disabled"));
        return;
    };
    let Some(document) = window.document() else {
        console::warn_1(&JsValue::from_str("folio: no document, page behaviors disabled"));
        return;
    };

    if document.ready_state() != "loading" {
        install_page(window, document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || install_page(window, document));
    if target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .is_err()
    {
        console::warn_1(&JsValue::from_str("folio: could not wait for DOMContentLoaded"));
    }
}
