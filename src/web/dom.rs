//! `SlotSurface` over the live document, by element id.
//!
//! Lookups are defensive throughout: a binding whose target element is
//! absent from the current page's markup is dropped silently.

use crate::slots::{Block, SlotSurface};

pub(super) struct DomSurface {
    document: web_sys::Document,
}

impl DomSurface {
    pub(super) fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn slot(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }
}

impl SlotSurface for DomSurface {
    fn has(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.slot(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&mut self, id: &str, html: &str) {
        if let Some(el) = self.slot(id) {
            el.set_inner_html(html);
        }
    }

    fn set_link(&mut self, id: &str, href: &str) {
        if let Some(el) = self.slot(id) {
            let _ = el.set_attribute("href", href);
        }
    }

    fn set_image(&mut self, id: &str, src: &str, alt: &str) {
        if let Some(el) = self.slot(id) {
            let _ = el.set_attribute("src", src);
            let _ = el.set_attribute("alt", alt);
        }
    }

    fn clear(&mut self, id: &str) {
        if let Some(el) = self.slot(id) {
            el.set_inner_html("");
        }
    }

    fn append_block(&mut self, container: &str, block: Block) {
        let Some(parent) = self.slot(container) else {
            return;
        };
        let Ok(child) = self.document.create_element(block.tag) else {
            return;
        };
        if !block.class.is_empty() {
            child.set_class_name(block.class);
        }
        child.set_inner_html(&block.html);
        let _ = parent.append_child(&child);
    }

    fn hide(&mut self, id: &str) {
        if let Some(el) = self.slot(id) {
            let _ = el.set_attribute("style", "display: none;");
        }
    }
}
