//! Chart-embed page binder.
//!
//! The layout has a single chart slot, so only the first entry of the
//! `iframes` list is rendered even when more are present. An empty list gets
//! an explicit placeholder instead of an empty container.

use crate::content::IframePage;
use crate::markdown::render_inline;
use crate::slots::{id, Block, SlotSurface};

pub const NO_CHARTS_PLACEHOLDER: &str = "No ThingSpeak charts available.";

pub fn render_iframe_page(page: &IframePage, surface: &mut dyn SlotSurface) {
    surface.set_text(id::PAGE_TITLE, &page.title);

    surface.set_text(id::IFRAME_MAIN_HEADING, &page.main_heading);
    surface.set_html(id::IFRAME_DESCRIPTION, &render_inline(&page.description));

    surface.clear(id::IFRAMES_WRAPPER);
    match page.iframes.first() {
        Some(chart) => {
            surface.append_block(
                id::IFRAMES_WRAPPER,
                Block {
                    tag: "div",
                    class: "responsive-iframe-wrapper",
                    html: format!(
                        "<iframe id=\"{}\" src=\"{}\" title=\"{}\" frameborder=\"0\" allowfullscreen></iframe>\
                         <p class=\"iframe-description\">{}</p>",
                        chart.id, chart.src, chart.title, chart.field_description
                    ),
                },
            );
        }
        None => {
            surface.append_block(
                id::IFRAMES_WRAPPER,
                Block {
                    tag: "p",
                    class: "",
                    html: NO_CHARTS_PLACEHOLDER.to_string(),
                },
            );
        }
    }

    surface.set_text(id::IFRAME_FOOTER_DESCRIPTION, &page.footer_description);
}
