//! Landing page binder.
//!
//! The hero background image is deliberately not touched here: it loads
//! out-of-band (see `hero` and the web layer) while the rest of the page
//! renders synchronously.

use crate::content::LandingPage;
use crate::markdown::render_inline;
use crate::slots::{id, Block, SlotSurface};

pub fn render_landing_page(page: &LandingPage, surface: &mut dyn SlotSurface) {
    surface.set_text(id::PAGE_TITLE, &page.title);

    surface.set_html(id::HERO_HEADING_1, &render_inline(&page.hero.heading1));
    surface.set_html(id::HERO_HEADING_2, &render_inline(&page.hero.heading2));
    surface.set_html(id::HERO_PARAGRAPH, &render_inline(&page.hero.paragraph));
    surface.set_text(id::HERO_CTA_BUTTON, &page.hero.cta_button_text);
    surface.set_link(id::HERO_CTA_BUTTON, &page.hero.cta_button_link);

    surface.set_text(id::ACKNOWLEDGEMENT_HEADING, &page.acknowledgement.heading);
    surface.set_text(
        id::ACKNOWLEDGEMENT_PARAGRAPH,
        &page.acknowledgement.paragraph,
    );

    surface.clear(id::FEATURES_CONTAINER);
    for feature in &page.features {
        surface.append_block(
            id::FEATURES_CONTAINER,
            Block {
                tag: "div",
                class: "feature-item",
                html: format!(
                    "<img src=\"{}\" alt=\"{} Icon\"><h3>{}</h3><p>{}</p>",
                    feature.icon, feature.title, feature.title, feature.description
                ),
            },
        );
    }

    surface.set_text(id::ABOUT_US_HEADING, &page.about_us.heading);
    surface.set_text(id::ABOUT_US_PARAGRAPH, &page.about_us.paragraph);
    surface.set_text(id::ABOUT_US_BUTTON, &page.about_us.button_text);
    surface.set_link(id::ABOUT_US_BUTTON, &page.about_us.button_link);
}
