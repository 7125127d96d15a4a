//! The presentation surface renderers write into.
//!
//! Slots are uniquely identified mutable targets; the identifiers are a
//! contract with the shipped markup in `pages/`. Renderers receive an
//! explicit surface instead of reaching for ambient document state, which is
//! what lets every binder run against [`MemorySurface`] on the host.
//!
//! Every operation is a silent no-op when the slot id is unknown. That is
//! the primary defensive mechanism against markup/script drift: a binding to
//! a slot the current page does not carry simply does nothing.

use std::collections::BTreeMap;

/// Slot identifiers shared between the renderers and `pages/*.html`.
pub mod id {
    pub const PAGE_TITLE: &str = "pageTitle";
    pub const INSTITUTE_LOGO: &str = "instituteLogo";
    pub const FOOTER_LOGO: &str = "footerLogo";
    pub const FOOTER_LINKS: &str = "footerLinks";
    pub const SOCIAL_MEDIA_ICONS: &str = "socialMediaIcons";
    pub const COPYRIGHT_TEXT: &str = "copyrightText";

    pub const HERO_SECTION: &str = "heroSection";
    pub const HERO_HEADING_1: &str = "heroHeading1";
    pub const HERO_HEADING_2: &str = "heroHeading2";
    pub const HERO_PARAGRAPH: &str = "heroParagraph";
    pub const HERO_CTA_BUTTON: &str = "heroCtaButton";
    pub const ACKNOWLEDGEMENT_HEADING: &str = "acknowledgementHeading";
    pub const ACKNOWLEDGEMENT_PARAGRAPH: &str = "acknowledgementParagraph";
    pub const FEATURES_CONTAINER: &str = "featuresContainer";
    pub const ABOUT_US_HEADING: &str = "aboutUsHeading";
    pub const ABOUT_US_PARAGRAPH: &str = "aboutUsParagraph";
    pub const ABOUT_US_BUTTON: &str = "aboutUsButton";

    pub const IFRAME_MAIN_HEADING: &str = "iframeMainHeading";
    pub const IFRAME_DESCRIPTION: &str = "iframeDescription";
    pub const IFRAMES_WRAPPER: &str = "iframesWrapper";
    pub const IFRAME_FOOTER_DESCRIPTION: &str = "iframeFooterDescription";

    pub const PROJECTS_SECTION_HEADING: &str = "projectsSectionHeading";
    pub const PROJECT_DETAILS_SECTION: &str = "projectDetailsSection";
    pub const PROJECT_DETAILS_TITLE: &str = "projectDetailsTitle";
    pub const PROJECT_DETAILS_DESCRIPTION: &str = "projectDetailsDescription";
    pub const TEAM_SECTION_HEADING: &str = "teamSectionHeading";
    pub const TEAM_GRID: &str = "teamGrid";
}

/// One child element appended into a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub tag: &'static str,
    /// Empty string means no class attribute.
    pub class: &'static str,
    pub html: String,
}

/// Mutable presentation targets, looked up by identifier.
pub trait SlotSurface {
    fn has(&self, id: &str) -> bool;
    /// Binds plain text (markup-escaping target).
    fn set_text(&mut self, id: &str, text: &str);
    /// Binds pre-rendered inline HTML (markup-bearing target).
    fn set_html(&mut self, id: &str, html: &str);
    fn set_link(&mut self, id: &str, href: &str);
    fn set_image(&mut self, id: &str, src: &str, alt: &str);
    /// Empties a list container. List bindings clear before appending so a
    /// repeated render pass is idempotent.
    fn clear(&mut self, id: &str);
    /// Appends one block to a list container, preserving call order.
    fn append_block(&mut self, container: &str, block: Block);
    /// Removes a section from the presentation entirely.
    fn hide(&mut self, id: &str);
}

/// Recorded state of one in-memory slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub text: Option<String>,
    pub html: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub blocks: Vec<Block>,
    pub hidden: bool,
}

/// Host-side surface: only the ids registered at construction exist, writes
/// to anything else are dropped, exactly like a missing element in the live
/// markup.
#[derive(Debug, Default)]
pub struct MemorySurface {
    slots: BTreeMap<String, SlotState>,
}

impl MemorySurface {
    pub fn with_slots(ids: &[&str]) -> Self {
        let slots = ids
            .iter()
            .map(|id| (id.to_string(), SlotState::default()))
            .collect();
        Self { slots }
    }

    pub fn slot(&self, id: &str) -> Option<&SlotState> {
        self.slots.get(id)
    }

    fn slot_mut(&mut self, id: &str) -> Option<&mut SlotState> {
        self.slots.get_mut(id)
    }
}

impl SlotSurface for MemorySurface {
    fn has(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.text = Some(text.to_string());
        }
    }

    fn set_html(&mut self, id: &str, html: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.html = Some(html.to_string());
        }
    }

    fn set_link(&mut self, id: &str, href: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.href = Some(href.to_string());
        }
    }

    fn set_image(&mut self, id: &str, src: &str, alt: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.src = Some(src.to_string());
            slot.alt = Some(alt.to_string());
        }
    }

    fn clear(&mut self, id: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.blocks.clear();
            slot.html = None;
            slot.text = None;
        }
    }

    fn append_block(&mut self, container: &str, block: Block) {
        if let Some(slot) = self.slot_mut(container) {
            slot.blocks.push(block);
        }
    }

    fn hide(&mut self, id: &str) {
        if let Some(slot) = self.slot_mut(id) {
            slot.hidden = true;
        }
    }
}
