//! Per-page field binders.
//!
//! One render pass: the shared chrome first, then the renderer selected by
//! the page kind. Each binder is a pure mapping from a document section to
//! slot mutations; list fields are expanded by clearing the container and
//! appending one block per entry in source order, so re-rendering with the
//! same document is idempotent.

mod chrome;
mod iframe_embed;
mod landing;
mod projects_team;

pub use chrome::render_chrome;
pub use iframe_embed::render_iframe_page;
pub use landing::render_landing_page;
pub use projects_team::render_projects_team_page;

use crate::content::ContentDocument;
use crate::router::PageKind;
use crate::slots::SlotSurface;

/// Binds one content document to the current page's slots.
pub fn render_page(doc: &ContentDocument, kind: PageKind, surface: &mut dyn SlotSurface) {
    render_chrome(&doc.global, surface);
    match kind {
        PageKind::Landing => render_landing_page(&doc.landing_page, surface),
        PageKind::IframeEmbed => render_iframe_page(&doc.iframe_page, surface),
        PageKind::ProjectsTeam => render_projects_team_page(&doc.projects_team_page, surface),
    }
}
