//! Projects & team page binder.

use tracing::warn;

use crate::content::ProjectsTeamPage;
use crate::slots::{id, Block, SlotSurface};

pub fn render_projects_team_page(page: &ProjectsTeamPage, surface: &mut dyn SlotSurface) {
    surface.set_text(id::PAGE_TITLE, &page.title);
    surface.set_text(id::PROJECTS_SECTION_HEADING, &page.projects_section_heading);

    // The details block needs both its data and its target slots; anything
    // missing hides the whole section rather than rendering it half-empty.
    let detail_slots_present =
        surface.has(id::PROJECT_DETAILS_TITLE) && surface.has(id::PROJECT_DETAILS_DESCRIPTION);
    match (&page.projects_details, detail_slots_present) {
        (Some(details), true) => {
            surface.set_text(id::PROJECT_DETAILS_TITLE, &details.title);
            surface.set_text(id::PROJECT_DETAILS_DESCRIPTION, &details.description);
        }
        _ => {
            warn!("Project details elements or data not found.");
            surface.hide(id::PROJECT_DETAILS_SECTION);
        }
    }

    surface.set_text(id::TEAM_SECTION_HEADING, &page.team_section_heading);

    surface.clear(id::TEAM_GRID);
    for member in &page.team_members {
        surface.append_block(
            id::TEAM_GRID,
            Block {
                tag: "div",
                class: "team-member-card",
                html: format!(
                    "<img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p><p class=\"member-bio\">{}</p>",
                    member.image, member.name, member.name, member.role, member.bio
                ),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_document;
    use crate::slots::MemorySurface;

    fn full_surface() -> MemorySurface {
        MemorySurface::with_slots(&[
            id::PAGE_TITLE,
            id::PROJECTS_SECTION_HEADING,
            id::PROJECT_DETAILS_SECTION,
            id::PROJECT_DETAILS_TITLE,
            id::PROJECT_DETAILS_DESCRIPTION,
            id::TEAM_SECTION_HEADING,
            id::TEAM_GRID,
        ])
    }

    #[test]
    fn details_bind_when_data_and_slots_exist() {
        let page = fallback_document().projects_team_page;
        let mut surface = full_surface();
        render_projects_team_page(&page, &mut surface);

        assert_eq!(
            surface
                .slot(id::PROJECT_DETAILS_TITLE)
                .and_then(|s| s.text.clone())
                .as_deref(),
            Some("Integrated Smart Community Solutions")
        );
        assert!(!surface.slot(id::PROJECT_DETAILS_SECTION).expect("slot").hidden);
    }

    #[test]
    fn missing_details_data_hides_the_section_and_renders_the_rest() {
        let mut page = fallback_document().projects_team_page;
        page.projects_details = None;
        let mut surface = full_surface();
        render_projects_team_page(&page, &mut surface);

        assert!(surface.slot(id::PROJECT_DETAILS_SECTION).expect("slot").hidden);
        assert!(surface
            .slot(id::PROJECT_DETAILS_TITLE)
            .expect("slot")
            .text
            .is_none());
        // The rest of the page still renders.
        assert_eq!(
            surface
                .slot(id::TEAM_SECTION_HEADING)
                .and_then(|s| s.text.clone()),
            Some(page.team_section_heading.clone())
        );
        assert_eq!(surface.slot(id::TEAM_GRID).expect("slot").blocks.len(), 5);
    }

    #[test]
    fn missing_detail_slots_also_hide_the_section() {
        let page = fallback_document().projects_team_page;
        let mut surface = MemorySurface::with_slots(&[
            id::PAGE_TITLE,
            id::PROJECTS_SECTION_HEADING,
            id::PROJECT_DETAILS_SECTION,
            id::TEAM_SECTION_HEADING,
            id::TEAM_GRID,
        ]);
        render_projects_team_page(&page, &mut surface);

        assert!(surface.slot(id::PROJECT_DETAILS_SECTION).expect("slot").hidden);
    }

    #[test]
    fn team_cards_expand_in_source_order() {
        let page = fallback_document().projects_team_page;
        let mut surface = full_surface();
        render_projects_team_page(&page, &mut surface);

        let blocks = &surface.slot(id::TEAM_GRID).expect("slot").blocks;
        assert_eq!(blocks.len(), 5);
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.class, "team-member-card");
            assert!(block.html.contains(&format!("[Student Name {}]", i + 1)));
        }
    }

    #[test]
    fn rerender_is_idempotent() {
        let page = fallback_document().projects_team_page;
        let mut once = full_surface();
        render_projects_team_page(&page, &mut once);

        let mut twice = full_surface();
        render_projects_team_page(&page, &mut twice);
        render_projects_team_page(&page, &mut twice);

        assert_eq!(
            once.slot(id::TEAM_GRID).expect("slot"),
            twice.slot(id::TEAM_GRID).expect("slot")
        );
    }
}
