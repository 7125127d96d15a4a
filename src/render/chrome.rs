//! Shared chrome: title, logo, footer and social lists, copyright line.

use crate::content::GlobalContent;
use crate::slots::{id, Block, SlotSurface};

pub fn render_chrome(global: &GlobalContent, surface: &mut dyn SlotSurface) {
    surface.set_text(
        id::PAGE_TITLE,
        &format!("{} - {}", global.institute_name, global.project_type),
    );

    surface.set_image(
        id::INSTITUTE_LOGO,
        &global.logo_image,
        &format!("{} Logo", global.institute_name),
    );
    surface.set_text(id::FOOTER_LOGO, &global.institute_name);

    surface.clear(id::FOOTER_LINKS);
    for link in &global.footer_links {
        surface.append_block(
            id::FOOTER_LINKS,
            Block {
                tag: "li",
                class: "",
                html: format!("<a href=\"{}\">{}</a>", link.url, link.text),
            },
        );
    }

    surface.clear(id::SOCIAL_MEDIA_ICONS);
    for social in &global.social_media {
        surface.append_block(
            id::SOCIAL_MEDIA_ICONS,
            Block {
                tag: "span",
                class: "social-icon",
                html: format!(
                    "<a href=\"{}\" aria-label=\"{}\"><img src=\"{}\" alt=\"{}\"></a>",
                    social.url, social.label, social.icon, social.label
                ),
            },
        );
    }

    surface.set_text(
        id::COPYRIGHT_TEXT,
        &format!(
            "© {} {} {}. All rights reserved.",
            global.copyright_year, global.institute_name, global.project_type
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{fallback_document, FooterLink, SocialLink};
    use crate::slots::MemorySurface;

    fn chrome_surface() -> MemorySurface {
        MemorySurface::with_slots(&[
            id::PAGE_TITLE,
            id::INSTITUTE_LOGO,
            id::FOOTER_LOGO,
            id::FOOTER_LINKS,
            id::SOCIAL_MEDIA_ICONS,
            id::COPYRIGHT_TEXT,
        ])
    }

    #[test]
    fn footer_links_expand_one_block_per_entry_in_order() {
        let mut global = fallback_document().global;
        global.footer_links = (1..=4)
            .map(|n| FooterLink {
                text: format!("Link {n}"),
                url: format!("/page{n}"),
            })
            .collect();

        let mut surface = chrome_surface();
        render_chrome(&global, &mut surface);

        let blocks = &surface.slot(id::FOOTER_LINKS).expect("slot").blocks;
        assert_eq!(blocks.len(), 4);
        for (i, block) in blocks.iter().enumerate() {
            let n = i + 1;
            assert_eq!(block.tag, "li");
            assert!(block.html.contains(&format!("href=\"/page{n}\"")));
            assert!(block.html.contains(&format!("Link {n}")));
        }
    }

    #[test]
    fn empty_lists_leave_cleared_containers() {
        let mut global = fallback_document().global;
        global.footer_links.clear();
        global.social_media.clear();

        let mut surface = chrome_surface();
        render_chrome(&global, &mut surface);

        assert!(surface.slot(id::FOOTER_LINKS).expect("slot").blocks.is_empty());
        assert!(surface
            .slot(id::SOCIAL_MEDIA_ICONS)
            .expect("slot")
            .blocks
            .is_empty());
    }

    #[test]
    fn social_entries_render_in_source_order() {
        let mut global = fallback_document().global;
        global.social_media = vec![
            SocialLink {
                icon: "/x.svg".to_string(),
                url: "https://x.example".to_string(),
                label: "X".to_string(),
            },
            SocialLink {
                icon: "/yt.svg".to_string(),
                url: "https://yt.example".to_string(),
                label: "YouTube".to_string(),
            },
        ];

        let mut surface = chrome_surface();
        render_chrome(&global, &mut surface);

        let blocks = &surface.slot(id::SOCIAL_MEDIA_ICONS).expect("slot").blocks;
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].html.contains("x.svg"));
        assert!(blocks[1].html.contains("yt.svg"));
    }

    #[test]
    fn copyright_line_interpolates_the_fixed_template() {
        let global = fallback_document().global;
        let mut surface = chrome_surface();
        render_chrome(&global, &mut surface);

        let line = surface
            .slot(id::COPYRIGHT_TEXT)
            .and_then(|s| s.text.clone())
            .expect("bound");
        assert_eq!(
            line,
            "© 2025 GATES INSTITUTE OF TECHNOLOGY Community Service Project (CSP). All rights reserved."
        );
    }

    #[test]
    fn rerender_is_idempotent() {
        let global = fallback_document().global;
        let mut once = chrome_surface();
        render_chrome(&global, &mut once);

        let mut twice = chrome_surface();
        render_chrome(&global, &mut twice);
        render_chrome(&global, &mut twice);

        assert_eq!(
            once.slot(id::FOOTER_LINKS).expect("slot"),
            twice.slot(id::FOOTER_LINKS).expect("slot")
        );
        assert_eq!(
            once.slot(id::COPYRIGHT_TEXT).expect("slot"),
            twice.slot(id::COPYRIGHT_TEXT).expect("slot")
        );
    }
}
